/// Progress curves for tweens. Every curve maps 0 to 0 and 1 to 1; `Back`
/// curves overshoot in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
    BackIn(f64),
    BackOut(f64),
}

/// Overshoot used by the title sequence.
pub const DEFAULT_OVERSHOOT: f64 = 1.7;

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::BackIn(s) => back_in(t, s),
            Ease::BackOut(s) => 1.0 - back_in(1.0 - t, s),
        }
    }
}

fn back_in(t: f64, overshoot: f64) -> f64 {
    t * t * ((overshoot + 1.0) * t - overshoot)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::BackIn(DEFAULT_OVERSHOOT),
        Ease::BackOut(DEFAULT_OVERSHOOT),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at 1", ease);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Linear.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2InOut.apply(7.0), 1.0);
    }

    #[test]
    fn in_out_is_symmetric_around_midpoint() {
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
        let a = Ease::Power2InOut.apply(0.2);
        let b = Ease::Power2InOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn back_curves_overshoot() {
        // back-in dips below zero early, back-out goes past one late
        assert!(Ease::BackIn(DEFAULT_OVERSHOOT).apply(0.2) < 0.0);
        assert!(Ease::BackOut(DEFAULT_OVERSHOOT).apply(0.8) > 1.0);
    }
}
