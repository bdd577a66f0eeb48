use crate::animation::easing::{Ease, DEFAULT_OVERSHOOT};
use crate::animation::timeline::{Frame, Position, Repeat, Timeline, TimelineBuilder};
use crate::error::HeroError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleChannel {
    /// Right clip inset of the title text, in percent. 100 hides it entirely.
    TextClipRight,
    LogoOpacity,
    LogoScale,
    /// Degrees.
    LogoRotation,
}

pub const REPEAT_DELAY_SECS: f64 = 1.0;

/// Text clips away, the logo spins in, holds, spins out, text comes back.
pub fn build_title_timeline() -> Result<Timeline<TitleChannel>, HeroError> {
    use TitleChannel::*;

    TimelineBuilder::new(&[
        (TextClipRight, 0.0),
        (LogoOpacity, 0.0),
        (LogoScale, 0.0),
        (LogoRotation, 0.0),
    ])
    .repeat(Repeat::Infinite)
    .repeat_delay(REPEAT_DELAY_SECS)
    .hold(2.0, Position::Sequence)
    .to(&[(TextClipRight, 100.0)], 2.0, Ease::Power2InOut, Position::Sequence)
    .to(
        &[(LogoOpacity, 1.0), (LogoScale, 1.0), (LogoRotation, 360.0)],
        0.5,
        Ease::BackOut(DEFAULT_OVERSHOOT),
        Position::Overlap(0.5),
    )
    .hold(2.0, Position::Sequence)
    .to(
        &[(LogoOpacity, 0.0), (LogoScale, 0.0), (LogoRotation, 720.0)],
        0.5,
        Ease::BackIn(DEFAULT_OVERSHOOT),
        Position::Sequence,
    )
    .to(&[(TextClipRight, 0.0)], 2.0, Ease::Power2InOut, Position::Overlap(0.2))
    .build()
}

/// What the title looks like at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFrame {
    pub text_clip_right: f64,
    pub logo_opacity: f64,
    pub logo_scale: f64,
    pub logo_rotation: f64,
}

impl TitleFrame {
    pub fn from_frame(frame: &Frame<TitleChannel>) -> Self {
        let get = |channel| frame.get(channel).unwrap_or(0.0);
        Self {
            text_clip_right: get(TitleChannel::TextClipRight),
            logo_opacity: get(TitleChannel::LogoOpacity),
            logo_scale: get(TitleChannel::LogoScale),
            logo_rotation: get(TitleChannel::LogoRotation),
        }
    }

    pub fn text_style(&self) -> String {
        format!("clip-path: inset(0 {:.3}% 0 0);", self.text_clip_right)
    }

    pub fn logo_style(&self) -> String {
        // Back easing overshoots, but opacity outside [0, 1] means nothing to CSS.
        // Scale is left alone so the pop past full size stays visible.
        format!(
            "opacity: {:.3}; transform: translate(-50%, -50%) rotate({:.2}deg) scale({:.4});",
            self.logo_opacity.clamp(0.0, 1.0),
            self.logo_rotation,
            self.logo_scale,
        )
    }
}
