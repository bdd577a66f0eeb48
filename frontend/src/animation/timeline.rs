use std::fmt::Debug;

use crate::animation::easing::Ease;
use crate::error::HeroError;

/// Where a newly added step starts, relative to the current end of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after everything added so far.
    Sequence,
    /// This many seconds before the current end.
    Overlap(f64),
    /// This many seconds after the current end.
    Delay(f64),
    /// Absolute time in seconds.
    At(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Infinite,
    /// Extra iterations after the first one.
    Times(u32),
}

#[derive(Debug, Clone, PartialEq)]
struct Track<C> {
    channel: C,
    from: f64,
    to: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step<C> {
    start: f64,
    duration: f64,
    ease: Ease,
    tracks: Vec<Track<C>>,
}

impl<C> Step<C> {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Channel values at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<C> {
    values: Vec<(C, f64)>,
}

impl<C: Copy + PartialEq> Frame<C> {
    pub fn get(&self, channel: C) -> Option<f64> {
        self.values
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, v)| *v)
    }
}

pub struct TimelineBuilder<C> {
    initial: Vec<(C, f64)>,
    current: Vec<(C, f64)>,
    steps: Vec<Step<C>>,
    end: f64,
    repeat: Repeat,
    repeat_delay: f64,
    error: Option<HeroError>,
}

impl<C: Copy + PartialEq + Debug> TimelineBuilder<C> {
    /// Starts a timeline whose channels rest at `initial` until a step moves them.
    pub fn new(initial: &[(C, f64)]) -> Self {
        Self {
            initial: initial.to_vec(),
            current: initial.to_vec(),
            steps: Vec::new(),
            end: 0.0,
            repeat: Repeat::Times(0),
            repeat_delay: 0.0,
            error: None,
        }
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn repeat_delay(mut self, seconds: f64) -> Self {
        if self.error.is_none() && !(seconds.is_finite() && seconds >= 0.0) {
            self.error = Some(HeroError::InvalidStep {
                index: self.steps.len(),
                field: "repeat_delay",
                value: seconds,
            });
        }
        self.repeat_delay = seconds;
        self
    }

    /// A step that changes nothing and only occupies time.
    pub fn hold(self, duration: f64, position: Position) -> Self {
        self.to(&[], duration, Ease::Linear, position)
    }

    /// Tweens every listed channel from its value at this point in the
    /// sequence to the given target.
    pub fn to(mut self, targets: &[(C, f64)], duration: f64, ease: Ease, position: Position) -> Self {
        if self.error.is_some() {
            return self;
        }
        let index = self.steps.len();
        if !(duration.is_finite() && duration >= 0.0) {
            self.error = Some(HeroError::InvalidStep { index, field: "duration", value: duration });
            return self;
        }
        let start = match self.place(position) {
            Ok(start) => start,
            Err(value) => {
                self.error = Some(HeroError::InvalidStep { index, field: "position", value });
                return self;
            }
        };

        let mut tracks = Vec::with_capacity(targets.len());
        for &(channel, to) in targets {
            let from = match self.current.iter().position(|(c, _)| *c == channel) {
                Some(i) => std::mem::replace(&mut self.current[i].1, to),
                None => {
                    self.initial.push((channel, 0.0));
                    self.current.push((channel, to));
                    0.0
                }
            };
            tracks.push(Track { channel, from, to });
        }

        self.end = self.end.max(start + duration);
        self.steps.push(Step { start, duration, ease, tracks });
        self
    }

    fn place(&self, position: Position) -> Result<f64, f64> {
        let (offset, start) = match position {
            Position::Sequence => (0.0, self.end),
            Position::Overlap(d) => (d, (self.end - d).max(0.0)),
            Position::Delay(d) => (d, self.end + d),
            Position::At(t) => (t, t),
        };
        if offset.is_finite() && offset >= 0.0 {
            Ok(start)
        } else {
            Err(offset)
        }
    }

    pub fn build(self) -> Result<Timeline<C>, HeroError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Timeline {
            initial: self.initial,
            steps: self.steps,
            duration: self.end,
            repeat: self.repeat,
            repeat_delay: self.repeat_delay,
        })
    }
}

/// A fixed, branch-free sequence of tweens. Sampling is a pure function of
/// elapsed time, so the same instant always renders the same frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<C> {
    initial: Vec<(C, f64)>,
    steps: Vec<Step<C>>,
    duration: f64,
    repeat: Repeat,
    repeat_delay: f64,
}

impl<C: Copy + PartialEq> Timeline<C> {
    /// Length of one iteration, without the repeat delay.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Time from the start of one iteration to the start of the next.
    pub fn period(&self) -> f64 {
        self.duration + self.repeat_delay
    }

    pub fn steps(&self) -> &[Step<C>] {
        &self.steps
    }

    /// Maps wall time since start onto a position inside one iteration.
    pub fn local_time(&self, elapsed: f64) -> f64 {
        if !(elapsed > 0.0) {
            return 0.0;
        }
        let period = self.period();
        if period <= 0.0 {
            return self.duration;
        }
        if let Repeat::Times(extra) = self.repeat {
            let total = period * (f64::from(extra) + 1.0) - self.repeat_delay;
            if elapsed >= total {
                return self.duration;
            }
        }
        (elapsed % period).min(self.duration)
    }

    pub fn sample(&self, elapsed: f64) -> Frame<C> {
        self.sample_local(self.local_time(elapsed))
    }

    pub fn sample_local(&self, t: f64) -> Frame<C> {
        let values = self
            .initial
            .iter()
            .map(|&(channel, initial)| (channel, self.channel_value(channel, initial, t)))
            .collect();
        Frame { values }
    }

    fn channel_value(&self, channel: C, initial: f64, t: f64) -> f64 {
        // Latest-starting step touching this channel that has begun; later
        // additions win ties.
        let mut active: Option<(&Step<C>, &Track<C>)> = None;
        for step in &self.steps {
            if step.start > t {
                continue;
            }
            if let Some(track) = step.tracks.iter().find(|tr| tr.channel == channel) {
                if active.map_or(true, |(prev, _)| step.start >= prev.start) {
                    active = Some((step, track));
                }
            }
        }

        match active {
            None => initial,
            Some((step, track)) => {
                let progress = if step.duration == 0.0 {
                    1.0
                } else {
                    (t - step.start) / step.duration
                };
                track.from + (track.to - track.from) * step.ease.apply(progress)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Ch {
        X,
        Y,
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn placement_follows_position_rules() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .hold(2.0, Position::Sequence)
            .to(&[(Ch::X, 1.0)], 2.0, Ease::Linear, Position::Sequence)
            .to(&[(Ch::Y, 1.0)], 0.5, Ease::Linear, Position::Overlap(0.5))
            .hold(1.0, Position::Delay(0.25))
            .to(&[(Ch::X, 3.0)], 1.0, Ease::Linear, Position::At(0.5))
            .build()
            .unwrap();

        let starts: Vec<f64> = tl.steps().iter().map(Step::start).collect();
        assert_eq!(starts, vec![0.0, 2.0, 3.5, 4.25, 0.5]);
        assert!(close(tl.duration(), 5.25));
    }

    #[test]
    fn overlap_past_the_beginning_clamps_to_zero() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .hold(1.0, Position::Sequence)
            .to(&[(Ch::X, 1.0)], 1.0, Ease::Linear, Position::Overlap(5.0))
            .build()
            .unwrap();
        assert_eq!(tl.steps()[1].start(), 0.0);
    }

    #[test]
    fn sampling_interpolates_and_holds() {
        let tl = TimelineBuilder::new(&[(Ch::X, 10.0)])
            .hold(1.0, Position::Sequence)
            .to(&[(Ch::X, 20.0)], 2.0, Ease::Linear, Position::Sequence)
            .build()
            .unwrap();

        assert_eq!(tl.sample_local(0.5).get(Ch::X), Some(10.0));
        assert!(close(tl.sample_local(2.0).get(Ch::X).unwrap(), 15.0));
        assert_eq!(tl.sample_local(3.0).get(Ch::X), Some(20.0));
        assert_eq!(tl.sample_local(3.0).get(Ch::Y), None);
    }

    #[test]
    fn from_values_chain_through_the_sequence() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .to(&[(Ch::X, 4.0)], 1.0, Ease::Linear, Position::Sequence)
            .to(&[(Ch::X, 8.0)], 1.0, Ease::Linear, Position::Sequence)
            .build()
            .unwrap();
        assert!(close(tl.sample_local(1.5).get(Ch::X).unwrap(), 6.0));
    }

    #[test]
    fn unknown_channel_starts_from_zero() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .to(&[(Ch::Y, 2.0)], 1.0, Ease::Linear, Position::Sequence)
            .build()
            .unwrap();
        assert_eq!(tl.sample_local(0.0).get(Ch::Y), Some(0.0));
        assert_eq!(tl.sample_local(1.0).get(Ch::Y), Some(2.0));
    }

    #[test]
    fn infinite_repeat_wraps_and_holds_during_delay() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .to(&[(Ch::X, 1.0)], 2.0, Ease::Linear, Position::Sequence)
            .repeat(Repeat::Infinite)
            .repeat_delay(1.0)
            .build()
            .unwrap();

        assert!(close(tl.period(), 3.0));
        assert!(close(tl.local_time(2.5), 2.0));
        assert!(close(tl.local_time(3.5), 0.5));
        assert!(close(tl.local_time(3000.0 + 1.0), 1.0));
        assert_eq!(tl.sample(2.9).get(Ch::X), Some(1.0));
    }

    #[test]
    fn finite_repeat_stops_at_end_state() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .to(&[(Ch::X, 1.0)], 1.0, Ease::Linear, Position::Sequence)
            .repeat(Repeat::Times(1))
            .repeat_delay(0.5)
            .build()
            .unwrap();

        assert!(close(tl.local_time(1.75), 0.25));
        assert!(close(tl.local_time(2.5), 1.0));
        assert!(close(tl.local_time(100.0), 1.0));
    }

    #[test]
    fn negative_time_is_the_start() {
        let tl = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .to(&[(Ch::X, 1.0)], 1.0, Ease::Linear, Position::Sequence)
            .build()
            .unwrap();
        assert_eq!(tl.local_time(-5.0), 0.0);
        assert_eq!(tl.local_time(f64::NAN), 0.0);
    }

    #[test]
    fn invalid_steps_are_rejected() {
        let err = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .hold(1.0, Position::Sequence)
            .to(&[(Ch::X, 1.0)], -1.0, Ease::Linear, Position::Sequence)
            .build()
            .unwrap_err();
        assert_eq!(err, HeroError::InvalidStep { index: 1, field: "duration", value: -1.0 });

        let err = TimelineBuilder::new(&[(Ch::X, 0.0)])
            .hold(1.0, Position::Overlap(f64::INFINITY))
            .build()
            .unwrap_err();
        assert!(matches!(err, HeroError::InvalidStep { index: 0, field: "position", .. }));

        assert!(TimelineBuilder::<Ch>::new(&[]).repeat_delay(-1.0).build().is_err());
    }
}
