use crate::animation::timeline::{Frame, Timeline};
use crate::error::HeroError;
use crate::lifecycle::{EventSource, Subscription};

/// Samples `timeline` on every tick of `ticker` and hands the frame to
/// `render`. `now_ms` is any monotonic millisecond clock; playback starts at
/// the moment of the call. Dropping the returned subscription halts playback.
pub fn play<C, S, N, R>(
    timeline: Timeline<C>,
    ticker: S,
    now_ms: N,
    render: R,
) -> Result<Subscription<S>, HeroError>
where
    C: Copy + PartialEq + 'static,
    S: EventSource,
    N: Fn() -> f64 + 'static,
    R: Fn(&Frame<C>) + 'static,
{
    let started = now_ms();
    render(&timeline.sample(0.0));

    Subscription::new(ticker, move || {
        let elapsed = (now_ms() - started) / 1000.0;
        render(&timeline.sample(elapsed));
    })
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::animation::title_sequence::{build_title_timeline, TitleFrame};
    use crate::lifecycle::testing::CountingSource;

    #[test]
    fn renders_initial_frame_then_one_per_tick() {
        let ticker = CountingSource::default();
        let clock = Rc::new(Cell::new(1_000.0));
        let frames = Rc::new(RefCell::new(Vec::new()));

        let playback = {
            let clock = clock.clone();
            let frames = frames.clone();
            play(
                build_title_timeline().unwrap(),
                ticker.clone(),
                move || clock.get(),
                move |f| frames.borrow_mut().push(TitleFrame::from_frame(f)),
            )
            .unwrap()
        };
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(frames.borrow()[0].logo_opacity, 0.0);

        // 5s after start the logo is in its hold
        clock.set(6_000.0);
        ticker.fire();
        let last = *frames.borrow().last().unwrap();
        assert!((last.logo_opacity - 1.0).abs() < 1e-6);
        assert!((last.text_clip_right - 100.0).abs() < 1e-6);

        drop(playback);
        assert_eq!(ticker.listener_count(), 0);
    }

    #[test]
    fn teardown_halts_rendering() {
        let ticker = CountingSource::default();
        let renders = Rc::new(Cell::new(0));

        let mut playback = {
            let renders = renders.clone();
            play(build_title_timeline().unwrap(), ticker.clone(), || 0.0, move |_| {
                renders.set(renders.get() + 1)
            })
            .unwrap()
        };
        ticker.fire();
        assert_eq!(renders.get(), 2);

        playback.cancel();
        ticker.fire();
        ticker.fire();
        assert_eq!(renders.get(), 2);
        assert_eq!(ticker.listener_count(), 0);
    }
}
