use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::error::HeroError;
use crate::lifecycle::{EventSource, Subscription, WindowEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Visible,
    Hidden,
}

impl IndicatorState {
    /// Hidden strictly past the threshold. No hysteresis: an offset sitting
    /// right on the boundary may flip on every event.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            IndicatorState::Hidden
        } else {
            IndicatorState::Visible
        }
    }

    pub fn is_visible(self) -> bool {
        self == IndicatorState::Visible
    }
}

/// Recomputes the indicator on every event from `source` and reports it.
/// The returned subscription owns the listener.
pub fn watch_scroll<S, R, F>(
    source: S,
    read_offset: R,
    threshold: f64,
    on_change: F,
) -> Result<Subscription<S>, HeroError>
where
    S: EventSource,
    R: Fn() -> f64 + 'static,
    F: Fn(IndicatorState) + 'static,
{
    Subscription::new(source, move || {
        on_change(IndicatorState::from_offset(read_offset(), threshold));
    })
}

fn current_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[hook]
pub fn use_scroll_indicator(threshold: f64) -> IndicatorState {
    let state = use_state_eq(|| IndicatorState::from_offset(current_offset(), threshold));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                state.set(IndicatorState::from_offset(current_offset(), threshold));

                let subscription = window()
                    .ok_or(HeroError::MissingGlobal("window"))
                    .and_then(|w| {
                        watch_scroll(WindowEvent::scroll(w), current_offset, threshold, move |next| {
                            state.set(next)
                        })
                    });
                if let Err(e) = &subscription {
                    warn!("Scroll indicator stays static: {}", e);
                }

                move || drop(subscription)
            },
            threshold,
        );
    }

    *state
}
