use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::error::HeroError;
use crate::lifecycle::{EventSource, Subscription, WindowEvent};
use crate::scene::{icon_field, FloatingIcon, PerspectiveCamera, ScreenPoint};

/// Rendered icon edge length in world units.
const ICON_SIZE: f64 = 0.4;
const FALLBACK_ASPECT: f64 = 16.0 / 9.0;

fn viewport_aspect() -> f64 {
    window()
        .and_then(|w| {
            let width = w.inner_width().ok()?.as_f64()?;
            let height = w.inner_height().ok()?.as_f64()?;
            (height > 0.0).then(|| width / height)
        })
        .unwrap_or(FALLBACK_ASPECT)
}

/// Re-reads the viewport aspect on every event from `source` so the field
/// can be re-projected.
pub fn watch_aspect<S, R, F>(source: S, read_aspect: R, on_change: F) -> Result<Subscription<S>, HeroError>
where
    S: EventSource,
    R: Fn() -> f64 + 'static,
    F: Fn(f64) + 'static,
{
    Subscription::new(source, move || on_change(read_aspect()))
}

pub fn icon_style(icon: &FloatingIcon, at: &ScreenPoint, index: usize) -> String {
    let vh_per_unit = at.unit_scale * 100.0;
    format!(
        "left: {:.2}%; top: {:.2}%; font-size: {:.2}vh; color: {}; \
         text-shadow: 0 0 12px {}; --bob: {:.2}vh; --tilt: {:.2}deg; \
         animation-duration: {:.2}s; animation-delay: -{:.2}s;",
        at.x_pct,
        at.y_pct,
        ICON_SIZE * vh_per_unit,
        icon.color,
        icon.color,
        icon.float_amplitude() * vh_per_unit,
        icon.tilt_degrees(),
        icon.float_period(),
        // Spread the phases so the icons never bob in lockstep
        index as f64 * 0.7,
    )
}

#[function_component(FloatingIcons)]
pub fn floating_icons() -> Html {
    let aspect = use_state_eq(viewport_aspect);
    let camera = PerspectiveCamera::default();

    {
        let aspect = aspect.clone();
        use_effect_with_deps(
            move |_| {
                aspect.set(viewport_aspect());
                let subscription = window()
                    .ok_or(HeroError::MissingGlobal("window"))
                    .and_then(|w| {
                        watch_aspect(WindowEvent::resize(w), viewport_aspect, move |next| {
                            aspect.set(next)
                        })
                    });
                if let Err(e) = &subscription {
                    warn!("Icon field will not follow resizes: {}", e);
                }

                move || drop(subscription)
            },
            (),
        );
    }

    let icons = icon_field()
        .into_iter()
        .enumerate()
        .filter_map(|(index, icon)| {
            camera
                .project(icon.position, *aspect)
                .map(|at| (index, icon, at))
        })
        .map(|(index, icon, at)| {
            html! {
                <span
                    class="hero-floating-icon"
                    aria-hidden="true"
                    data-icon={icon.kind.label()}
                    style={icon_style(&icon, &at, index)}
                >
                    { icon.kind.glyph() }
                </span>
            }
        });

    html! {
        <div class="hero-icon-field">
            <style>
                {r#"
                    .hero-icon-field {
                        position: absolute;
                        inset: 0;
                        opacity: 0.4;
                        pointer-events: none;
                    }
                    .hero-floating-icon {
                        position: absolute;
                        opacity: 0.8;
                        animation-name: hero-float;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    @keyframes hero-float {
                        0%, 100% { transform: translate(-50%, -50%) translateY(0) rotate(0deg); }
                        25% { transform: translate(-50%, -50%) translateY(calc(-1 * var(--bob))) rotate(var(--tilt)); }
                        75% { transform: translate(-50%, -50%) translateY(var(--bob)) rotate(calc(-1 * var(--tilt))); }
                    }
                "#}
            </style>
            { for icons }
        </div>
    }
}
