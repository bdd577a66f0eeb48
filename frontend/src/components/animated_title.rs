use log::{debug, warn};
use web_sys::{window, Element};
use yew::prelude::*;

use crate::animation::player::play;
use crate::animation::title_sequence::{build_title_timeline, TitleFrame};
use crate::error::HeroError;
use crate::lifecycle::{EventSource, FrameTicker, Subscription};

#[derive(Properties, PartialEq)]
pub struct AnimatedTitleProps {
    pub lines: Vec<String>,
    pub logo_src: String,
    pub logo_alt: String,
    pub frame_interval_ms: u32,
}

/// Anything a frame's inline style can be written to.
pub trait StyleTarget {
    fn apply_style(&self, style: &str);
}

impl StyleTarget for Element {
    fn apply_style(&self, style: &str) {
        let _ = self.set_attribute("style", style);
    }
}

/// Plays the title loop onto `text` and `logo`. If either node is absent the
/// setup is skipped and nothing is subscribed.
pub fn animate_title<N, S, C>(
    text: Option<N>,
    logo: Option<N>,
    ticker: S,
    now_ms: C,
) -> Result<Option<Subscription<S>>, HeroError>
where
    N: StyleTarget + 'static,
    S: EventSource,
    C: Fn() -> f64 + 'static,
{
    let (text, logo) = match (text, logo) {
        (Some(text), Some(logo)) => (text, logo),
        _ => {
            debug!("Title nodes not mounted, skipping animation");
            return Ok(None);
        }
    };

    let playback = play(build_title_timeline()?, ticker, now_ms, move |frame| {
        let frame = TitleFrame::from_frame(frame);
        text.apply_style(&frame.text_style());
        logo.apply_style(&frame.logo_style());
    })?;
    debug!("Title animation running");
    Ok(Some(playback))
}

fn start_title_animation(
    text_ref: &NodeRef,
    logo_ref: &NodeRef,
    frame_interval_ms: u32,
) -> Result<Option<Subscription<FrameTicker>>, HeroError> {
    let performance = window()
        .and_then(|w| w.performance())
        .ok_or(HeroError::MissingGlobal("performance"))?;

    animate_title(
        text_ref.cast::<Element>(),
        logo_ref.cast::<Element>(),
        FrameTicker::new(frame_interval_ms),
        move || performance.now(),
    )
}

#[function_component(AnimatedTitle)]
pub fn animated_title(props: &AnimatedTitleProps) -> Html {
    let text_ref = use_node_ref();
    let logo_ref = use_node_ref();

    {
        let text_ref = text_ref.clone();
        let logo_ref = logo_ref.clone();
        let frame_interval_ms = props.frame_interval_ms;
        use_effect_with_deps(
            move |_| {
                let playback = start_title_animation(&text_ref, &logo_ref, frame_interval_ms)
                    .unwrap_or_else(|e| {
                        warn!("Title animation disabled: {}", e);
                        None
                    });
                move || drop(playback)
            },
            (),
        );
    }

    // Initial frame inline so nothing flashes before the first tick
    let rest = TitleFrame {
        text_clip_right: 0.0,
        logo_opacity: 0.0,
        logo_scale: 0.0,
        logo_rotation: 0.0,
    };

    html! {
        <div class="hero-title">
            <style>
                {r#"
                    .hero-title {
                        position: relative;
                        display: inline-block;
                        width: 100%;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero-title .title-text {
                        position: relative;
                        z-index: 10;
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .hero-title .title-line {
                        font-size: 12rem;
                        font-weight: 900;
                        line-height: 1;
                        letter-spacing: 0.05em;
                        color: #00ffff;
                        text-shadow: 0 0 10px #00ffff, 0 0 20px #00ffff, 0 0 40px #00ffff,
                            0 0 80px #00ffff, 0 0 120px #00ffff;
                        filter: brightness(1.2);
                    }
                    .hero-title .title-line + .title-line {
                        margin-top: -2rem;
                    }
                    @media (min-width: 768px) {
                        .hero-title .title-line {
                            font-size: 16rem;
                        }
                    }
                    .hero-title .title-logo {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 8rem;
                        height: 8rem;
                        object-fit: contain;
                        z-index: 20;
                        pointer-events: none;
                        border-radius: 9999px;
                        filter: drop-shadow(0 0 30px rgba(0, 255, 255, 0.6));
                        background: radial-gradient(circle, rgba(26, 26, 46, 0.9) 0%, rgba(26, 26, 46, 0.7) 70%, transparent 100%);
                        backdrop-filter: blur(10px);
                        border: 2px solid rgba(0, 255, 255, 0.3);
                        mix-blend-mode: screen;
                    }
                "#}
            </style>
            <div ref={text_ref} class="title-text" style={rest.text_style()}>
                { for props.lines.iter().map(|line| html! {
                    <div class="title-line">{ line.clone() }</div>
                }) }
            </div>
            <img
                ref={logo_ref}
                class="title-logo"
                src={props.logo_src.clone()}
                alt={props.logo_alt.clone()}
                style={rest.logo_style()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::lifecycle::testing::CountingSource;

    #[derive(Clone, Default)]
    struct RecordedNode {
        styles: Rc<RefCell<Vec<String>>>,
    }

    impl StyleTarget for RecordedNode {
        fn apply_style(&self, style: &str) {
            self.styles.borrow_mut().push(style.to_string());
        }
    }

    #[test]
    fn both_nodes_missing_skips_setup() {
        let ticker = CountingSource::default();
        let result = animate_title(None::<RecordedNode>, None, ticker.clone(), || 0.0);
        assert!(matches!(result, Ok(None)));
        assert_eq!(ticker.listener_count(), 0);
    }

    #[test]
    fn one_missing_node_skips_setup() {
        let ticker = CountingSource::default();
        let text = RecordedNode::default();

        let result = animate_title(Some(text.clone()), None, ticker.clone(), || 0.0);
        assert!(matches!(result, Ok(None)));
        assert_eq!(ticker.listener_count(), 0);
        assert!(text.styles.borrow().is_empty());

        let logo = RecordedNode::default();
        let result = animate_title(None, Some(logo.clone()), ticker.clone(), || 0.0);
        assert!(matches!(result, Ok(None)));
        assert!(logo.styles.borrow().is_empty());
    }

    #[test]
    fn mounted_nodes_receive_frames_until_teardown() {
        let ticker = CountingSource::default();
        let clock = Rc::new(Cell::new(0.0));
        let text = RecordedNode::default();
        let logo = RecordedNode::default();

        let playback = {
            let clock = clock.clone();
            animate_title(Some(text.clone()), Some(logo.clone()), ticker.clone(), move || clock.get())
                .unwrap()
                .expect("both nodes present")
        };
        assert_eq!(ticker.listener_count(), 1);
        assert_eq!(text.styles.borrow()[0], "clip-path: inset(0 0.000% 0 0);");

        clock.set(4_000.0);
        ticker.fire();
        assert_eq!(text.styles.borrow().last().unwrap(), "clip-path: inset(0 100.000% 0 0);");
        assert!(logo.styles.borrow().last().unwrap().starts_with("opacity: 1.000;"));

        drop(playback);
        assert_eq!(ticker.listener_count(), 0);
        ticker.fire();
        assert_eq!(text.styles.borrow().len(), 2);
    }

    #[test]
    fn unmounted_refs_skip_the_animation() {
        let text_ref = NodeRef::default();
        let logo_ref = NodeRef::default();
        assert!(text_ref.cast::<Element>().is_none());
        let result = animate_title(
            text_ref.cast::<Element>(),
            logo_ref.cast::<Element>(),
            CountingSource::default(),
            || 0.0,
        );
        assert!(matches!(result, Ok(None)));
    }
}
