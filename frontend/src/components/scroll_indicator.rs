use yew::prelude::*;

use crate::scroll::use_scroll_indicator;

#[derive(Properties, PartialEq)]
pub struct ScrollIndicatorProps {
    pub threshold: f64,
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator(props: &ScrollIndicatorProps) -> Html {
    let state = use_scroll_indicator(props.threshold);

    html! {
        <div
            class={classes!("hero-scroll-indicator", (!state.is_visible()).then(|| "hidden"))}
            aria-hidden={(!state.is_visible()).to_string()}
        >
            <style>
                {r#"
                    .hero-scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: #67e8f9;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        transition: opacity 0.3s ease;
                    }
                    .hero-scroll-indicator.hidden {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .hero-scroll-indicator .chevron {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(0, 255, 255, 0.5);
                        border-radius: 9999px;
                        position: relative;
                    }
                    .hero-scroll-indicator .chevron::after {
                        content: "";
                        position: absolute;
                        top: 0.4rem;
                        left: 50%;
                        width: 0.25rem;
                        height: 0.5rem;
                        margin-left: -0.125rem;
                        border-radius: 9999px;
                        background: #00ffff;
                        animation: scroll-dot 1.6s ease-in-out infinite;
                    }
                    @keyframes scroll-dot {
                        0% { transform: translateY(0); opacity: 1; }
                        100% { transform: translateY(1rem); opacity: 0; }
                    }
                "#}
            </style>
            <div class="chevron"></div>
            <span>{"Scroll"}</span>
        </div>
    }
}
