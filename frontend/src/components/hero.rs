use yew::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::components::floating_icons::FloatingIcons;
use crate::components::reveal::Reveal;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::config::HeroConfig;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub config: HeroConfig,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let config = &props.config;

    html! {
        <section class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f3460 100%);
                        font-family: system-ui, sans-serif;
                    }
                    .hero-section .grid-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: linear-gradient(rgba(0, 255, 255, 0.1) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(0, 255, 255, 0.1) 1px, transparent 1px);
                        background-size: 50px 50px;
                    }
                    .hero-section .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .hero-section .hero-subtitle {
                        font-size: 1.25rem;
                        font-weight: 300;
                        letter-spacing: 0.05em;
                        margin: 3rem 0 1rem;
                        color: #67e8f9;
                    }
                    .hero-section .hero-tagline {
                        font-size: 1.125rem;
                        font-weight: 300;
                        letter-spacing: 0.025em;
                        max-width: 42rem;
                        margin: 0 auto;
                        color: #d1d5db;
                    }
                    @media (min-width: 768px) {
                        .hero-section .hero-subtitle { font-size: 1.5rem; }
                        .hero-section .hero-tagline { font-size: 1.25rem; }
                    }
                    .hero-section .bottom-fade {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        pointer-events: none;
                        background: linear-gradient(to top, #0f0f1a, transparent 60%);
                    }
                "#}
            </style>
            <FloatingIcons />
            <div class="grid-pattern"></div>

            <div class="hero-content">
                <Reveal delay_ms={500} duration_ms={1000} rise_px={30}>
                    <AnimatedTitle
                        lines={config.title_lines.clone()}
                        logo_src={config.logo_src.clone()}
                        logo_alt={config.logo_alt.clone()}
                        frame_interval_ms={config.frame_interval_ms}
                    />
                </Reveal>
                <Reveal delay_ms={1100} duration_ms={800} rise_px={20}>
                    <p class="hero-subtitle">{ config.subtitle.clone() }</p>
                </Reveal>
                <Reveal delay_ms={1300} duration_ms={800} rise_px={20}>
                    <p class="hero-tagline">{ config.tagline.clone() }</p>
                </Reveal>
            </div>

            <ScrollIndicator threshold={config.scroll_threshold} />
            <div class="bottom-fade"></div>
        </section>
    }
}
