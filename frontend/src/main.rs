use yew::prelude::*;
use log::info;

mod animation {
    pub mod easing;
    pub mod player;
    pub mod timeline;
    pub mod title_sequence;
}
mod config;
mod error;
mod lifecycle;
mod scene;
mod scroll;
mod components {
    pub mod animated_title;
    pub mod floating_icons;
    pub mod hero;
    pub mod reveal;
    pub mod scroll_indicator;
}

use components::hero::HeroSection;
use config::HeroConfig;


#[function_component]
fn App() -> Html {
    let config = use_state(HeroConfig::load);

    html! {
        <main>
            <HeroSection config={(*config).clone()} />
        </main>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting IoT Club site");
    yew::Renderer::<App>::new().render();
}
