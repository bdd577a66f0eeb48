use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub delay_ms: u32,
    pub duration_ms: u32,
    /// How far below its resting place the content starts, in px.
    pub rise_px: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

pub fn reveal_style(shown: bool, rise_px: u32, duration_ms: u32) -> String {
    let (opacity, offset) = if shown { (1, 0) } else { (0, rise_px) };
    format!(
        "opacity: {}; transform: translateY({}px); transition: opacity {}ms ease-out, transform {}ms ease-out;",
        opacity, offset, duration_ms, duration_ms
    )
}

/// Fades and slides its children into place once, `delay_ms` after mount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        // A zero timeout never fires, so the shortest wait is one ms
        use_timeout(move || shown.set(true), props.delay_ms.max(1));
    }

    html! {
        <div class={props.class.clone()} style={reveal_style(*shown, props.rise_px, props.duration_ms)}>
            { for props.children.iter() }
        </div>
    }
}
