use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub reveal: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    let reveal_btn = {
        let cb = props.reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // stays mounted so the fade-out transition can run
    html! {
        <div id="introOverlay" class={classes!("intro-overlay", (!props.show).then_some("hide-intro"))}>
            <div class="intro-card">
                <div class="intro-heart">{"💌"}</div>
                <p class="intro-text">{"Someone left you a letter..."}</p>
                <button id="revealButton" class="reveal-button" onclick={reveal_btn}>{"Open it"}</button>
            </div>
        </div>
    }
}
