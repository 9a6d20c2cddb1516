use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

use super::{intro_overlay::IntroOverlay, letter::Letter, music_toggle::MusicToggle, sparkle::Sparkle};
use crate::config::CardConfig;
use crate::model::{CardAction, CardState, PageState};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| CardConfig::load());
    let card = {
        let config = (*config).clone();
        use_reducer(move || CardState::new(config))
    };
    let sparkle = use_state(|| false);
    let sparkle_timer = use_mut_ref(|| None::<Timeout>);

    // Block page scrolling; body listeners are passive unless told otherwise
    use_effect_with((), move |_| {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        let touchmove_cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
        }) as Box<dyn FnMut(_)>);
        if let Some(b) = &body {
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);
            b.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                touchmove_cb.as_ref().unchecked_ref(),
                &opts,
            )
            .ok();
        }
        move || {
            if let Some(b) = &body {
                let _ = b.remove_event_listener_with_callback(
                    "touchmove",
                    touchmove_cb.as_ref().unchecked_ref(),
                );
            }
            let _keep_alive = &touchmove_cb;
        }
    });

    let reveal = {
        let card = card.clone();
        Callback::from(move |_| card.dispatch(CardAction::Reveal))
    };

    let on_accepted = {
        let sparkle = sparkle.clone();
        let sparkle_timer = sparkle_timer.clone();
        let sparkle_ms = config.sparkle_ms;
        Callback::from(move |_| {
            sparkle.set(true);
            let sparkle = sparkle.clone();
            *sparkle_timer.borrow_mut() = Some(Timeout::new(sparkle_ms, move || sparkle.set(false)));
        })
    };

    html! {
        <div id="root">
            <MusicToggle src={AttrValue::from(config.music_src.clone())} volume={config.music_volume} />
            <IntroOverlay show={card.page == PageState::Intro} reveal={reveal} />
            <Letter card={card.clone()} on_accepted={on_accepted} />
            <Sparkle show={*sparkle} />
        </div>
    }
}
