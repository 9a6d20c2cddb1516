use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, HtmlAudioElement};
use yew::prelude::*;

use crate::state::{MusicCommand, MusicState};
use crate::util::{clog, cwarn};

const TAP_FIRST_MSG: &str = "Please tap the screen first to enable music";

#[derive(Properties, PartialEq, Clone)]
pub struct MusicToggleProps {
    pub src: AttrValue,
    pub volume: f64,
}

/// How a rejected `play()` is reported.
#[derive(Clone, Copy)]
enum OnReject {
    Log(&'static str),
    Alert,
    Silent,
}

fn start_playback(
    audio: HtmlAudioElement,
    music: Rc<RefCell<MusicState>>,
    redraw: UseForceUpdateHandle,
    on_reject: OnReject,
) {
    let promise = match audio.play() {
        Ok(p) => p,
        Err(e) => {
            cwarn(&format!("music: play() threw {:?}", e));
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => music.borrow_mut().playback_started(),
            Err(e) => {
                music.borrow_mut().playback_stopped();
                match on_reject {
                    OnReject::Log(msg) => clog(msg),
                    OnReject::Alert => {
                        cwarn(&format!("music: playback failed {:?}", e));
                        if let Some(win) = web_sys::window() {
                            let _ = win.alert_with_message(TAP_FIRST_MSG);
                        }
                    }
                    OnReject::Silent => {}
                }
            }
        }
        redraw.force_update();
    });
}

#[function_component]
pub fn MusicToggle(props: &MusicToggleProps) -> Html {
    let audio_ref = use_node_ref();
    let music = use_mut_ref(MusicState::default);
    let redraw = use_force_update();

    // Autoplay attempt plus one-shot retry on the first body touch
    {
        let audio_ref = audio_ref.clone();
        let music = music.clone();
        let redraw = redraw.clone();
        let volume = props.volume;
        use_effect_with((), move |_| {
            let audio = audio_ref.cast::<HtmlAudioElement>();
            if let Some(a) = &audio {
                a.set_volume(volume);
                a.set_loop(true);
                start_playback(
                    a.clone(),
                    music.clone(),
                    redraw.clone(),
                    OnReject::Log("music: auto-play blocked, waiting for the toggle"),
                );
            }

            let first_touch_cb = {
                let audio = audio.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let retry = music.borrow_mut().take_touch_unlock();
                    if let (true, Some(a)) = (retry, &audio) {
                        start_playback(a.clone(), music.clone(), redraw.clone(), OnReject::Silent);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
            if let Some(b) = &body {
                let opts = AddEventListenerOptions::new();
                opts.set_once(true);
                b.add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    first_touch_cb.as_ref().unchecked_ref(),
                    &opts,
                )
                .ok();
            }
            move || {
                if let Some(b) = &body {
                    let _ = b.remove_event_listener_with_callback(
                        "touchstart",
                        first_touch_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = &first_touch_cb;
            }
        });
    }

    let toggle = {
        let audio_ref = audio_ref.clone();
        let music = music.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else { return };
            let command = music.borrow().toggle_command();
            match command {
                MusicCommand::Pause => {
                    let _ = audio.pause();
                    music.borrow_mut().playback_stopped();
                    redraw.force_update();
                }
                MusicCommand::Play => {
                    start_playback(audio, music.clone(), redraw.clone(), OnReject::Alert);
                }
            }
        })
    };

    let icon = music.borrow().icon();
    html! {
        <>
            <audio id="bgMusic" ref={audio_ref} src={props.src.clone()} preload="auto" />
            <button id="musicToggle" class="music-toggle" onclick={toggle}>{ icon }</button>
        </>
    }
}
