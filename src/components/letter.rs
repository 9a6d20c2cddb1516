use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::layout::measure;
use crate::model::{CardAction, CardState, Effect, PageState};
use crate::present::{DomPresenter, present};

#[derive(Properties, PartialEq, Clone)]
pub struct LetterProps {
    pub card: UseReducerHandle<CardState>,
    pub on_accepted: Callback<()>,
}

fn dispatch_initial_layout(card: &UseReducerHandle<CardState>, area_ref: &NodeRef, no_ref: &NodeRef) {
    if let (Some(area), Some(btn)) = (measure(area_ref), measure(no_ref)) {
        card.dispatch(CardAction::InitialLayout { container: area.size(), target: btn.size() });
    }
}

fn dispatch_evade(
    card: &UseReducerHandle<CardState>,
    area_ref: &NodeRef,
    no_ref: &NodeRef,
    client_x: f64,
    client_y: f64,
) {
    if !card.can_evade() {
        return;
    }
    let (Some(area), Some(btn)) = (measure(area_ref), measure(no_ref)) else {
        return;
    };
    card.dispatch(CardAction::Evade {
        container: area.size(),
        target: btn.size(),
        trigger: area.to_local(client_x, client_y),
    });
}

#[function_component(Letter)]
pub fn letter(props: &LetterProps) -> Html {
    let area_ref = use_node_ref();
    let no_ref = use_node_ref();
    let yes_ref = use_node_ref();
    // native listeners read the newest handle through this
    let card_ref = use_mut_ref(|| props.card.clone());
    let layout_timer = use_mut_ref(|| None::<Timeout>);

    // Effect: on each version, refresh card_ref and carry out the new effects
    {
        let card = props.card.clone();
        let card_ref = card_ref.clone();
        let area_ref = area_ref.clone();
        let no_ref = no_ref.clone();
        let yes_ref = yes_ref.clone();
        let on_accepted = props.on_accepted.clone();
        let layout_timer = layout_timer.clone();
        use_effect_with(props.card.version, move |_| {
            *card_ref.borrow_mut() = card.clone();
            let mut presenter = DomPresenter {
                no_btn: no_ref.cast::<HtmlElement>(),
                yes_btn: yes_ref.cast::<HtmlElement>(),
                on_accepted,
            };
            for deferred in present(&card.effects, &mut presenter) {
                if let Effect::ScheduleInitialPlacement { delay_ms } = deferred {
                    let card = card.clone();
                    let area_ref = area_ref.clone();
                    let no_ref = no_ref.clone();
                    *layout_timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                        dispatch_initial_layout(&card, &area_ref, &no_ref);
                    }));
                }
            }
            || ()
        });
    }

    // Native listeners: the no button must call preventDefault on touchstart
    {
        let card_ref = card_ref.clone();
        let area_ref = area_ref.clone();
        let no_ref = no_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let no_btn = no_ref.cast::<HtmlElement>();

            let touch_start_cb = {
                let card_ref = card_ref.clone();
                let area_ref = area_ref.clone();
                let no_ref = no_ref.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    let Some(t0) = e.touches().item(0) else { return };
                    let handle = card_ref.borrow().clone();
                    dispatch_evade(&handle, &area_ref, &no_ref, t0.client_x() as f64, t0.client_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            let mousedown_cb = {
                let card_ref = card_ref.clone();
                let area_ref = area_ref.clone();
                let no_ref = no_ref.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    e.prevent_default();
                    let handle = card_ref.borrow().clone();
                    dispatch_evade(&handle, &area_ref, &no_ref, e.client_x() as f64, e.client_y() as f64);
                }) as Box<dyn FnMut(_)>)
            };
            let click_cb = Closure::wrap(Box::new(move |e: MouseEvent| {
                e.prevent_default();
            }) as Box<dyn FnMut(_)>);
            let resize_cb = {
                let card_ref = card_ref.clone();
                let area_ref = area_ref.clone();
                let no_ref = no_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    let handle = card_ref.borrow().clone();
                    if handle.page == PageState::LetterShown {
                        dispatch_initial_layout(&handle, &area_ref, &no_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };

            if let Some(btn) = &no_btn {
                btn.add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
                    .ok();
                btn.add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                    .ok();
                btn.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                    .ok();
            }
            if let Some(win) = &window {
                win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                    .ok();
            }

            // Cleanup
            move || {
                if let Some(btn) = &no_btn {
                    let _ = btn.remove_event_listener_with_callback(
                        "touchstart",
                        touch_start_cb.as_ref().unchecked_ref(),
                    );
                    let _ = btn.remove_event_listener_with_callback(
                        "mousedown",
                        mousedown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = btn
                        .remove_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
                }
                if let Some(win) = &window {
                    let _ = win
                        .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                }
                let _keep_alive = (&touch_start_cb, &mousedown_cb, &click_cb, &resize_cb);
            }
        });
    }

    let confirm = {
        let card = props.card.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            card.dispatch(CardAction::Confirm);
        })
    };

    let page = props.card.page;
    let accepted = page == PageState::Accepted;
    html! {
        <div id="mainLetter" class={classes!("letter", (page != PageState::Intro).then_some("show-letter"))}>
            <div class="letter-body">
                <p class="salutation">{"My dearest,"}</p>
                <p>{"Every day with you feels like the first page of a story I never want to finish."}</p>
                <p>{"So I have one small question, and only one right answer:"}</p>
                <p class="question">{"Will you accept my heart?"}</p>
            </div>
            <div id="buttonArea" class="button-area" ref={area_ref}>
                <button id="yesBtn" class={classes!("yes-btn", accepted.then_some("accepted"))} ref={yes_ref} onclick={confirm}>{"Yes"}</button>
                <button id="noBtn" class={classes!("no-btn", accepted.then_some("gone"))} ref={no_ref}>{"No"}</button>
            </div>
            <div id="acceptedMessage" class={classes!("accepted-message", accepted.then_some("show"))}>
                {"You said yes! 💖"}
            </div>
        </div>
    }
}
