// src/main.rs — Creator Reels (Rust + Yew + WASM)
// Full-screen creator cards: wheel, swipe or arrow keys to move, search by
// name or tag, and a once-per-session sponsor screen before the first bio.

mod config;
mod cursor;
mod directory;
mod dispatch;
mod filter;
mod gate;
mod input;
mod view;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use config::sponsor_url;
use cursor::Reel;
use directory::load_directory;
use dispatch::{LinkDispatcher, LinkState};
use input::{key_action, KeyAction, Step, SwipeTracker, WheelGate};
use view::{Dots, Interstitial, ReelCard, SearchBar};

fn touch_y(list: web_sys::TouchList) -> Option<f64> {
    list.get(0).map(|t| t.client_y() as f64)
}

#[function_component(App)]
fn app() -> Html {
    let reel = use_state(|| Reel::new(load_directory()));
    let links = use_mut_ref(LinkDispatcher::browser);
    // Mirror of the dispatcher state so the overlay re-renders.
    let link_state = use_state(|| LinkState::Idle);

    let wheel = use_mut_ref(WheelGate::new);
    let swipe = use_mut_ref(SwipeTracker::new);
    // Latest keydown handler; the window listener below is registered once.
    let key_handler = use_mut_ref(Callback::<KeyboardEvent>::noop);

    let pending = links.borrow().is_pending();

    let apply = {
        let reel = reel.clone();
        Callback::from(move |step: Step| {
            let mut next = (*reel).clone();
            next.step(step);
            reel.set(next);
        })
    };

    let on_query = {
        let reel = reel.clone();
        Callback::from(move |q: String| {
            let mut next = (*reel).clone();
            next.set_query(q);
            reel.set(next);
        })
    };

    let on_jump = {
        let reel = reel.clone();
        Callback::from(move |i: usize| {
            let mut next = (*reel).clone();
            next.jump_to(i);
            reel.set(next);
        })
    };

    let on_wheel = {
        let apply = apply.clone();
        let wheel = wheel.clone();
        Callback::from(move |e: WheelEvent| {
            if pending {
                return;
            }
            let step = wheel.borrow_mut().on_wheel(e.delta_y(), e.time_stamp());
            if let Some(step) = step {
                apply.emit(step);
            }
        })
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(y) = touch_y(e.touches()) {
                swipe.borrow_mut().on_touch_start(y);
            }
        })
    };

    let on_touch_end = {
        let apply = apply.clone();
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(y) = touch_y(e.changed_touches()) else {
                swipe.borrow_mut().reset();
                return;
            };
            let step = swipe.borrow_mut().on_touch_end(y);
            if let (Some(step), false) = (step, pending) {
                apply.emit(step);
            }
        })
    };

    let on_touch_cancel = {
        let swipe = swipe.clone();
        Callback::from(move |_: TouchEvent| swipe.borrow_mut().reset())
    };

    let on_open = {
        let reel = reel.clone();
        let links = links.clone();
        let link_state = link_state.clone();
        Callback::from(move |_: ()| {
            let mut d = links.borrow_mut();
            d.open_link(reel.current());
            link_state.set(d.state().clone());
        })
    };

    let on_continue = {
        let links = links.clone();
        let link_state = link_state.clone();
        Callback::from(move |_: ()| {
            let mut d = links.borrow_mut();
            d.proceed();
            link_state.set(d.state().clone());
        })
    };

    let on_dismiss = {
        let links = links.clone();
        let link_state = link_state.clone();
        Callback::from(move |_: ()| {
            let mut d = links.borrow_mut();
            d.dismiss();
            link_state.set(d.state().clone());
        })
    };

    let on_key = {
        let apply = apply.clone();
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |e: KeyboardEvent| {
            let in_text_field = e.target_dyn_into::<HtmlInputElement>().is_some();
            match key_action(&e.key(), pending, in_text_field) {
                Some(KeyAction::Step(step)) => {
                    e.prevent_default();
                    apply.emit(step);
                }
                Some(KeyAction::Dismiss) => on_dismiss.emit(()),
                None => {}
            }
        })
    };
    *key_handler.borrow_mut() = on_key;

    // Keys are heard on the window so they keep working whatever has focus
    // (e.g. after the overlay's buttons unmount).
    {
        let key_handler = key_handler.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "keydown", move |event| {
                    let handler = key_handler.borrow().clone();
                    handler.emit(event.clone().unchecked_into::<KeyboardEvent>());
                })
            });
            move || drop(listener)
        });
    }

    let overlay = match &*link_state {
        LinkState::InterstitialPending(_) => html! {
            <Interstitial
                target={links.borrow().pending().map(|r| r.name.clone())}
                sponsor_url={sponsor_url().to_string()}
                {on_continue}
                {on_dismiss}
            />
        },
        LinkState::Idle => html! {},
    };

    let card = match reel.current() {
        Some(record) => html! {
            <ReelCard record={record.clone()} position={reel.position()} {on_open} />
        },
        None => html! {
            <div class="empty">{ "No creators to show yet." }</div>
        },
    };

    html! {
        <div class="wrap">
            <SearchBar query={reel.query().to_string()} fallback={reel.is_fallback()} {on_query} />

            <main
                class="stage"
                onwheel={on_wheel}
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
            >
                { card }
                <Dots len={reel.visible().len()} active={reel.cursor()} {on_jump} />
            </main>

            { overlay }
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
