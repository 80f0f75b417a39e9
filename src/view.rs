use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::directory::CreatorRecord;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub fallback: bool,
    pub on_query: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_query = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            on_query.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <div class="search">
            <input
                type="search"
                placeholder="Search creators or tags…"
                value={props.query.clone()}
                {oninput}
            />
            if props.fallback {
                <div class="hint">{ "No matches, showing everyone." }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReelCardProps {
    pub record: CreatorRecord,
    pub position: (usize, usize),
    pub on_open: Callback<()>,
}

#[function_component(ReelCard)]
pub fn reel_card(props: &ReelCardProps) -> Html {
    let r = &props.record;
    let (n, total) = props.position;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <article class="card" style={format!("background-image:url('{}')", r.image)}>
            <div class="shade"></div>
            <div class="counter">{ format!("{n} / {total}") }</div>
            <div class="info">
                <h2 class="name">{ r.name.clone() }</h2>
                <div class="tags">
                    { for r.tags.iter().map(|t| html!{ <span class="tag">{ format!("#{t}") }</span> }) }
                </div>
                <button class="open" disabled={!r.has_link()} {onclick}>{ "View bio →" }</button>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct DotsProps {
    pub len: usize,
    pub active: usize,
    pub on_jump: Callback<usize>,
}

#[function_component(Dots)]
pub fn dots(props: &DotsProps) -> Html {
    html! {
        <nav class="dots">
            { for (0..props.len).map(|i| {
                let on_jump = props.on_jump.clone();
                html! {
                    <button
                        class={classes!("dot", (i == props.active).then_some("on"))}
                        onclick={Callback::from(move |_: MouseEvent| on_jump.emit(i))}
                    />
                }
            })}
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct InterstitialProps {
    pub target: Option<String>,
    pub sponsor_url: String,
    pub on_continue: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Interstitial)]
pub fn interstitial(props: &InterstitialProps) -> Html {
    let on_continue = {
        let cb = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="overlay" role="dialog" aria-modal="true">
            <div class="sheet">
                <div class="badge">{ "Sponsored" }</div>
                <h3>{ "A quick word from our sponsor" }</h3>
                <p class="small">{ props.sponsor_url.clone() }</p>
                if let Some(name) = &props.target {
                    <p>{ format!("Continue to {name}'s bio afterwards.") }</p>
                }
                <div class="row">
                    <button class="primary" onclick={on_continue}>{ "Continue" }</button>
                    <button class="ghost" onclick={on_dismiss}>{ "Not now" }</button>
                </div>
            </div>
        </div>
    }
}
