use leptos::prelude::*;

use crate::components::{ButtonColor, ButtonState};

#[component]
pub fn SimpleButton<A>(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] color: Signal<ButtonColor>,
    #[prop(into, default = Signal::from(ButtonState::Enabled))] state: Signal<ButtonState>,
    on_action: A,
) -> impl IntoView
where A: Fn() + 'static {

    let aria_label = Clone::clone(&text);

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", color.with(ButtonColor::as_class), state.with(ButtonState::as_class))
            disabled=move || matches!(state.get(), ButtonState::Disabled | ButtonState::Loading)
            aria-label=aria_label
            on:click=move |_| on_action()
        >
            <span>{ text }</span>
        </button>
    }
}
