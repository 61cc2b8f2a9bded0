use leptos::prelude::*;

/// Plain Bulma modal. The dialog content decides when to close; the
/// background is intentionally not clickable so an in-progress entry is only
/// discarded through the Cancel button.
#[component]
pub fn Modal(
    #[prop(into)] active: Signal<bool>,
    children: Children,
) -> impl IntoView {

    view! {
        <div class="modal" class=("is-active", move || active.get())>
            <div class="modal-background"></div>
            <div class="modal-content">
                <div class="box">
                    { children() }
                </div>
            </div>
        </div>
    }
}
