use leptos::prelude::*;

use paraform_model::editor::{EditorState, ParameterIdGenerator};
use paraform_model::parameter::ParameterDescriptor;

use crate::components::{ButtonColor, SimpleButton};
use crate::editor::add_parameter_dialog::AddParameterDialog;
use crate::editor::parameter_value_input::ParameterValueInput;

mod add_parameter_dialog;
mod parameter_value_input;

/// The form itself: one row per catalog entry, in catalog order, plus the
/// button opening the add-parameter dialog.
#[component]
pub fn ParameterEditor(
    state: RwSignal<EditorState>,
    id_generator: RwSignal<ParameterIdGenerator>,
) -> impl IntoView {

    let dialog_open = RwSignal::new(false);

    view! {
        <form>
            <For
                each=move || state.with(|state| state.params.clone())
                key=|param| param.id
                children=move |param: ParameterDescriptor| {
                    view! {
                        <ParameterValueInput descriptor=param state />
                    }
                }
            />
        </form>
        <SimpleButton
            text="Add parameter"
            color=ButtonColor::Primary
            on_action=move || dialog_open.set(true)
        />
        <AddParameterDialog open=dialog_open state id_generator />
    }
}
