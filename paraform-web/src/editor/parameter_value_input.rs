use leptos::prelude::*;
use tracing::warn;

use paraform_model::editor::EditorState;
use paraform_model::parameter::ParameterDescriptor;

use crate::components::{UserInput, UserInputValue};

/// A single editable form row, bound to the value store by parameter id.
///
/// The setter goes through [EditorState::update_value]; an edit referencing
/// an id without a value entry is logged and dropped, never applied to the
/// wrong entry.
#[component]
pub fn ParameterValueInput(
    descriptor: ParameterDescriptor,
    state: RwSignal<EditorState>,
) -> impl IntoView {

    let id = descriptor.id;

    let (getter, setter) = create_slice(state,
        move |state| {
            UserInputValue::Right(state.value_of(id).to_owned())
        },
        move |state, input: UserInputValue| {
            let value = input.right().unwrap_or_default();
            match state.update_value(id, value) {
                Ok(updated) => *state = updated,
                Err(cause) => warn!("Discarding edit: {cause}"),
            }
        }
    );

    // Values carry no validation of their own, so the input passes everything through.
    let accept_any = |input: String| UserInputValue::Right(input);

    view! {
        <UserInput
            getter=getter
            setter=setter
            validator=accept_any
            label=descriptor.name.to_string()
            placeholder=descriptor.name.to_string()
            input_type=descriptor.kind.as_str()
        />
    }
}
