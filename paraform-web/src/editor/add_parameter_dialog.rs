use leptos::prelude::*;
use tracing::warn;

use paraform_model::editor::{AddParameterError, EditorState, ParameterIdGenerator};
use paraform_model::parameter::ParameterKind;

use crate::components::{ButtonColor, Modal, SelectionOption, SimpleButton, UserInput, UserInputValue, UserSelect};
use crate::util::NON_BREAKING_SPACE;

const KIND_PLACEHOLDER: &str = "Select a kind";
const VALIDATION_MESSAGE: &str = "Fill in all fields.";

/// The modal for defining a new parameter. Only a successful submission
/// changes committed state and closes the dialog; Cancel discards the
/// in-progress entry.
#[component]
pub fn AddParameterDialog(
    open: RwSignal<bool>,
    state: RwSignal<EditorState>,
    id_generator: RwSignal<ParameterIdGenerator>,
) -> impl IntoView {

    let (name_getter, name_setter) = signal(UserInputValue::Left(String::from(NON_BREAKING_SPACE)));
    let (kind_getter, kind_setter) = signal(UserInputValue::Left(String::from(KIND_PLACEHOLDER)));
    let error = RwSignal::new(Option::<String>::None);

    let kind_options = Signal::derive(|| {
        ParameterKind::KINDS.iter()
            .map(|kind| SelectionOption {
                display_name: String::from(kind.display_name()),
                value: String::from(kind.as_str()),
            })
            .collect::<Vec<_>>()
    });

    let reset = move || {
        name_setter.set(UserInputValue::Left(String::from(NON_BREAKING_SPACE)));
        kind_setter.set(UserInputValue::Left(String::from(KIND_PLACEHOLDER)));
        error.set(None);
    };

    let on_cancel = move || {
        reset();
        open.set(false);
    };

    let on_add = move || {
        let name = name_getter.get_untracked().right();
        let kind = kind_getter.get_untracked().right();

        let (Some(name), Some(kind)) = (name, kind) else {
            error.set(Some(String::from(VALIDATION_MESSAGE)));
            return;
        };

        let id = id_generator.try_update(|generator| generator.next_id())
            .expect("The id generator signal should still be alive.");

        let result = state.with_untracked(|state| state.add_parameter(id, &name, &kind));
        match result {
            Ok(updated) => {
                state.set(updated);
                reset();
                open.set(false);
            }
            Err(AddParameterError::InvalidName(_) | AddParameterError::InvalidKind(_)) => {
                error.set(Some(String::from(VALIDATION_MESSAGE)));
            }
            Err(cause @ AddParameterError::DuplicateId { .. }) => {
                warn!("Rejecting new parameter: {cause}");
                error.set(Some(cause.to_string()));
            }
        }
    };

    view! {
        <Modal active=open>
            <p class="title is-5">"Add parameter"</p>
            <UserInput
                getter=name_getter.into()
                setter=name_setter.into()
                validator=name_validator
                label="Name"
                placeholder="Color"
            />
            <UserSelect
                options=kind_options
                initial_option=KIND_PLACEHOLDER
                getter=kind_getter.into()
                setter=kind_setter.into()
                label="Kind"
            />
            <div class="is-flex is-justify-content-space-between mt-4">
                <SimpleButton
                    text="Cancel"
                    color=ButtonColor::Light
                    on_action=on_cancel
                />
                <SimpleButton
                    text="Add"
                    color=ButtonColor::Primary
                    on_action=on_add
                />
            </div>
            { move || error.get().map(|message| view! {
                <p class="help has-text-danger mt-2">{ message }</p>
            })}
        </Modal>
    }
}

fn name_validator(input: String) -> UserInputValue {
    if input.trim().is_empty() {
        UserInputValue::Left(String::from(NON_BREAKING_SPACE))
    } else {
        UserInputValue::Right(input)
    }
}

#[cfg(test)]
mod test {
    use crate::editor::add_parameter_dialog::name_validator;

    #[test]
    fn test_name_validator_succeeds() {
        let input = "Color".to_string();
        let validated = name_validator(input);
        assert!(validated.is_right());
    }

    #[test]
    fn test_name_validator_fails() {
        let input = "".to_string();
        let validated = name_validator(input);
        assert!(validated.is_left());

        let input = "   ".to_string();
        let validated = name_validator(input);
        assert!(validated.is_left());
    }

    #[test]
    fn test_name_validator_keeps_surrounding_whitespace() {
        let input = " Color ".to_string();
        let validated = name_validator(input);
        assert!(validated.is_right());
    }
}
