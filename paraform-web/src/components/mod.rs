pub use buttons::SimpleButton;
pub use inputs::user_input::UserInput;
pub use inputs::user_select::{SelectionOption, UserSelect};
pub use inputs::{UserInputError, UserInputValidator, UserInputValue};
pub use loading_spinner::LoadingSpinner;
pub use modal::Modal;
pub use warning_message::WarningMessage;

mod buttons;
mod inputs;
mod loading_spinner;
mod modal;
mod warning_message;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[allow(dead_code)]
pub enum ButtonState {
    #[default]
    Enabled,
    Loading,
    Disabled,
    Hidden,
}

impl ButtonState {
    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonState::Loading => "is-loading",
            ButtonState::Hidden => "is-hidden",
            _ => "",
        }
    }
}

#[derive(Clone, Copy, Debug)]
#[allow(dead_code)]
pub enum ButtonColor {
    None,
    Danger,
    Light,
    Primary,
}

impl ButtonColor {

    pub fn as_class(&self) -> &'static str {
        match self {
            ButtonColor::None => "is-text",
            ButtonColor::Danger => "is-danger",
            ButtonColor::Light => "is-light",
            ButtonColor::Primary => "is-primary",
        }
    }
}
