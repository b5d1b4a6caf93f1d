//! The labeled form field used by the credential form.
//!
//! One field owns one label, one input, and one error slot; the caller
//! supplies the bound value, the input kind, and the field's current
//! validation error, so each field reports independently.

use dioxus::prelude::*;

use crate::components::Input;

/// What kind of input a field renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

#[component]
pub fn FormField(
    name: String,
    label: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = InputKind::Text)] kind: InputKind,
    #[props(default = String::new())] value: String,
    /// The field's current validation error, shown inline under the input.
    #[props(!optional)]
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: "{name}", "{label}" }
            Input {
                id: name.clone(),
                name: name.clone(),
                class: if invalid { "input-invalid" } else { "" },
                r#type: kind.as_str(),
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_maps_to_html_types() {
        assert_eq!(InputKind::Text.as_str(), "text");
        assert_eq!(InputKind::Email.as_str(), "email");
        assert_eq!(InputKind::Password.as_str(), "password");
    }
}
