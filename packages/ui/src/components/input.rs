use dioxus::prelude::*;

/// Styled text input bound to the caller's state.
#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] name: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = r#type;

    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            class: "input {class}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
