//! Sign-in page.

use api::auth::AuthMode;
use dioxus::prelude::*;
use ui::AuthForm;

#[component]
pub fn SignIn() -> Element {
    rsx! {
        main { class: "auth-page",
            AuthForm { mode: AuthMode::SignIn }
        }
    }
}
