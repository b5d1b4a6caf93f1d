//! Sign-up page.

use api::auth::AuthMode;
use dioxus::prelude::*;
use ui::AuthForm;

#[component]
pub fn SignUp() -> Element {
    rsx! {
        main { class: "auth-page",
            AuthForm { mode: AuthMode::SignUp }
        }
    }
}
