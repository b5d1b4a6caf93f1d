use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Home, SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/sign-up")]
    SignUp {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: ui::LOGO }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::auth::{HOME_PATH, SIGN_IN_PATH, SIGN_UP_PATH};

    #[test]
    fn test_route_paths_match_the_auth_contract() {
        assert_eq!(Route::Home {}.to_string(), HOME_PATH);
        assert_eq!(Route::SignIn {}.to_string(), SIGN_IN_PATH);
        assert_eq!(Route::SignUp {}.to_string(), SIGN_UP_PATH);
    }
}
