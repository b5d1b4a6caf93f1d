//! Authentication context and hooks for the UI.

use std::rc::Rc;

use api::auth::{AuthClient, SimulatedAuthClient};
use api::Session;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Shared handle to the authentication client in use.
///
/// The default wraps [`SimulatedAuthClient`]; production passes a real
/// network client to [`AuthProvider`] instead, and tests pass scripted
/// fakes.
#[derive(Clone)]
pub struct SharedAuthClient(Rc<dyn AuthClient>);

impl SharedAuthClient {
    pub fn new(client: impl AuthClient + 'static) -> Self {
        Self(Rc::new(client))
    }

    pub fn client(&self) -> &dyn AuthClient {
        self.0.as_ref()
    }
}

impl Default for SharedAuthClient {
    fn default() -> Self {
        Self::new(SimulatedAuthClient::default())
    }
}

impl PartialEq for SharedAuthClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context()
}

/// Get the authentication client provided to the app.
pub fn use_auth_client() -> SharedAuthClient {
    use_context()
}

/// Provider component that supplies the authentication client and state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(client: Option<SharedAuthClient>, children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| client.unwrap_or_default());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Navigate to an app path.
pub(crate) fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("failed to navigate to {path}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigation requested: {path}");
    }
}
