//! Route guard applied on every navigation.

use std::sync::Arc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpIdentityProvider;
use crate::routes::Route;
use crate::storage::BrowserCredentialStore;
use ward_core::{AuthGuard, Decision, RouteTable};

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    /// Route being rendered; the check re-runs whenever it changes.
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only once the authorization check for the current
/// route allows them; otherwise pushes the login or unauthorized route.
///
/// Every navigation (including the initial load) produces an independent
/// check. The rendered state resets when the route changes, so a
/// superseded in-flight result for a previous route cannot leak into the
/// new one.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let navigator = use_navigator().expect("Guarded must be rendered inside a Router");
    let allowed = use_state(|| false);

    {
        let allowed = allowed.clone();
        use_effect_with(props.route.clone(), move |route| {
            allowed.set(false);
            let guard = AuthGuard::new(
                Arc::new(HttpIdentityProvider::default()),
                Arc::new(BrowserCredentialStore),
                RouteTable::default(),
            );
            let path = route.to_path();
            spawn_local(async move {
                match guard.check(&path).await {
                    Decision::Allow => allowed.set(true),
                    Decision::RedirectToLogin => navigator.push(&Route::Login),
                    Decision::RedirectToUnauthorized => navigator.push(&Route::Unauthorized),
                }
            });
            || ()
        });
    }

    if *allowed {
        props.children.clone()
    } else {
        // Check still in flight (or a redirect is about to land).
        html! {}
    }
}
