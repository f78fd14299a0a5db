//! Browser side of the background token keep-alive.

use std::sync::Arc;

use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpIdentityProvider;
use crate::storage::BrowserCredentialStore;
use ward_core::{Activation, AuthConfig, TokenRefresher};

type Refresher = TokenRefresher<HttpIdentityProvider, BrowserCredentialStore>;

pub enum Msg {
    Activated(Activation),
    Tick,
}

#[derive(Properties, PartialEq)]
pub struct SessionKeepAliveProps {
    #[prop_or_default]
    pub children: Html,
}

/// Mounts the token keep-alive for the lifetime of the app shell.
///
/// On mount it probes for a session and mints the first token; while
/// mounted it re-mints on the fixed cadence. The interval handle lives in
/// the component, so unmounting drops it and no scheduled work outlives
/// the owning context. Without a session the component stays idle and
/// never creates the interval.
pub struct SessionKeepAlive {
    refresher: Refresher,
    _refresh: Option<Interval>,
}

impl Component for SessionKeepAlive {
    type Message = Msg;
    type Properties = SessionKeepAliveProps;

    fn create(ctx: &Context<Self>) -> Self {
        let refresher = Refresher::new(
            Arc::new(HttpIdentityProvider::default()),
            Arc::new(BrowserCredentialStore),
        );

        let link = ctx.link().clone();
        let probe = refresher.clone();
        spawn_local(async move {
            link.send_message(Msg::Activated(probe.activate().await));
        });

        Self {
            refresher,
            _refresh: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Activated(Activation::Active) => {
                let link = ctx.link().clone();
                self._refresh = Some(Interval::new(AuthConfig::REFRESH_INTERVAL_MS, move || {
                    link.send_message(Msg::Tick);
                }));
            }
            // Not logged in: no store write, no timer, no probe retry.
            Msg::Activated(Activation::Idle) => {}
            Msg::Tick => {
                let refresher = self.refresher.clone();
                spawn_local(async move {
                    refresher.refresh_once().await;
                });
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        ctx.props().children.clone()
    }
}
