//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::ClientConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ClientConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of backend-derived lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Client for the configured backend
    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config.with_value(|c| c.api_base()))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
