use yew::prelude::*;

use crate::services::api::ApiConfig;

/// Handle returned by `use_api_config` hook
#[derive(Clone, PartialEq)]
pub struct ApiConfigHandle {
    pub config: Option<ApiConfig>,
    pub set_config: Callback<ApiConfig>,
    /// Backend address guessed from the host serving the page
    pub detected_address: Option<String>,
}

/// Custom hook holding the backend address for the running session
#[hook]
pub fn use_api_config() -> ApiConfigHandle {
    let config = use_state_eq(|| None::<ApiConfig>);
    let detected_address = use_memo((), |_| detect_device_address());

    let set_config = {
        let config = config.clone();
        Callback::from(move |new_config: ApiConfig| {
            log::info!("API address set to {new_config}");
            config.set(Some(new_config));
        })
    };

    ApiConfigHandle {
        config: (*config).clone(),
        set_config,
        detected_address: (*detected_address).clone(),
    }
}

fn detect_device_address() -> Option<String> {
    let host = web_sys::window()?.location().hostname().ok()?;
    if host.is_empty() {
        log::warn!("Could not detect the device address");
        return None;
    }
    Some(ApiConfig::device_address(&host))
}
