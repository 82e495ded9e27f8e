use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiConfig;

#[derive(Properties, PartialEq)]
pub struct ApiConfigFormProps {
    pub current: Option<ApiConfig>,
    pub detected_address: Option<String>,
    pub on_save: Callback<ApiConfig>,
}

/// Backend address editor: manual entry or the address detected from the host
#[function_component(ApiConfigForm)]
pub fn api_config_form(props: &ApiConfigFormProps) -> Html {
    let input = use_state(|| {
        props
            .current
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    });
    let message = use_state(|| None::<String>);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let on_detect = {
        let input = input.clone();
        let message = message.clone();
        let detected = props.detected_address.clone();
        Callback::from(move |_: MouseEvent| match &detected {
            Some(address) => input.set(address.clone()),
            None => message.set(Some("No se pudo detectar la IP".to_string())),
        })
    };

    let on_save = {
        let input = input.clone();
        let message = message.clone();
        let callback = props.on_save.clone();
        Callback::from(move |_: MouseEvent| match ApiConfig::parse(&input) {
            Ok(config) => {
                message.set(Some("IP configurada".to_string()));
                callback.emit(config);
            }
            Err(e) => message.set(Some(e.to_string())),
        })
    };

    let current = props
        .current
        .as_ref()
        .map_or_else(|| "NO CONFIGURADA".to_string(), ToString::to_string);

    html! {
        <div class="config-card">
            <p class="current-label">{"IP/URL ACTUAL"}</p>
            <p class="current-value">{current}</p>
            <input
                class="address-input"
                type="url"
                placeholder="ej: http://192.168.1.100:3000"
                value={(*input).clone()}
                oninput={on_input}
            />
            <div class="config-actions">
                <button onclick={on_detect}>{"Detectar IP automática"}</button>
                <button class="primary" onclick={on_save}>{"Guardar"}</button>
            </div>
            if let Some(text) = &*message {
                <p class="config-message">{text}</p>
            }
        </div>
    }
}
