use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Cargando..."))]
    pub message: AttrValue,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{props.message.clone()}</p>
            </div>
        };
    }

    match &props.error {
        Some(msg) => html! {
            <div class="status error">
                <p>{"❌ Error: "}{msg.clone()}</p>
            </div>
        },
        None => html! {},
    }
}
