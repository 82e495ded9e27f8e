use yew::prelude::*;

use empleados_dashboard::components::{
    ApiConfigForm, AreaCountsView, EmployeeList, ReportView, StatisticsView,
};
use empleados_dashboard::hooks::use_api_config::use_api_config;
use empleados_dashboard::hooks::use_employees::use_employees;
use empleados_dashboard::models::employee::Employee;
use empleados_dashboard::services::api::ApiConfig;

#[derive(Clone, PartialEq)]
enum Screen {
    Employees,
    Reports(Employee),
    Statistics,
    Settings,
}

#[derive(Properties, PartialEq)]
struct EmployeesScreenProps {
    config: ApiConfig,
    on_select: Callback<Employee>,
}

#[function_component(EmployeesScreen)]
fn employees_screen(props: &EmployeesScreenProps) -> Html {
    let handle = use_employees(props.config.clone());

    html! {
        <EmployeeList
            employees={handle.employees.clone()}
            is_loading={handle.is_loading}
            on_load_more={handle.load_more.clone()}
            on_select={props.on_select.clone()}
        />
    }
}

#[function_component(App)]
fn app() -> Html {
    let api = use_api_config();
    let screen = use_state(|| Screen::Settings);

    let navigate = |target: Screen| {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.set(target.clone()))
    };

    let on_select = {
        let screen = screen.clone();
        Callback::from(move |employee: Employee| screen.set(Screen::Reports(employee)))
    };

    let on_save = {
        let set_config = api.set_config.clone();
        let screen = screen.clone();
        Callback::from(move |config: ApiConfig| {
            set_config.emit(config);
            screen.set(Screen::Employees);
        })
    };

    let content = match (&*screen, &api.config) {
        (Screen::Settings, current) => html! {
            <>
                <ApiConfigForm
                    current={current.clone()}
                    detected_address={api.detected_address.clone()}
                    {on_save}
                />
                if let Some(config) = current {
                    <AreaCountsView config={config.clone()} />
                }
            </>
        },
        (_, None) => html! {
            <p class="no-data">{"Configura la IP de la API para continuar"}</p>
        },
        (Screen::Employees, Some(config)) => html! {
            <EmployeesScreen config={config.clone()} {on_select} />
        },
        (Screen::Reports(employee), Some(config)) => html! {
            <ReportView config={config.clone()} employee={employee.clone()} />
        },
        (Screen::Statistics, Some(config)) => html! {
            <StatisticsView config={config.clone()} />
        },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Empleados"}</h1>
                <nav class="app-nav">
                    <button onclick={navigate(Screen::Employees)}>{"Empleados"}</button>
                    <button onclick={navigate(Screen::Statistics)}>{"Gráficos Generales"}</button>
                    <button onclick={navigate(Screen::Settings)}>{"Configurar IP"}</button>
                </nav>
            </header>

            <main class="app-main">
                {content}
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
