use std::rc::Rc;
use yew::prelude::*;

use crate::components::status::Status;
use crate::models::employee::Employee;

#[derive(Properties, PartialEq)]
pub struct EmployeeListProps {
    pub employees: Rc<Vec<Employee>>,
    pub is_loading: bool,
    pub on_load_more: Callback<()>,
    pub on_select: Callback<Employee>,
}

/// Employee list with a button to fetch the next page
#[function_component(EmployeeList)]
pub fn employee_list(props: &EmployeeListProps) -> Html {
    let on_load_more = {
        let callback = props.on_load_more.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="employee-list">
            if props.employees.is_empty() && !props.is_loading {
                <p class="no-data">{"No hay empleados"}</p>
            }
            <ul>
                {
                    props.employees.iter().map(|employee| {
                        let onclick = {
                            let callback = props.on_select.clone();
                            let employee = employee.clone();
                            Callback::from(move |_: MouseEvent| callback.emit(employee.clone()))
                        };
                        let puesto = employee.profile_text("puesto").unwrap_or_default();
                        html! {
                            <li class="employee-item" {onclick}>
                                <span class="employee-name">{&employee.nombre}</span>
                                <span class="employee-area">{&employee.area}</span>
                                <span class="employee-role">{puesto}</span>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
            <Status loading={props.is_loading} message="Cargando empleados..." />
            <button class="load-more" onclick={on_load_more} disabled={props.is_loading}>
                {"Cargar más"}
            </button>
        </div>
    }
}
