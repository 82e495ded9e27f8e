use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::employee::{Employee, EmployeePage};
use crate::services::api::{ApiConfig, EmployeesClient, JsonSource};
use crate::services::employees::EmployeeLoader;

/// Handle returned by `use_employees` hook
#[derive(Clone, PartialEq)]
pub struct EmployeesHandle {
    pub employees: Rc<Vec<Employee>>,
    pub is_loading: bool,
    pub load_more: Callback<()>,
}

/// Paginated employee list bound to `config`.
///
/// A new address resets the list and cursor, then loads the first page.
#[hook]
pub fn use_employees(config: ApiConfig) -> EmployeesHandle {
    let loader = use_mut_ref(|| EmployeeLoader::new(config.clone()));
    let update = use_force_update();

    {
        let loader = loader.clone();
        let update = update.clone();

        use_effect_with(config, move |config| {
            loader.borrow_mut().reset(config.clone());
            load_next_page(loader, update);
            || ()
        });
    }

    let load_more = {
        let loader = loader.clone();
        let update = update.clone();
        Callback::from(move |()| load_next_page(loader.clone(), update.clone()))
    };

    let loader = loader.borrow();
    EmployeesHandle {
        employees: Rc::new(loader.employees().to_vec()),
        is_loading: loader.is_loading(),
        load_more,
    }
}

fn load_next_page(loader: Rc<RefCell<EmployeeLoader>>, update: UseForceUpdateHandle) {
    let request = loader.borrow_mut().begin();
    let Some(request) = request else {
        return;
    };
    update.force_update();

    spawn_local(async move {
        let result = match EmployeesClient::new() {
            Ok(client) => client.get_json::<EmployeePage>(&request.url).await,
            Err(e) => Err(e),
        };

        if loader.borrow_mut().complete(request, result) {
            update.force_update();
        }
    });
}
