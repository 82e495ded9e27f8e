use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::reports::{Report, ReportQuery};
use crate::services::api::{ApiConfig, EmployeesClient};
use crate::services::reports::{ReportSlot, fetch_report};

/// Handle returned by `use_report` hook
#[derive(Clone, PartialEq)]
pub struct ReportHandle<T> {
    pub slot: ReportSlot<T>,
    pub load: Callback<ReportQuery>,
}

/// One report view: `load` issues a single GET and replaces the shown result.
#[hook]
pub fn use_report<R: Report>(config: ApiConfig) -> ReportHandle<R::Payload> {
    let slot = use_mut_ref(ReportSlot::<R::Payload>::new);
    let update = use_force_update();

    // Results for a previous address must not be shown against the new one
    {
        let slot = slot.clone();
        let update = update.clone();
        use_effect_with(config.clone(), move |_| {
            slot.borrow_mut().clear();
            update.force_update();
            || ()
        });
    }

    let load = {
        let slot = slot.clone();
        let update = update.clone();

        Callback::from(move |query: ReportQuery| {
            let ticket = slot.borrow_mut().begin();
            update.force_update();

            let slot = slot.clone();
            let update = update.clone();
            let config = config.clone();

            spawn_local(async move {
                let result = match EmployeesClient::new() {
                    Ok(client) => fetch_report::<R, _>(&client, &config, &query).await,
                    Err(e) => Err(e),
                };

                if slot.borrow_mut().complete(ticket, result) {
                    update.force_update();
                }
            });
        })
    };

    let slot = slot.borrow().clone();
    ReportHandle { slot, load }
}
