use std::rc::Rc;

use chrono::NaiveDate;
use futures::future::{AbortHandle, abortable};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::stats::{AreaCounts, GeneralStats};
use crate::services::api::{ApiConfig, EmployeesClient};
use crate::services::statistics::{fetch_area_counts, fetch_general_statistics};

#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Folds the outcome of an abortable load. Aborted loads yield `None`
    /// so the caller leaves its state alone.
    pub fn from_outcome(outcome: Result<Result<T, AppError>, futures::future::Aborted>) -> Option<Self> {
        match outcome {
            Ok(Ok(data)) => Some(Self::Loaded(Rc::new(data))),
            Ok(Err(e)) => Some(Self::Error(e.to_string())),
            Err(_) => None,
        }
    }
}

/// Employees per area, reloaded whenever the address changes.
#[hook]
pub fn use_area_counts(config: ApiConfig) -> UseStateHandle<DataState<AreaCounts>> {
    let state = use_state_eq(|| DataState::Idle);

    {
        let state = state.clone();

        use_effect_with(config, move |config| {
            let config = config.clone();
            state.set(DataState::Loading);

            let (task, handle) = abortable(async move {
                let client = EmployeesClient::new()?;
                fetch_area_counts(&client, &config).await
            });

            spawn_local(async move {
                if let Some(next) = DataState::from_outcome(task.await) {
                    state.set(next);
                }
            });

            move || handle.abort()
        });
    }

    state
}

/// Handle returned by `use_general_statistics` hook
#[derive(Clone, PartialEq)]
pub struct GeneralStatsHandle {
    pub state: DataState<GeneralStats>,
    pub load: Callback<(NaiveDate, NaiveDate)>,
}

/// Per-area production and attendance for a date window, loaded on demand.
///
/// Starting a new load, changing the address or unmounting aborts the load
/// in flight together with all of its pending requests.
#[hook]
pub fn use_general_statistics(config: ApiConfig) -> GeneralStatsHandle {
    let state = use_state_eq(|| DataState::Idle);
    let in_flight = use_mut_ref(|| None::<AbortHandle>);

    {
        let state = state.clone();
        let in_flight = in_flight.clone();

        use_effect_with(config.clone(), move |_| {
            state.set(DataState::Idle);
            move || {
                if let Some(handle) = in_flight.borrow_mut().take() {
                    handle.abort();
                }
            }
        });
    }

    let load = {
        let state = state.clone();

        Callback::from(move |(start, end): (NaiveDate, NaiveDate)| {
            if let Some(handle) = in_flight.borrow_mut().take() {
                handle.abort();
            }
            state.set(DataState::Loading);

            let config = config.clone();
            let (task, handle) = abortable(async move {
                let client = EmployeesClient::new()?;
                fetch_general_statistics(&client, &config, start, end).await
            });
            *in_flight.borrow_mut() = Some(handle);

            let state = state.clone();
            spawn_local(async move {
                if let Some(next) = DataState::from_outcome(task.await) {
                    state.set(next);
                }
            });
        })
    };

    GeneralStatsHandle {
        state: (*state).clone(),
        load,
    }
}
