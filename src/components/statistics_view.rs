use std::rc::Rc;

use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::chart::{AreaChart, ChartSeries};
use crate::components::status::Status;
use crate::components::summary::StatsSummary;
use crate::hooks::use_statistics::{DataState, use_area_counts, use_general_statistics};
use crate::models::reports::{format_date, parse_date};
use crate::services::api::ApiConfig;

#[derive(Properties, PartialEq)]
pub struct StatisticsViewProps {
    pub config: ApiConfig,
}

/// General statistics for a single day: totals, per-area table and chart.
#[function_component(StatisticsView)]
pub fn statistics_view(props: &StatisticsViewProps) -> Html {
    let handle = use_general_statistics(props.config.clone());
    let date = use_state(|| format_date(Utc::now().date_naive()));
    let form_error = use_state(|| None::<String>);

    let on_date = {
        let date = date.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            date.set(target.value());
        })
    };

    let on_load = {
        let date = date.clone();
        let form_error = form_error.clone();
        let load = handle.load.clone();
        Callback::from(move |_: MouseEvent| match parse_date(&date) {
            Ok(day) => {
                form_error.set(None);
                load.emit((day, day));
            }
            Err(e) => form_error.set(Some(e.to_string())),
        })
    };

    let (loading, error) = match &handle.state {
        DataState::Loading => (true, None),
        DataState::Error(e) => (false, Some(AttrValue::from(e.clone()))),
        _ => (false, None),
    };

    let details = handle.state.data().map(|stats| {
        let (labels, production, attendance) = stats.area_series();
        html! {
            <>
                <StatsSummary stats={stats.clone()} />
                <AreaChart
                    chart_id="area-stats-chart"
                    title="Producción y asistencia por área"
                    labels={Rc::new(labels)}
                    series={Rc::new(vec![
                        ChartSeries::new("Producción", production),
                        ChartSeries::new("Asistencia", attendance),
                    ])}
                />
            </>
        }
    });

    html! {
        <div class="statistics-view">
            <div class="report-filter">
                <h3>{"Filtro de Fecha"}</h3>
                <input type="date" value={(*date).clone()} oninput={on_date} />
                <button class="primary" onclick={on_load} disabled={loading}>
                    {if loading { "Cargando..." } else { "Cargar Estadísticas" }}
                </button>
            </div>
            if let Some(e) = &*form_error {
                <p class="status error">{e}</p>
            }
            <Status {loading} {error} message="Cargando estadísticas generales..." />
            if let Some(details) = details {
                {details}
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaCountsViewProps {
    pub config: ApiConfig,
}

/// Headcount per area for the configured backend.
#[function_component(AreaCountsView)]
pub fn area_counts_view(props: &AreaCountsViewProps) -> Html {
    let state = use_area_counts(props.config.clone());

    match &*state {
        DataState::Idle => html! {},
        DataState::Loading => html! { <Status loading=true message="Cargando empleados..." /> },
        DataState::Error(_) => html! {
            <p class="no-data">{"No hay datos de empleados disponibles"}</p>
        },
        DataState::Loaded(counts) => {
            let (labels, values) = counts.series_data();
            html! {
                <div class="chart-section">
                    <h3>{format!("Empleados por Área ({})", counts.total_employees)}</h3>
                    <AreaChart
                        chart_id="area-counts-chart"
                        title="Empleados por Área"
                        labels={Rc::new(labels)}
                        series={Rc::new(vec![ChartSeries::new("Empleados", values)])}
                    />
                </div>
            }
        }
    }
}
