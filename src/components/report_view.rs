use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::use_report::use_report;
use crate::models::{
    employee::Employee,
    reports::{
        AttendanceSummary, DailyAttendance, DayWorked, DaysWorkedReport, HoursWorked, Payroll,
        ProductionRecord, ProductionReport, Report, ReportKind, ReportQuery, ReportRecord,
        UnitsProduced, UnitsProducedReport, format_date, parse_date,
    },
};
use crate::services::api::ApiConfig;

/// Payloads that know how to lay themselves out.
pub trait RenderReport {
    fn render(&self) -> Html;
}

impl RenderReport for ReportRecord {
    fn render(&self) -> Html {
        html! {
            <table class="report-record">
                <tbody>
                    {
                        self.field_names().map(|name| html! {
                            <tr>
                                <th>{name.to_string()}</th>
                                <td>{self.text(name).unwrap_or_else(|| "-".to_string())}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        }
    }
}

impl RenderReport for Vec<ReportRecord> {
    fn render(&self) -> Html {
        if self.is_empty() {
            return html! { <p class="no-data">{"Sin registros"}</p> };
        }
        self.iter().map(RenderReport::render).collect::<Html>()
    }
}

impl RenderReport for Vec<DayWorked> {
    fn render(&self) -> Html {
        html! {
            <div class="report-list">
                <p class="summary-value">{format!("{} días trabajados", self.len())}</p>
                <ul>
                    {
                        self.iter().map(|day| {
                            let label = day
                                .fields
                                .values()
                                .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
                                .collect::<Vec<_>>()
                                .join(" · ");
                            html! { <li>{label}</li> }
                        }).collect::<Html>()
                    }
                </ul>
            </div>
        }
    }
}

impl RenderReport for Vec<ProductionRecord> {
    fn render(&self) -> Html {
        let total: f64 = self.iter().map(|r| r.units).sum();
        html! {
            <div class="report-list">
                <p class="summary-value">{format!("Total producido: {total:.0}")}</p>
                <ul>
                    {
                        self.iter().map(|record| html! {
                            <li>{format!("{:.0} unidades", record.units)}</li>
                        }).collect::<Html>()
                    }
                </ul>
            </div>
        }
    }
}

impl RenderReport for UnitsProduced {
    fn render(&self) -> Html {
        html! {
            <div class="report-list">
                <p>{format!("Total de Items: {}", self.item_count())}</p>
                {
                    self.items().iter().map(|item| html! {
                        <p class="summary-value">{format!("Producción: {:.0}", item.total_producido)}</p>
                    }).collect::<Html>()
                }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportPanelProps {
    pub config: ApiConfig,
    /// Submission counter paired with the query, so re-submitting the same
    /// query fetches again.
    pub request: Option<(u32, ReportQuery)>,
}

/// Shows one report kind for the submitted query.
#[function_component]
pub fn ReportPanel<R>(props: &ReportPanelProps) -> Html
where
    R: Report,
    R::Payload: RenderReport,
{
    let handle = use_report::<R>(props.config.clone());

    {
        let load = handle.load.clone();
        use_effect_with(props.request, move |request| {
            if let Some((_, query)) = request {
                load.emit(*query);
            }
            || ()
        });
    }

    let slot = &handle.slot;
    html! {
        <div class="report-panel">
            <h3>{R::KIND.label()}</h3>
            <Status
                loading={slot.is_loading()}
                error={slot.error().map(|e| AttrValue::from(e.to_string()))}
            />
            if let Some(data) = slot.data() {
                {data.render()}
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportViewProps {
    pub config: ApiConfig,
    pub employee: Employee,
}

/// Date-range form plus the selected report for one employee.
#[function_component(ReportView)]
pub fn report_view(props: &ReportViewProps) -> Html {
    let today = format_date(Utc::now().date_naive());
    let kind = use_state(|| ReportKind::AttendanceSummary);
    let start = use_state(|| today.clone());
    let end = use_state(|| today);
    let request = use_state(|| None::<(u32, ReportQuery)>);
    let form_error = use_state(|| None::<String>);

    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = target.value().parse::<ReportKind>() {
                kind.set(selected);
            }
        })
    };

    let on_start = {
        let start = start.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            start.set(target.value());
        })
    };

    let on_end = {
        let end = end.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            end.set(target.value());
        })
    };

    let on_search = {
        let start = start.clone();
        let end = end.clone();
        let request = request.clone();
        let form_error = form_error.clone();
        let employee_id = props.employee.id_empleado;

        Callback::from(move |_: MouseEvent| {
            match (parse_date(&start), parse_date(&end)) {
                (Ok(from), Ok(to)) => {
                    form_error.set(None);
                    let counter = (*request).map_or(0, |(n, _)| n + 1);
                    request.set(Some((counter, ReportQuery::new(employee_id, from, to))));
                }
                (Err(e), _) | (_, Err(e)) => form_error.set(Some(e.to_string())),
            }
        })
    };

    let config = props.config.clone();
    let request_value = *request;
    let panel = match *kind {
        ReportKind::AttendanceSummary => html! {
            <ReportPanel<AttendanceSummary> {config} request={request_value} />
        },
        ReportKind::DailyAttendance => html! {
            <ReportPanel<DailyAttendance> {config} request={request_value} />
        },
        ReportKind::Payroll => html! {
            <ReportPanel<Payroll> {config} request={request_value} />
        },
        ReportKind::DaysWorked => html! {
            <ReportPanel<DaysWorkedReport> {config} request={request_value} />
        },
        ReportKind::Production => html! {
            <ReportPanel<ProductionReport> {config} request={request_value} />
        },
        ReportKind::HoursWorked => html! {
            <ReportPanel<HoursWorked> {config} request={request_value} />
        },
        ReportKind::UnitsProduced => html! {
            <ReportPanel<UnitsProducedReport> {config} request={request_value} />
        },
    };

    html! {
        <div class="report-view">
            <h2>{props.employee.nombre.clone()}</h2>
            <div class="report-filter">
                <select class="report-kind" onchange={on_kind} aria-label="Tipo de reporte">
                    {
                        ReportKind::all().iter().map(|k| {
                            let selected = *k == *kind;
                            html! { <option value={k.path()} {selected}>{k.label()}</option> }
                        }).collect::<Html>()
                    }
                </select>
                <input type="date" value={(*start).clone()} oninput={on_start} />
                <input type="date" value={(*end).clone()} oninput={on_end} />
                <button class="primary" onclick={on_search}>{"Buscar"}</button>
            </div>
            if let Some(e) = &*form_error {
                <p class="status error">{e.clone()}</p>
            }
            {panel}
        </div>
    }
}
