use crate::models::stats::GeneralStats;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsSummaryProps {
    pub stats: Rc<GeneralStats>,
}

#[function_component(StatsSummary)]
pub fn stats_summary(props: &StatsSummaryProps) -> Html {
    let stats = &props.stats;

    html! {
        <div class="data-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"Empleados Activos"}</h3>
                    <p class="summary-value">{stats.total_employees.to_string()}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Total Producción"}</h3>
                    <p class="summary-value">{format!("{:.0}", stats.total_production)}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Días de Asistencia"}</h3>
                    <p class="summary-value">{stats.total_attendance.to_string()}</p>
                </div>
                <div class="summary-item">
                    <h3>{"Producción por empleado"}</h3>
                    <p class="summary-value">{format!("{:.1}", stats.average_production())}</p>
                </div>
            </div>

            if stats.stats_by_area.is_empty() {
                <p class="no-data">{"No hay datos de empleados disponibles"}</p>
            } else {
                <table class="area-table">
                    <thead>
                        <tr>
                            <th>{"Área"}</th>
                            <th>{"Empleados"}</th>
                            <th>{"Producción"}</th>
                            <th>{"Asistencia"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            stats.stats_by_area.iter().map(|(area, area_stats)| html! {
                                <tr>
                                    <td>{area}</td>
                                    <td>{area_stats.employees.to_string()}</td>
                                    <td>{format!("{:.0}", area_stats.production)}</td>
                                    <td>{area_stats.attendance.to_string()}</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            }
        </div>
    }
}
