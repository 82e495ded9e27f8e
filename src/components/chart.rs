use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::create_debounced_resize_listener;

const SERIES_COLORS: [&str; 3] = ["#FF6700", "#3B82F6", "#10B981"];

/// One named bar series, aligned with the chart's labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AreaChartProps {
    pub chart_id: AttrValue,
    pub title: AttrValue,
    pub labels: Rc<Vec<String>>,
    pub series: Rc<Vec<ChartSeries>>,
}

/// Bar chart of per-area figures.
#[function_component(AreaChart)]
pub fn area_chart(props: &AreaChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let chart_id = props.chart_id.clone();
        let title = props.title.clone();
        let labels = props.labels.clone();
        let series = props.series.clone();

        use_effect_with(
            (container_ref, labels, series),
            move |(container_ref, labels, series)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    let chart = build_chart(title.as_str(), labels, series);
                    render_chart(&container, chart_id.as_str(), &chart);

                    create_debounced_resize_listener(
                        move || render_chart(&container, chart_id.as_str(), &chart),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    if props.labels.is_empty() {
        return html! { <p class="no-data">{"No hay datos disponibles"}</p> };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        log::error!("Render error: {e:?}");
    }
}

fn build_chart(title: &str, labels: &[String], series: &[ChartSeries]) -> CharmingChart {
    let chart = CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().bottom("0"))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels.to_vec())
                .axis_label(AxisLabel::new().color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    series
        .iter()
        .zip(SERIES_COLORS.iter().cycle())
        .fold(chart, |chart, (series, color)| {
            chart.series(
                Bar::new()
                    .name(series.name.as_str())
                    .data(series.values.clone())
                    .item_style(ItemStyle::new().color(*color)),
            )
        })
}
