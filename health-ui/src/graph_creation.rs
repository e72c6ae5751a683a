use charming::component::{Axis, Legend};
use charming::datatype::{CompositeValue, NumericValue};
use charming::element::{AxisType, ItemStyle, LineStyle, NameLocation, TextStyle, Tooltip, Trigger};
use charming::series::Line;
use charming::{Chart, WasmRenderer};
use health_charts::tick_labels::format_tick_labels;
use health_charts::{DerivedChart, NamedSeries};
use leptos::html::Div;
use leptos::{create_action, Action, NodeRef};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct GraphSeries {
    pub name: String,
    pub color: String,
    pub y_values: Vec<f64>,
}

impl From<&NamedSeries> for GraphSeries {
    fn from(series: &NamedSeries) -> Self {
        Self {
            name: series.name.clone(),
            color: series.color.clone(),
            y_values: series.values.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphData {
    pub dom_id_to_render_to: String,
    pub y_name: String,
    pub y_max: u32,
    /// Tick text, already shortened for narrow screens
    pub x_labels: Vec<String>,
    pub series: Vec<GraphSeries>,
    pub width: u32,
    pub height: u32,
}

impl GraphData {
    pub fn from_derived_chart(dom_id_to_render_to: &str, chart: &DerivedChart, narrow: bool) -> Self {
        Self {
            dom_id_to_render_to: dom_id_to_render_to.to_string(),
            y_name: if narrow {
                String::new()
            } else {
                "Probability (%)".to_string()
            },
            y_max: chart.y_axis_max,
            x_labels: format_tick_labels(&chart.labels, narrow),
            series: chart.series.iter().map(GraphSeries::from).collect(),
            width: if narrow { 340 } else { 825 },
            height: if narrow { 350 } else { 420 },
        }
    }
}

pub fn create_dom_el_ref_and_graph_call_action(
    data: GraphData,
    create_chart_action: Action<GraphData, ()>,
) -> (NodeRef<Div>, String) {
    let chart_container = NodeRef::<Div>::new();
    let dom_id_to_render_to = data.dom_id_to_render_to.clone();
    chart_container.on_load({
        move |_e| {
            create_chart_action.dispatch(data);
        }
    });
    (chart_container, dom_id_to_render_to)
}

pub fn create_create_chart_action() -> Action<GraphData, ()> {
    create_action(move |graph_data: &GraphData| {
        let graph_data = graph_data.clone();
        async move {
            let mut chart = Chart::new()
                .x_axis(
                    Axis::new()
                        .type_(AxisType::Category)
                        .data(graph_data.x_labels.clone()),
                )
                .y_axis(
                    Axis::new()
                        .type_(AxisType::Value)
                        .min(0.)
                        .max(f64::from(graph_data.y_max))
                        .name(&graph_data.y_name)
                        .name_text_style(TextStyle::new().font_size(14.))
                        .name_gap(40.)
                        .name_location(NameLocation::Middle),
                )
                .legend(
                    Legend::new()
                        .data(
                            graph_data
                                .series
                                .iter()
                                .map(|s| s.name.clone())
                                .collect::<Vec<String>>(),
                        )
                        .show(true),
                )
                .tooltip(Tooltip::new().trigger(Trigger::Axis));
            for series in &graph_data.series {
                chart = chart.series(
                    Line::new()
                        .name(&series.name)
                        .item_style(ItemStyle::new().color(series.color.as_str()))
                        .line_style(LineStyle::new().color(series.color.as_str()))
                        .data(
                            series
                                .y_values
                                .iter()
                                .map(|v| CompositeValue::Number(NumericValue::Float(*v)))
                                .collect::<Vec<CompositeValue>>(),
                        ),
                );
            }

            let renderer = WasmRenderer::new(graph_data.width, graph_data.height);
            match renderer.render(&graph_data.dom_id_to_render_to, &chart) {
                Ok(_) => info!(
                    "Rendered {} series into {}",
                    graph_data.series.len(),
                    graph_data.dom_id_to_render_to
                ),
                Err(e) => error!(
                    "Failed to render chart into {}: {:?}",
                    graph_data.dom_id_to_render_to, e
                ),
            }
        }
    })
}
