use crate::api::fetch_health_analytics;
use crate::graph_creation::{
    create_create_chart_action, create_dom_el_ref_and_graph_call_action, GraphData,
};
use crate::viewport::create_narrow_viewport_signal;
use api_structs::time_conversion::LocalTime;
use api_structs::ui::analytics::HealthMetric;
use backtraced_error::error_chain_to_pretty_formatted;
use health_charts::{DeriverConfig, Metric, MetricSelection, SeriesDeriver};
use leptos::logging::log;
use leptos::{
    component, create_effect, create_memo, view, CollectView, IntoView, SignalGet,
    SignalGetUntracked, SignalSet, SignalUpdate, SignalWith, WriteSignal,
};

const HEALTH_RISK_GRAPH_DOM_ID: &str = "health_risk_trends_graph_id";

#[component]
pub fn HealthAnalytics() -> impl IntoView {
    let narrow_r = create_narrow_viewport_signal();
    let (health_data_r, health_data_w) = leptos::create_signal(Vec::<HealthMetric>::new());
    let (selection_r, selection_w) = leptos::create_signal(MetricSelection::default());
    let (show_settings_r, show_settings_w) = leptos::create_signal(!narrow_r.get_untracked());
    // crossing the breakpoint resets the panel: open when wide, collapsed when narrow
    create_effect(move |_| show_settings_w.set(!narrow_r.get()));
    let (refresh_count_r, refresh_count_w) = leptos::create_signal(0_u32);
    let _api_request_sender = leptos::create_local_resource(
        move || refresh_count_r.get(),
        move |_| get_health_analytics(health_data_w),
    );
    let deriver = SeriesDeriver::new(DeriverConfig::default().with_local_time(LocalTime::System));
    let chart = create_memo(move |_| {
        health_data_r.with(|rows| selection_r.with(|selection| deriver.derive(rows, selection)))
    });
    let create_chart_action = create_create_chart_action();

    let metric_toggles = Metric::ALL
        .into_iter()
        .map(|metric| {
            view! {
                <label class="metric-toggle" style=format!("color: {}", metric.color())>
                    <input
                        type="checkbox"
                        prop:checked=move || selection_r.with(|s| s.is_selected(metric))
                        on:change=move |_| selection_w.update(|s| s.toggle(metric))
                    />
                    {metric.toggle_label()}
                </label>
            }
        })
        .collect_view();

    let settings_toggle = move || {
        narrow_r.get().then(|| {
            view! {
                <button class="card__toggle" on:click=move |_| show_settings_w.update(|s| *s = !*s)>
                    {move || if show_settings_r.get() { "▲" } else { "▼" }}
                </button>
            }
        })
    };

    let chart_view = move || {
        let chart = chart.get();
        let narrow = narrow_r.get();
        if chart.has_renderable_series() {
            let graph_data = GraphData::from_derived_chart(HEALTH_RISK_GRAPH_DOM_ID, &chart, narrow);
            let (chart_container, dom_id) =
                create_dom_el_ref_and_graph_call_action(graph_data, create_chart_action);
            view! {
                <div class="analytics__chart" id=dom_id node_ref=chart_container></div>
            }
            .into_view()
        } else {
            view! {
                <div class="analytics__placeholder">
                    <p>"Select at least one metric to display the chart"</p>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <div class="analytics">
            <h1 class="analytics__title">"Health Analytics"</h1>
            <div class="card">
                <div class="card__header">
                    <h2>"Probability Metrics Selection"</h2>
                    {settings_toggle}
                </div>
                <div style=move || if show_settings_r.get() { "display: block" } else { "display: none" }>
                    <fieldset class="metric-toggles">{metric_toggles}</fieldset>
                    <button class="button--outlined" on:click=move |_| refresh_count_w.update(|c| *c += 1)>
                        "Refresh Data"
                    </button>
                </div>
            </div>
            <div class="card">
                <h2>"Health Risk Trends Over Time"</h2>
                {chart_view}
                <div class="analytics__actions">
                    <a class="button--outlined" href="/ai-health-prediction">"Detail Reports"</a>
                    <a class="button--contained" href="/generate-report">"Add New"</a>
                </div>
            </div>
        </div>
    }
}

/// A failed refresh keeps whatever was shown before.
async fn get_health_analytics(w: WriteSignal<Vec<HealthMetric>>) {
    log!("Sending health analytics req");
    match fetch_health_analytics().await {
        Ok(rows) => w.set(rows),
        Err(e) => log!(
            "Failed to fetch health analytics data: {}",
            error_chain_to_pretty_formatted(&e)
        ),
    }
}
