use crate::api;
use crate::charts::{DonutChart, GroupedBarChart, LineChart};
use crate::components::filter_bar::FilterBar;
use crate::models::{PerformanceRow, ReportFilters, RevenuePoint, ThemeSlice};
use crate::utils::{format_money, format_number};
use yew::prelude::*;

const THEME_SLICE_COUNT: usize = 5;
const PERFORMANCE_SLICE_COUNT: usize = 12;

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let revenue = use_state(Vec::<RevenuePoint>::new);
    let themes = use_state(Vec::<ThemeSlice>::new);
    let performance = use_state(Vec::<PerformanceRow>::new);

    let loading = use_state(|| false);
    let is_refreshing = use_state(|| false);
    let filters = use_state(ReportFilters::default);
    let fetch_seq = use_mut_ref(|| 0u32);

    let fetch_reports = {
        let revenue = revenue.clone();
        let themes = themes.clone();
        let performance = performance.clone();
        let loading = loading.clone();
        let fetch_seq = fetch_seq.clone();
        move |filters: ReportFilters| {
            let revenue = revenue.clone();
            let themes = themes.clone();
            let performance = performance.clone();
            let loading = loading.clone();
            let fetch_seq = fetch_seq.clone();
            loading.set(true);
            let seq = {
                let mut s = fetch_seq.borrow_mut();
                *s += 1;
                *s
            };
            wasm_bindgen_futures::spawn_local(async move {
                // The three report queries run concurrently and are awaited
                // together; the whole batch is dropped if it went stale.
                let (rev, theme, perf) = futures::join!(
                    api::report_revenue_over_time(&filters),
                    api::report_distribution_by_theme(&filters),
                    api::report_drilldown_performance(&filters),
                );
                if *fetch_seq.borrow() != seq {
                    return;
                }
                match (rev, theme, perf) {
                    (Ok(mut rev_rows), Ok(theme_rows), Ok(perf_rows)) => {
                        // Served newest-first; the chart wants chronological.
                        rev_rows.reverse();
                        revenue.set(rev_rows);
                        themes.set(theme_rows);
                        performance.set(perf_rows);
                    }
                    (rev, theme, perf) => {
                        for err in [rev.err(), theme.err(), perf.err()].into_iter().flatten() {
                            log::error!("report fetch failed: {err}");
                        }
                        revenue.set(Vec::new());
                        themes.set(Vec::new());
                        performance.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        }
    };

    {
        let fetch_reports = fetch_reports.clone();
        use_effect_with((*filters).clone(), move |f| {
            fetch_reports(f.clone());
            || ()
        });
    }

    let on_filter_change = {
        let filters = filters.clone();
        Callback::from(move |next: ReportFilters| filters.set(next))
    };

    let on_refresh = {
        let is_refreshing = is_refreshing.clone();
        let fetch_reports = fetch_reports.clone();
        let filters = filters.clone();
        Callback::from(move |_: MouseEvent| {
            let is_refreshing = is_refreshing.clone();
            let fetch_reports = fetch_reports.clone();
            let current_filters = (*filters).clone();
            is_refreshing.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::refresh_reports().await;
                fetch_reports(current_filters);
                is_refreshing.set(false);
            });
        })
    };

    let channel_scoped = !filters.channel_id.is_empty();

    let revenue_labels: Vec<String> = revenue.iter().map(|d| d.month.clone()).collect();
    let revenue_values: Vec<f64> = revenue.iter().map(|d| d.total).collect();

    let theme_slices: Vec<(String, f64)> = themes
        .iter()
        .take(THEME_SLICE_COUNT)
        .map(|t| (t.tema.clone(), t.count as f64))
        .collect();

    let perf_top: Vec<&PerformanceRow> =
        performance.iter().take(PERFORMANCE_SLICE_COUNT).collect();
    let bar_groups: Vec<String> = perf_top.iter().map(|r| r.entity_name.clone()).collect();
    let bar_primary: Vec<f64> = perf_top
        .iter()
        .map(|r| r.total_views.unwrap_or(0) as f64)
        .collect();
    let bar_secondary: Vec<f64> = perf_top
        .iter()
        .map(|r| {
            if channel_scoped {
                r.peak_views.unwrap_or(0) as f64
            } else {
                r.total_items.unwrap_or(0) as f64
            }
        })
        .collect();
    let secondary_label = if channel_scoped {
        "Peak Audience"
    } else {
        "Total Videos"
    };

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Warehouse Analytics"}</h2>
                        <p class="subtitle">
                            { if *loading { "Loading reports..." } else { "Strategic drill-down and market intelligence" } }
                        </p>
                    </div>
                    <button class="btn btn-outline" onclick={on_refresh} disabled={*is_refreshing}>
                        { if *is_refreshing { "Re-indexing..." } else { "⟳ Synchronize" } }
                    </button>
                </div>

                <FilterBar on_filter_change={on_filter_change} />
            </section>

            <div class="analytics-grid">
                <div class="kpi-card wide">
                    <div class="panel-header">
                        <h3>{"Revenue Growth"}</h3>
                    </div>
                    <LineChart labels={revenue_labels} values={revenue_values} />
                </div>

                <div class="kpi-card">
                    <div class="panel-header">
                        <h3>{"Distribution by Theme"}</h3>
                    </div>
                    <DonutChart slices={theme_slices} />
                </div>

                <div class="kpi-card">
                    <div class="panel-header">
                        <h3>{"Performance Drilldown"}</h3>
                    </div>
                    <GroupedBarChart
                        groups={bar_groups}
                        primary={("Total Views".to_string(), bar_primary)}
                        secondary={(secondary_label.to_string(), bar_secondary)}
                    />
                </div>

                <div class="list-view wide">
                    <div class="panel-header">
                        <h3>
                            { if channel_scoped { "Per-Video Performance" } else { "Per-Channel Performance" } }
                        </h3>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{ if channel_scoped { "Video" } else { "Channel" } }</th>
                                <th>{ if channel_scoped { "Peak Concurrent" } else { "Total Videos" } }</th>
                                <th>{"Accumulated Views"}</th>
                                <th class="value-col">{"Total Revenue"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                performance.iter().enumerate().map(|(idx, row)| {
                                    let middle = if channel_scoped {
                                        row.peak_views.unwrap_or(0)
                                    } else {
                                        row.total_items.unwrap_or(0)
                                    };
                                    html! {
                                        <tr key={idx}>
                                            <td class="cell-title">{ &row.entity_name }</td>
                                            <td>{ format_number(middle) }</td>
                                            <td>{ format_number(row.total_views.unwrap_or(0)) }</td>
                                            <td class="value-cell value-col">
                                                { format_money(row.total_revenue.unwrap_or(0.0)) }
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
