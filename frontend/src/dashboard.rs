use crate::api;
use crate::components::filter_bar::FilterBar;
use crate::models::{
    ApiStatus, ReportFilters, RevenueRankRow, StreamerPerfRow, TopViewerRow, ViralVideoRow,
};
use crate::utils::{format_money, format_number};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let status = use_state(ApiStatus::default);
    let revenue = use_state(Vec::<RevenueRankRow>::new);
    let viral = use_state(Vec::<ViralVideoRow>::new);
    let streamers = use_state(Vec::<StreamerPerfRow>::new);
    let viewers = use_state(Vec::<TopViewerRow>::new);

    let limit = use_state(|| 10usize);
    let filters = use_state(ReportFilters::default);
    let is_refreshing = use_state(|| false);
    let fetch_seq = use_mut_ref(|| 0u32);

    let fetch_rankings = {
        let revenue = revenue.clone();
        let viral = viral.clone();
        let streamers = streamers.clone();
        let viewers = viewers.clone();
        let fetch_seq = fetch_seq.clone();
        move |limit: usize, filters: ReportFilters| {
            let seq = {
                let mut s = fetch_seq.borrow_mut();
                *s += 1;
                *s
            };
            {
                let revenue = revenue.clone();
                let filters = filters.clone();
                let fetch_seq = fetch_seq.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::ranking_revenue(limit, &filters).await;
                    if *fetch_seq.borrow() != seq {
                        return;
                    }
                    revenue.set(result.unwrap_or_default());
                });
            }
            {
                let viral = viral.clone();
                let filters = filters.clone();
                let fetch_seq = fetch_seq.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::ranking_viral_videos(limit, &filters).await;
                    if *fetch_seq.borrow() != seq {
                        return;
                    }
                    viral.set(result.unwrap_or_default());
                });
            }
            {
                let streamers = streamers.clone();
                let filters = filters.clone();
                let fetch_seq = fetch_seq.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::ranking_streamers(limit, &filters).await;
                    if *fetch_seq.borrow() != seq {
                        return;
                    }
                    streamers.set(result.unwrap_or_default());
                });
            }
            {
                let viewers = viewers.clone();
                let fetch_seq = fetch_seq.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::ranking_top_viewers(limit, &filters).await;
                    if *fetch_seq.borrow() != seq {
                        return;
                    }
                    viewers.set(result.unwrap_or_default());
                });
            }
        }
    };

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(data) = api::fetch_status().await {
                    status.set(data);
                }
            });
            || ()
        });
    }

    {
        let fetch_rankings = fetch_rankings.clone();
        use_effect_with((*limit, (*filters).clone()), move |(l, f)| {
            fetch_rankings(*l, f.clone());
            || ()
        });
    }

    let on_limit_change = {
        let limit = limit.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            limit.set(value.parse().unwrap_or(10));
        })
    };

    let on_filter_change = {
        let filters = filters.clone();
        Callback::from(move |next: ReportFilters| filters.set(next))
    };

    let on_refresh = {
        let is_refreshing = is_refreshing.clone();
        let fetch_rankings = fetch_rankings.clone();
        let limit = limit.clone();
        let filters = filters.clone();
        Callback::from(move |_: MouseEvent| {
            let is_refreshing = is_refreshing.clone();
            let fetch_rankings = fetch_rankings.clone();
            let current_limit = *limit;
            let current_filters = (*filters).clone();
            is_refreshing.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::refresh_reports().await;
                fetch_rankings(current_limit, current_filters);
                is_refreshing.set(false);
            });
        })
    };

    let top_streamer = streamers.first();
    let top_channel = revenue.first();
    let top_viewer = viewers.first();
    let db_connected = status.db_status == "connected";

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Operational Dashboard"}</h2>
                        <p class="subtitle">{"Live overview of performance and engagement"}</p>
                    </div>
                    <div class="action-bar-tools">
                        <div class="limit-select">
                            <span>{"LIMIT"}</span>
                            <select onchange={on_limit_change}>
                                <option value="5" selected={*limit == 5}>{"Top 5"}</option>
                                <option value="10" selected={*limit == 10}>{"Top 10"}</option>
                                <option value="20" selected={*limit == 20}>{"Top 20"}</option>
                            </select>
                        </div>
                        <button class="btn btn-outline" onclick={on_refresh} disabled={*is_refreshing}>
                            { if *is_refreshing { "Re-indexing..." } else { "⟳ Synchronize" } }
                        </button>
                    </div>
                </div>

                <FilterBar on_filter_change={on_filter_change} />
            </section>

            <div class="kpi-grid">
                <div class="kpi-card">
                    <span class="kpi-title">{"Top Performance"}</span>
                    <div class="kpi-value">
                        { top_streamer.map(|s| s.nick.clone()).unwrap_or_else(|| "---".to_string()) }
                    </div>
                    <div class="kpi-label">
                        { format!("{} audience", format_number(top_streamer.and_then(|s| s.audiencia).unwrap_or(0))) }
                    </div>
                </div>

                <div class="kpi-card">
                    <span class="kpi-title">{"Revenue Leader"}</span>
                    <div class="kpi-value">
                        { format!("${:.1}k", top_channel.and_then(|r| r.faturamento).unwrap_or(0.0) / 1000.0) }
                    </div>
                    <div class="kpi-label">
                        { top_channel.map(|r| r.nome_canal.clone()).unwrap_or_else(|| "Global".to_string()) }
                    </div>
                </div>

                <div class="kpi-card">
                    <span class="kpi-title">{"Top Supporter"}</span>
                    <div class="kpi-value">
                        { top_viewer.map(|v| v.nick.clone()).unwrap_or_else(|| "---".to_string()) }
                    </div>
                    <div class="kpi-label">
                        { format!("{} donated", format_money(top_viewer.and_then(|v| v.total_doado).unwrap_or(0.0))) }
                    </div>
                </div>

                <div class="kpi-card">
                    <span class="kpi-title">{"System"}</span>
                    <div class={if db_connected { "kpi-value status-ok" } else { "kpi-value status-error" }}>
                        { if db_connected { "Active" } else { "Error" } }
                    </div>
                    <div class="kpi-label">{ &status.message }</div>
                </div>
            </div>

            <div class="analytics-grid">
                <div class="list-view">
                    <div class="panel-header">
                        <h3>{"Most Profitable Channels"}</h3>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Rank"}</th>
                                <th>{"Channel"}</th>
                                <th class="value-col">{"Revenue"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                revenue.iter().map(|row| {
                                    html! {
                                        <tr key={row.id_canal}>
                                            <td class="cell-rank">{ format!("#{}", row.rank) }</td>
                                            <td class="cell-title">{ &row.nome_canal }</td>
                                            <td class="value-cell value-col">
                                                { format_money(row.faturamento.unwrap_or(0.0)) }
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>

                <div class="list-view">
                    <div class="panel-header">
                        <h3>{"Viral Content"}</h3>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Video"}</th>
                                <th>{"Engagement"}</th>
                                <th class="value-col">{"Views"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                viral.iter().enumerate().map(|(idx, row)| {
                                    html! {
                                        <tr key={idx}>
                                            <td class="cell-title ellipsis">{ &row.titulo }</td>
                                            <td>
                                                <span class="cell-badge">
                                                    { format!("{:.1}%", row.taxa_engajamento * 100.0) }
                                                </span>
                                            </td>
                                            <td class="value-cell value-col">
                                                { format_number(row.visu_total.unwrap_or(0)) }
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>

                <div class="list-view">
                    <div class="panel-header">
                        <h3>{"Streamer Performance"}</h3>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Nick"}</th>
                                <th>{"Channels"}</th>
                                <th class="value-col">{"Audience"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                streamers.iter().enumerate().map(|(idx, row)| {
                                    html! {
                                        <tr key={idx}>
                                            <td class="cell-title">{ &row.nick }</td>
                                            <td>{ row.canais }</td>
                                            <td class="value-cell value-col">
                                                { format_number(row.audiencia.unwrap_or(0)) }
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>

                <div class="list-view">
                    <div class="panel-header">
                        <h3>{"Biggest Donors"}</h3>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"User"}</th>
                                <th>{"Videos Supported"}</th>
                                <th class="value-col">{"Total Donated"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                viewers.iter().enumerate().map(|(idx, row)| {
                                    html! {
                                        <tr key={idx}>
                                            <td class="cell-title">{ &row.nick }</td>
                                            <td>{ row.videos_apoiados }</td>
                                            <td class="value-cell value-col">
                                                { format_money(row.total_doado.unwrap_or(0.0)) }
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
