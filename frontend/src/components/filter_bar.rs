use crate::api;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::models::ReportFilters;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub on_filter_change: Callback<ReportFilters>,
}

/// Cross-cutting filter widget shared by the dashboard and analytics views.
/// Channel options load once; video options follow the channel selection and
/// clearing the channel also clears the selected video.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let channel_options = use_state(Vec::<SelectOption>::new);
    let video_options = use_state(Vec::<SelectOption>::new);
    let filters = use_state(ReportFilters::default);
    let video_fetch_seq = use_mut_ref(|| 0u32);

    {
        let channel_options = channel_options.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(page) = api::list_channels("", 1).await {
                    channel_options.set(
                        page.items
                            .iter()
                            .map(|c| SelectOption::new(c.id, c.nome.clone()))
                            .collect(),
                    );
                }
            });
            || ()
        });
    }

    {
        let video_options = video_options.clone();
        let video_fetch_seq = video_fetch_seq.clone();
        use_effect_with((*filters).channel_id.clone(), move |channel_id| {
            let channel_id = channel_id.clone();
            let seq = {
                let mut s = video_fetch_seq.borrow_mut();
                *s += 1;
                *s
            };
            if channel_id.is_empty() {
                video_options.set(Vec::new());
            } else {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::list_videos("", &channel_id, 1).await;
                    if *video_fetch_seq.borrow() != seq {
                        return;
                    }
                    match result {
                        Ok(page) => video_options.set(
                            page.items
                                .iter()
                                .map(|v| SelectOption::new(v.id_video, v.titulo.clone()))
                                .collect(),
                        ),
                        Err(_) => video_options.set(Vec::new()),
                    }
                });
            }
            || ()
        });
    }

    let apply = {
        let filters = filters.clone();
        let on_filter_change = props.on_filter_change.clone();
        move |next: ReportFilters| {
            filters.set(next.clone());
            on_filter_change.emit(next);
        }
    };

    let on_channel_change = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |channel_id: String| {
            // A channel change invalidates any video picked under the old one.
            apply(ReportFilters {
                channel_id,
                video_id: String::new(),
                ..(*filters).clone()
            });
        })
    };

    let on_video_change = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |video_id: String| {
            apply(ReportFilters {
                video_id,
                ..(*filters).clone()
            });
        })
    };

    let on_start_date = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply(ReportFilters {
                start_date: value,
                ..(*filters).clone()
            });
        })
    };

    let on_end_date = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply(ReportFilters {
                end_date: value,
                ..(*filters).clone()
            });
        })
    };

    let on_reset = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            apply(ReportFilters::default());
        })
    };

    html! {
        <div class="filter-bar">
            <span class="filter-bar-label">{"Filters"}</span>

            <div class="filter-bar-select">
                <SearchableSelect
                    options={(*channel_options).clone()}
                    value={(*filters).channel_id.clone()}
                    on_change={on_channel_change}
                    placeholder="Filter by channel..."
                />
            </div>

            <div class="filter-bar-select">
                <SearchableSelect
                    options={(*video_options).clone()}
                    value={(*filters).video_id.clone()}
                    on_change={on_video_change}
                    placeholder="Filter by video..."
                    disabled={(*filters).channel_id.is_empty()}
                />
            </div>

            <div class="filter-bar-dates">
                <input
                    type="date"
                    value={(*filters).start_date.clone()}
                    oninput={on_start_date}
                />
                <span>{"to"}</span>
                <input
                    type="date"
                    value={(*filters).end_date.clone()}
                    oninput={on_end_date}
                />
            </div>

            <button class="btn btn-ghost" onclick={on_reset}>{"× Clear"}</button>
        </div>
    }
}
