use crate::api;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::models::{Channel, Video, VideoDetail, VideoPayload};
use crate::utils::{confirm, format_money, format_number, input_setter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
struct VideoForm {
    id_video: String,
    id_canal: String,
    titulo: String,
    datah: String,
    tema: String,
    duracao: String,
    visu_simul: String,
    visu_total: String,
}

#[function_component(VideosPage)]
pub fn videos_page() -> Html {
    let items = use_state(Vec::<Video>::new);
    let total = use_state(|| 0i64);
    let loading = use_state(|| false);
    let selected = use_state(|| None::<VideoDetail>);

    let modal_open = use_state(|| false);
    let edit_mode = use_state(|| false);
    let form = use_state(VideoForm::default);

    let search_term = use_state(String::new);
    let page = use_state(|| 1usize);

    let channels = use_state(Vec::<Channel>::new);
    let fetch_seq = use_mut_ref(|| 0u32);

    let fetch_items = {
        let items = items.clone();
        let total = total.clone();
        let loading = loading.clone();
        let fetch_seq = fetch_seq.clone();
        move |q: String, page_no: usize| {
            let items = items.clone();
            let total = total.clone();
            let loading = loading.clone();
            let fetch_seq = fetch_seq.clone();
            loading.set(true);
            let seq = {
                let mut s = fetch_seq.borrow_mut();
                *s += 1;
                *s
            };
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::list_videos(&q, "", page_no).await;
                if *fetch_seq.borrow() != seq {
                    return;
                }
                if let Ok(data) = result {
                    items.set(data.items);
                    total.set(data.total);
                }
                loading.set(false);
            });
        }
    };

    {
        let fetch_items = fetch_items.clone();
        use_effect_with(((*search_term).clone(), *page), move |(q, p)| {
            fetch_items(q.clone(), *p);
            || ()
        });
    }

    {
        let channels = channels.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(data) = api::list_channels("", 1).await {
                    channels.set(data.items);
                }
            });
            || ()
        });
    }

    let on_search = {
        let search_term = search_term.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            search_term.set(value);
            page.set(1);
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |p: usize| page.set(p))
    };

    let fetch_detail = {
        let selected = selected.clone();
        Callback::from(move |(id_canal, id_video): (i64, i64)| {
            let selected = selected.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(detail) = api::get_video(id_canal, id_video).await {
                    selected.set(Some(detail));
                }
            });
        })
    };

    let open_create = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            edit_mode.set(false);
            form.set(VideoForm::default());
            modal_open.set(true);
        })
    };

    let open_edit = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |video: Video| {
            edit_mode.set(true);
            form.set(VideoForm {
                id_video: video.id_video.to_string(),
                id_canal: video.id_canal.to_string(),
                titulo: video.titulo.clone(),
                // datetime-local inputs take minute precision.
                datah: video.datah.chars().take(16).collect(),
                tema: video.tema.clone().unwrap_or_default(),
                duracao: video.duracao.to_string(),
                visu_simul: video.visu_simul.unwrap_or(0).to_string(),
                visu_total: video.visu_total.unwrap_or(0).to_string(),
            });
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(false))
    };

    let on_submit = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        let fetch_items = fetch_items.clone();
        let search_term = search_term.clone();
        let page = page.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form_data = (*form).clone();
            let edit = *edit_mode;
            let modal_open = modal_open.clone();
            let fetch_items = fetch_items.clone();
            let q = (*search_term).clone();
            let page_no = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let payload = VideoPayload {
                    id_canal: form_data.id_canal.parse().unwrap_or(0),
                    titulo: form_data.titulo.clone(),
                    datah: form_data.datah.clone(),
                    tema: form_data.tema.clone(),
                    duracao: form_data.duracao.parse().unwrap_or(0),
                    visu_simul: form_data.visu_simul.parse().unwrap_or(0),
                    visu_total: form_data.visu_total.parse().unwrap_or(0),
                };
                let result = if edit {
                    api::update_video(
                        form_data.id_canal.parse().unwrap_or(0),
                        form_data.id_video.parse().unwrap_or(0),
                        &payload,
                    )
                    .await
                } else {
                    api::create_video(&payload).await
                };
                if result.is_ok() {
                    modal_open.set(false);
                    fetch_items(q, page_no);
                }
            });
        })
    };

    let on_close_detail = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let on_delete = {
        let selected = selected.clone();
        let fetch_items = fetch_items.clone();
        let search_term = search_term.clone();
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(detail) = (*selected).clone() else {
                return;
            };
            if !confirm("Delete this video?") {
                return;
            }
            let selected = selected.clone();
            let fetch_items = fetch_items.clone();
            let q = (*search_term).clone();
            let page_no = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::delete_video(detail.video.id_canal, detail.video.id_video).await;
                selected.set(None);
                fetch_items(q, page_no);
            });
        })
    };

    let channel_options: Vec<SelectOption> = channels
        .iter()
        .map(|c| SelectOption::new(c.id, c.nome.clone()))
        .collect();

    let on_titulo = input_setter(&form, |f, v| f.titulo = v);
    let on_datah = input_setter(&form, |f, v| f.datah = v);
    let on_tema = input_setter(&form, |f, v| f.tema = v);
    let on_duracao = input_setter(&form, |f, v| f.duracao = v);
    let on_visu_simul = input_setter(&form, |f, v| f.visu_simul = v);
    let on_visu_total = input_setter(&form, |f, v| f.visu_total = v);
    let on_channel = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(VideoForm {
                id_canal: v,
                ..(*form).clone()
            })
        })
    };

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Video Production"}</h2>
                        <p class="subtitle">{"Audience and engagement reports per media item"}</p>
                    </div>
                    <div class="search-bar">
                        <input
                            type="text"
                            placeholder="Search video by title..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <button class="btn btn-primary" onclick={open_create}>{"+ New Video"}</button>
                </div>
            </section>

            <div class={if selected.is_some() { "split-view" } else { "full-view" }}>
                <div class="list-view">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Video Title"}</th>
                                <th>{"Channel"}</th>
                                <th>{"Views"}</th>
                                <th class="actions-col">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                if *loading && items.is_empty() {
                                    html! { <tr><td colspan="4" class="loading-cell">{"Loading..."}</td></tr> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                items.iter().map(|video| {
                                    let on_row_click = {
                                        let fetch_detail = fetch_detail.clone();
                                        let key = (video.id_canal, video.id_video);
                                        Callback::from(move |_: MouseEvent| fetch_detail.emit(key))
                                    };
                                    let on_edit_click = {
                                        let open_edit = open_edit.clone();
                                        let video = video.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            open_edit.emit(video.clone());
                                        })
                                    };
                                    html! {
                                        <tr
                                            key={format!("{}-{}", video.id_canal, video.id_video)}
                                            class="clickable"
                                            onclick={on_row_click}
                                        >
                                            <td><span class="cell-title">{ &video.titulo }</span></td>
                                            <td>{ video.canal_nome.as_deref().unwrap_or("-") }</td>
                                            <td class="value-cell">{ format_number(video.visu_total.unwrap_or(0)) }</td>
                                            <td class="actions-col">
                                                <button class="btn btn-outline" onclick={on_edit_click}>{"EDIT"}</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                    <Pagination total={*total} page={*page} on_page_change={on_page_change} />
                </div>

                {
                    if let Some(detail) = &*selected {
                        html! {
                            <div class="detail-view">
                                <div class="detail-header">
                                    <h3>{"Content Analysis"}</h3>
                                    <button class="btn" onclick={on_close_detail}>{"×"}</button>
                                </div>

                                <div class="detail-title-block">
                                    <span class="detail-kicker">
                                        { format!("Theme: {}", detail.video.tema.as_deref().unwrap_or("-")) }
                                    </span>
                                    <h2>{ &detail.video.titulo }</h2>
                                    <div class="cell-sub">
                                        { format!("Channel {}", detail.video.canal_nome.as_deref().unwrap_or("-")) }
                                    </div>
                                </div>

                                <div class="detail-metrics">
                                    <div class="metric-card">
                                        <div class="metric-label">{"DURATION"}</div>
                                        <div class="metric-value">{ format!("{} min", detail.video.duracao) }</div>
                                    </div>
                                    <div class="metric-card">
                                        <div class="metric-label">{"PEAK CONCURRENT"}</div>
                                        <div class="metric-value">{ format_number(detail.video.visu_simul.unwrap_or(0)) }</div>
                                    </div>
                                </div>

                                <h4 class="detail-section-title">{"Donation Report"}</h4>
                                {
                                    if detail.donations.is_empty() {
                                        html! { <p class="subtitle">{"No donations tracked on this video."}</p> }
                                    } else {
                                        html! {
                                            <div class="detail-list">
                                                {
                                                    detail.donations.iter().enumerate().map(|(idx, donation)| {
                                                        html! {
                                                            <div key={idx} class="detail-list-row split">
                                                                <span>{ donation.nick.as_deref().unwrap_or("-") }</span>
                                                                <span class="value-cell">{ format!("+{}", format_money(donation.valor)) }</span>
                                                            </div>
                                                        }
                                                    }).collect::<Html>()
                                                }
                                            </div>
                                        }
                                    }
                                }

                                <button class="btn btn-danger detail-delete" onclick={on_delete}>
                                    {"Remove From System"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <Modal
                open={*modal_open}
                title={if *edit_mode { "Edit Media" } else { "New Media" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Source Channel"}</label>
                        <SearchableSelect
                            options={channel_options}
                            value={form.id_canal.clone()}
                            on_change={on_channel}
                            placeholder="Search channel..."
                            disabled={*edit_mode}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Title"}</label>
                        <input type="text" required={true} value={form.titulo.clone()} oninput={on_titulo} />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Publication Date"}</label>
                            <input type="datetime-local" required={true} value={form.datah.clone()} oninput={on_datah} />
                        </div>
                        <div class="form-group">
                            <label>{"Duration (min)"}</label>
                            <input type="number" required={true} value={form.duracao.clone()} oninput={on_duracao} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{"Theme / Category"}</label>
                        <input type="text" value={form.tema.clone()} oninput={on_tema} placeholder="E.g. Gaming, IRL..." />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Peak Concurrent"}</label>
                            <input type="number" value={form.visu_simul.clone()} oninput={on_visu_simul} />
                        </div>
                        <div class="form-group">
                            <label>{"Total Reach"}</label>
                            <input type="number" value={form.visu_total.clone()} oninput={on_visu_total} />
                        </div>
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn" onclick={close_modal}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">
                            { if *edit_mode { "Save Changes" } else { "Publish Video" } }
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
