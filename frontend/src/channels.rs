use crate::api;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::models::{Channel, ChannelDetail, ChannelPayload, Platform, User};
use crate::utils::{
    confirm, format_iso8601_date, format_number, input_setter, select_setter, textarea_setter,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct ChannelForm {
    id: String,
    nome: String,
    tipo: String,
    data: String,
    descricao: String,
    id_streamer: String,
    nro_plataforma: String,
}

impl Default for ChannelForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            nome: String::new(),
            tipo: "publico".to_string(),
            data: String::new(),
            descricao: String::new(),
            id_streamer: String::new(),
            nro_plataforma: String::new(),
        }
    }
}

#[function_component(ChannelsPage)]
pub fn channels_page() -> Html {
    let items = use_state(Vec::<Channel>::new);
    let total = use_state(|| 0i64);
    let loading = use_state(|| false);
    let selected = use_state(|| None::<ChannelDetail>);

    let modal_open = use_state(|| false);
    let edit_mode = use_state(|| false);
    let form = use_state(ChannelForm::default);

    let search_term = use_state(String::new);
    let page = use_state(|| 1usize);

    let users = use_state(Vec::<User>::new);
    let platforms = use_state(Vec::<Platform>::new);
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
                let result = api::list_channels(&q, page_no).await;
                // A newer request has been issued in the meantime; drop this one.
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
        let users = users.clone();
        let platforms = platforms.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(data) = api::list_users("", 1).await {
                    users.set(data.items);
                }
                if let Ok(data) = api::list_platforms("", 1).await {
                    platforms.set(data.items);
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
        Callback::from(move |id: i64| {
            let selected = selected.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(detail) = api::get_channel(id).await {
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
            form.set(ChannelForm::default());
            modal_open.set(true);
        })
    };

    let open_edit = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |channel: Channel| {
            edit_mode.set(true);
            form.set(ChannelForm {
                id: channel.id.to_string(),
                nome: channel.nome.clone(),
                tipo: channel.tipo.clone(),
                data: channel.data.split('T').next().unwrap_or("").to_string(),
                descricao: channel.descricao.clone().unwrap_or_default(),
                id_streamer: channel.id_streamer.to_string(),
                nro_plataforma: channel.nro_plataforma.to_string(),
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
                let payload = ChannelPayload {
                    nome: form_data.nome.clone(),
                    tipo: form_data.tipo.clone(),
                    data: form_data.data.clone(),
                    descricao: form_data.descricao.clone(),
                    id_streamer: form_data.id_streamer.parse().unwrap_or(0),
                    nro_plataforma: form_data.nro_plataforma.parse().unwrap_or(0),
                };
                let result = if edit {
                    api::update_channel(form_data.id.parse().unwrap_or(0), &payload).await
                } else {
                    api::create_channel(&payload).await
                };
                // On failure the modal stays open for another attempt.
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
            if !confirm("Shut down this channel?") {
                return;
            }
            let selected = selected.clone();
            let fetch_items = fetch_items.clone();
            let q = (*search_term).clone();
            let page_no = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::delete_channel(detail.channel.id).await;
                selected.set(None);
                fetch_items(q, page_no);
            });
        })
    };

    let user_options: Vec<SelectOption> = users
        .iter()
        .map(|u| SelectOption::new(u.id, u.nick.clone()))
        .collect();
    let platform_options: Vec<SelectOption> = platforms
        .iter()
        .map(|p| SelectOption::new(p.nro, p.nome.clone()))
        .collect();

    let on_nome = input_setter(&form, |f, v| f.nome = v);
    let on_descricao = textarea_setter(&form, |f, v| f.descricao = v);
    let on_data = input_setter(&form, |f, v| f.data = v);
    let on_tipo = select_setter(&form, |f, v| f.tipo = v);
    let on_streamer = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(ChannelForm {
                id_streamer: v,
                ..(*form).clone()
            })
        })
    };
    let on_platform = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(ChannelForm {
                nro_plataforma: v,
                ..(*form).clone()
            })
        })
    };

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Broadcast Channels"}</h2>
                        <p class="subtitle">{"Digital assets and streamer networks"}</p>
                    </div>
                    <div class="search-bar">
                        <input
                            type="text"
                            placeholder="Search channel by name..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <button class="btn btn-primary" onclick={open_create}>{"+ New Channel"}</button>
                </div>
            </section>

            <div class={if selected.is_some() { "split-view" } else { "full-view" }}>
                <div class="list-view">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Channel Name"}</th>
                                <th>{"Streamer"}</th>
                                <th>{"Network"}</th>
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
                                items.iter().map(|channel| {
                                    let on_row_click = {
                                        let fetch_detail = fetch_detail.clone();
                                        let id = channel.id;
                                        Callback::from(move |_: MouseEvent| fetch_detail.emit(id))
                                    };
                                    let on_edit_click = {
                                        let open_edit = open_edit.clone();
                                        let channel = channel.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            open_edit.emit(channel.clone());
                                        })
                                    };
                                    html! {
                                        <tr key={channel.id} class="clickable" onclick={on_row_click}>
                                            <td><span class="cell-title">{ &channel.nome }</span></td>
                                            <td>{ channel.streamer_nick.as_deref().unwrap_or("-") }</td>
                                            <td class="cell-tag">{ channel.platform_name.as_deref().unwrap_or("-") }</td>
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
                                    <div>
                                        <span class="detail-kicker">{ format!("{} channel", detail.channel.tipo) }</span>
                                        <h3>{ &detail.channel.nome }</h3>
                                    </div>
                                    <button class="btn" onclick={on_close_detail}>{"×"}</button>
                                </div>

                                <div class="detail-metrics">
                                    <div class="metric-card">
                                        <div class="metric-label">{"TOTAL VIEWS"}</div>
                                        <div class="metric-value">
                                            { format_number(detail.channel.qtd_visualizacoes.unwrap_or(0)) }
                                        </div>
                                    </div>
                                    <div class="metric-card">
                                        <div class="metric-label">{"ACTIVE SINCE"}</div>
                                        <div class="metric-value">{ format_iso8601_date(&detail.channel.data) }</div>
                                    </div>
                                </div>

                                <h4 class="detail-section-title">{"Recent Productions"}</h4>
                                <div class="detail-list">
                                    {
                                        detail.videos.iter().take(3).map(|video| {
                                            html! {
                                                <div key={video.id_video} class="detail-list-row">
                                                    { &video.titulo }
                                                </div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>

                                <button class="btn btn-danger detail-delete" onclick={on_delete}>
                                    {"Shut Down Channel"}
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
                title={if *edit_mode { "Edit Channel" } else { "New Channel" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Channel Name"}</label>
                        <input type="text" required={true} value={form.nome.clone()} oninput={on_nome} placeholder="E.g. Master League" />
                    </div>
                    <div class="form-group">
                        <label>{"Owner (Streamer)"}</label>
                        <SearchableSelect
                            options={user_options}
                            value={form.id_streamer.clone()}
                            on_change={on_streamer}
                            placeholder="Search streamer..."
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Host Platform"}</label>
                        <SearchableSelect
                            options={platform_options}
                            value={form.nro_plataforma.clone()}
                            on_change={on_platform}
                            placeholder="Select platform..."
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Content Type"}</label>
                        <select onchange={on_tipo}>
                            <option value="misto" selected={form.tipo == "misto"}>{"Mixed (Gaming & Talk)"}</option>
                            <option value="publico" selected={form.tipo == "publico"}>{"Open / Public"}</option>
                            <option value="privado" selected={form.tipo == "privado"}>{"Exclusive / Private"}</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Launch Date"}</label>
                        <input type="date" required={true} value={form.data.clone()} oninput={on_data} />
                    </div>
                    <div class="form-group">
                        <label>{"Description"}</label>
                        <textarea value={form.descricao.clone()} oninput={on_descricao} />
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn" onclick={close_modal}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">
                            { if *edit_mode { "Save Changes" } else { "Publish Channel" } }
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
