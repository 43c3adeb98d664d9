use crate::api;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::models::{Company, Platform, PlatformDetail, PlatformPayload};
use crate::utils::{confirm, format_iso8601_date, format_number, input_setter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
struct PlatformForm {
    nro: String,
    nome: String,
    empresa_fund: String,
    empresa_respo: String,
    data_fund: String,
}

#[function_component(PlatformsPage)]
pub fn platforms_page() -> Html {
    let items = use_state(Vec::<Platform>::new);
    let total = use_state(|| 0i64);
    let loading = use_state(|| false);
    let selected = use_state(|| None::<PlatformDetail>);

    let modal_open = use_state(|| false);
    let edit_mode = use_state(|| false);
    let form = use_state(PlatformForm::default);

    let search_term = use_state(String::new);
    let page = use_state(|| 1usize);

    let companies = use_state(Vec::<Company>::new);
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
                let result = api::list_platforms(&q, page_no).await;
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
        let companies = companies.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(list) = api::list_companies().await {
                    companies.set(list);
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
        Callback::from(move |nro: i64| {
            let selected = selected.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(detail) = api::get_platform(nro).await {
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
            form.set(PlatformForm::default());
            modal_open.set(true);
        })
    };

    let open_edit = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |platform: Platform| {
            edit_mode.set(true);
            form.set(PlatformForm {
                nro: platform.nro.to_string(),
                nome: platform.nome.clone(),
                empresa_fund: platform.empresa_fund.to_string(),
                empresa_respo: platform.empresa_respo.to_string(),
                data_fund: platform.data_fund.split('T').next().unwrap_or("").to_string(),
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
                let payload = PlatformPayload {
                    nome: form_data.nome.clone(),
                    empresa_fund: form_data.empresa_fund.parse().unwrap_or(0),
                    empresa_respo: form_data.empresa_respo.parse().unwrap_or(0),
                    data_fund: form_data.data_fund.clone(),
                };
                let result = if edit {
                    api::update_platform(form_data.nro.parse().unwrap_or(0), &payload).await
                } else {
                    api::create_platform(&payload).await
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
            if !confirm("Remove this platform?") {
                return;
            }
            let selected = selected.clone();
            let fetch_items = fetch_items.clone();
            let q = (*search_term).clone();
            let page_no = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::delete_platform(detail.platform.nro).await;
                selected.set(None);
                fetch_items(q, page_no);
            });
        })
    };

    let company_options: Vec<SelectOption> = companies
        .iter()
        .map(|c| SelectOption::new(c.nro, c.nome.clone()))
        .collect();

    let on_nome = input_setter(&form, |f, v| f.nome = v);
    let on_data_fund = input_setter(&form, |f, v| f.data_fund = v);
    let on_founder = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(PlatformForm {
                empresa_fund: v,
                ..(*form).clone()
            })
        })
    };
    let on_operator = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(PlatformForm {
                empresa_respo: v,
                ..(*form).clone()
            })
        })
    };

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Platforms"}</h2>
                        <p class="subtitle">{"Streaming provider configuration"}</p>
                    </div>
                    <div class="search-bar">
                        <input
                            type="text"
                            placeholder="Filter by name..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <button class="btn btn-primary" onclick={open_create}>{"+ New Platform"}</button>
                </div>
            </section>

            <div class={if selected.is_some() { "split-view" } else { "full-view" }}>
                <div class="list-view">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Name"}</th>
                                <th>{"Founded"}</th>
                                <th>{"Users"}</th>
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
                                items.iter().map(|platform| {
                                    let on_row_click = {
                                        let fetch_detail = fetch_detail.clone();
                                        let nro = platform.nro;
                                        Callback::from(move |_: MouseEvent| fetch_detail.emit(nro))
                                    };
                                    let on_edit_click = {
                                        let open_edit = open_edit.clone();
                                        let platform = platform.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            open_edit.emit(platform.clone());
                                        })
                                    };
                                    html! {
                                        <tr key={platform.nro} class="clickable" onclick={on_row_click}>
                                            <td><span class="cell-title">{ &platform.nome }</span></td>
                                            <td>{ format_iso8601_date(&platform.data_fund) }</td>
                                            <td>
                                                <span class="cell-badge">
                                                    { format_number(platform.qtd_users.unwrap_or(0)) }
                                                </span>
                                            </td>
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
                                    <h3>{"Details"}</h3>
                                    <button class="btn" onclick={on_close_detail}>{"×"}</button>
                                </div>

                                <div class="form-group">
                                    <label>{"Natural Identifier"}</label>
                                    <div class="metric-value">{ format!("#{}", detail.platform.nro) }</div>
                                </div>
                                <div class="form-group">
                                    <label>{"Corporate Status"}</label>
                                    <div>{ format!("Founding company ID: {}", detail.platform.empresa_fund) }</div>
                                </div>

                                <h4 class="detail-section-title">{"Linked Channels"}</h4>
                                <div class="detail-list">
                                    {
                                        detail.channels.iter().map(|channel| {
                                            html! {
                                                <div key={channel.id} class="detail-list-row">
                                                    <div class="cell-title">{ &channel.nome }</div>
                                                    <div class="cell-sub">
                                                        { format!("{} • {} views", channel.tipo,
                                                            format_number(channel.qtd_visualizacoes.unwrap_or(0))) }
                                                    </div>
                                                </div>
                                            }
                                        }).collect::<Html>()
                                    }
                                </div>

                                <button class="btn btn-danger detail-delete" onclick={on_delete}>
                                    {"Remove Record"}
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
                title={if *edit_mode { "Edit Platform" } else { "New Platform" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Platform Name"}</label>
                        <input type="text" required={true} value={form.nome.clone()} oninput={on_nome} placeholder="E.g. Twitch" />
                    </div>
                    <div class="form-group">
                        <label>{"Founding Company"}</label>
                        <SearchableSelect
                            options={company_options.clone()}
                            value={form.empresa_fund.clone()}
                            on_change={on_founder}
                            placeholder="Search company..."
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Operating Company"}</label>
                        <SearchableSelect
                            options={company_options}
                            value={form.empresa_respo.clone()}
                            on_change={on_operator}
                            placeholder="Search company..."
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Founding Date"}</label>
                        <input type="date" required={true} value={form.data_fund.clone()} oninput={on_data_fund} />
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn" onclick={close_modal}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">
                            { if *edit_mode { "Save Changes" } else { "Finish Registration" } }
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
