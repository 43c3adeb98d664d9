use crate::api;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::models::{Country, User, UserDetail, UserPayload};
use crate::utils::{confirm, format_iso8601_date, input_setter, textarea_setter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Default)]
struct UserForm {
    id: String,
    nick: String,
    email: String,
    data_nasc: String,
    telefone: String,
    end_postal: String,
    id_pais: String,
}

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let items = use_state(Vec::<User>::new);
    let total = use_state(|| 0i64);
    let loading = use_state(|| false);
    let selected = use_state(|| None::<UserDetail>);

    let modal_open = use_state(|| false);
    let edit_mode = use_state(|| false);
    let form = use_state(UserForm::default);

    let search_term = use_state(String::new);
    let page = use_state(|| 1usize);

    let countries = use_state(Vec::<Country>::new);
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
                let result = api::list_users(&q, page_no).await;
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
        let countries = countries.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(list) = api::list_countries().await {
                    countries.set(list);
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
                if let Ok(detail) = api::get_user(id).await {
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
            form.set(UserForm::default());
            modal_open.set(true);
        })
    };

    let open_edit = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |user: User| {
            edit_mode.set(true);
            form.set(UserForm {
                id: user.id.to_string(),
                nick: user.nick.clone(),
                email: user.email.clone(),
                data_nasc: user.data_nasc.split('T').next().unwrap_or("").to_string(),
                telefone: user.telefone.clone(),
                end_postal: user.end_postal.clone(),
                id_pais: user.id_pais.to_string(),
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
                let payload = UserPayload {
                    nick: form_data.nick.clone(),
                    email: form_data.email.clone(),
                    data_nasc: form_data.data_nasc.clone(),
                    telefone: form_data.telefone.clone(),
                    end_postal: form_data.end_postal.clone(),
                    id_pais: form_data.id_pais.parse().unwrap_or(0),
                };
                let result = if edit {
                    api::update_user(form_data.id.parse().unwrap_or(0), &payload).await
                } else {
                    api::create_user(&payload).await
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
            if !confirm("Delete this account permanently?") {
                return;
            }
            let selected = selected.clone();
            let fetch_items = fetch_items.clone();
            let q = (*search_term).clone();
            let page_no = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::delete_user(detail.user.id).await;
                selected.set(None);
                fetch_items(q, page_no);
            });
        })
    };

    let country_options: Vec<SelectOption> = countries
        .iter()
        .map(|c| SelectOption::new(c.id, c.nome.clone()))
        .collect();

    let on_nick = input_setter(&form, |f, v| f.nick = v);
    let on_email = input_setter(&form, |f, v| f.email = v);
    let on_telefone = input_setter(&form, |f, v| f.telefone = v);
    let on_data_nasc = input_setter(&form, |f, v| f.data_nasc = v);
    let on_end_postal = textarea_setter(&form, |f, v| f.end_postal = v);
    let on_country = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(UserForm {
                id_pais: v,
                ..(*form).clone()
            })
        })
    };

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Users"}</h2>
                        <p class="subtitle">{"Global profile and access management"}</p>
                    </div>
                    <div class="search-bar">
                        <input
                            type="text"
                            placeholder="Search by nick or email..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <button class="btn btn-primary" onclick={open_create}>{"+ New User"}</button>
                </div>
            </section>

            <div class={if selected.is_some() { "split-view" } else { "full-view" }}>
                <div class="list-view">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"User"}</th>
                                <th>{"Phone"}</th>
                                <th class="actions-col">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                if *loading && items.is_empty() {
                                    html! { <tr><td colspan="3" class="loading-cell">{"Loading..."}</td></tr> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                items.iter().map(|user| {
                                    let on_row_click = {
                                        let fetch_detail = fetch_detail.clone();
                                        let id = user.id;
                                        Callback::from(move |_: MouseEvent| fetch_detail.emit(id))
                                    };
                                    let on_edit_click = {
                                        let open_edit = open_edit.clone();
                                        let user = user.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            open_edit.emit(user.clone());
                                        })
                                    };
                                    html! {
                                        <tr key={user.id} class="clickable" onclick={on_row_click}>
                                            <td>
                                                <div class="cell-stack">
                                                    <span class="cell-title">{ &user.nick }</span>
                                                    <span class="cell-sub">{ &user.email }</span>
                                                </div>
                                            </td>
                                            <td>{ &user.telefone }</td>
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
                                    <div class="detail-identity">
                                        <div class="avatar">
                                            { detail.user.nick.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default() }
                                        </div>
                                        <div>
                                            <h3>{ &detail.user.nick }</h3>
                                            <span class="cell-sub">{ format!("Member ID #{}", detail.user.id) }</span>
                                        </div>
                                    </div>
                                    <button class="btn" onclick={on_close_detail}>{"×"}</button>
                                </div>

                                <div class="detail-facts">
                                    <div>{ format!("✉ {}", detail.user.email) }</div>
                                    <div>{ format!("☎ {}", detail.user.telefone) }</div>
                                    <div>{ format!("🗓 {}", format_iso8601_date(&detail.user.data_nasc)) }</div>
                                </div>

                                <h4 class="detail-section-title">{"Active Engagements"}</h4>
                                <div class="detail-metrics">
                                    <div class="metric-card">
                                        <div class="metric-label">{"CHANNELS"}</div>
                                        <div class="metric-value">{ detail.channels.len() }</div>
                                    </div>
                                    <div class="metric-card">
                                        <div class="metric-label">{"DONATIONS MADE"}</div>
                                        <div class="metric-value">{ detail.donations.len() }</div>
                                    </div>
                                </div>

                                <button class="btn btn-danger detail-delete" onclick={on_delete}>
                                    {"Delete Account Permanently"}
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
                title={if *edit_mode { "Edit User" } else { "New User" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Nickname"}</label>
                        <input type="text" required={true} value={form.nick.clone()} oninput={on_nick} placeholder="E.g. streamer123" />
                    </div>
                    <div class="form-group">
                        <label>{"Email Address"}</label>
                        <input type="email" required={true} value={form.email.clone()} oninput={on_email} placeholder="email@example.com" />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Phone"}</label>
                            <input type="text" required={true} value={form.telefone.clone()} oninput={on_telefone} />
                        </div>
                        <div class="form-group">
                            <label>{"Date of Birth"}</label>
                            <input type="date" required={true} value={form.data_nasc.clone()} oninput={on_data_nasc} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{"Postal Address"}</label>
                        <textarea required={true} value={form.end_postal.clone()} oninput={on_end_postal} />
                    </div>
                    <div class="form-group">
                        <label>{"Nationality"}</label>
                        <SearchableSelect
                            options={country_options}
                            value={form.id_pais.clone()}
                            on_change={on_country}
                            placeholder="Select country..."
                        />
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn" onclick={close_modal}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">
                            { if *edit_mode { "Save Changes" } else { "Confirm Registration" } }
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
