use crate::api;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::models::{Donation, DonationPayload, User, Video};
use crate::utils::{confirm, format_money, input_setter, select_setter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct DonationForm {
    id_video: String,
    id_canal: String,
    id_usuario: String,
    seq_comentario: String,
    seq_pg: String,
    valor: String,
    status: String,
}

impl Default for DonationForm {
    fn default() -> Self {
        Self {
            id_video: String::new(),
            id_canal: String::new(),
            id_usuario: String::new(),
            seq_comentario: String::new(),
            seq_pg: String::new(),
            valor: String::new(),
            status: "recebido".to_string(),
        }
    }
}

/// The create form only picks a video; its owning channel comes from the
/// locally loaded video list.
fn resolve_channel_id(videos: &[Video], id_video: &str) -> Option<i64> {
    videos
        .iter()
        .find(|v| v.id_video.to_string() == id_video)
        .map(|v| v.id_canal)
}

fn status_pill_class(status: &str) -> &'static str {
    match status {
        "lido" => "pill pill-success",
        "recusado" => "pill pill-error",
        _ => "pill pill-pending",
    }
}

#[function_component(DonationsPage)]
pub fn donations_page() -> Html {
    let items = use_state(Vec::<Donation>::new);
    let total = use_state(|| 0i64);
    let loading = use_state(|| false);

    let modal_open = use_state(|| false);
    let edit_mode = use_state(|| false);
    let form = use_state(DonationForm::default);

    let search_term = use_state(String::new);
    let page = use_state(|| 1usize);

    let users = use_state(Vec::<User>::new);
    let videos = use_state(Vec::<Video>::new);
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
                let result = api::list_donations(&q, page_no).await;
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
        let videos = videos.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Ok(data) = api::list_users("", 1).await {
                    users.set(data.items);
                }
                if let Ok(data) = api::list_videos("", "", 1).await {
                    videos.set(data.items);
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

    let open_create = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            edit_mode.set(false);
            form.set(DonationForm::default());
            modal_open.set(true);
        })
    };

    let open_edit = {
        let form = form.clone();
        let edit_mode = edit_mode.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |donation: Donation| {
            edit_mode.set(true);
            form.set(DonationForm {
                id_video: donation.id_video.to_string(),
                id_canal: donation.id_canal.to_string(),
                id_usuario: donation.id_usuario.to_string(),
                seq_comentario: donation.seq_comentario.to_string(),
                seq_pg: donation.seq_pg.to_string(),
                valor: donation.valor.to_string(),
                status: donation.status.clone(),
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
        let videos = videos.clone();
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

            let id_canal = if edit {
                form_data.id_canal.parse().unwrap_or(0)
            } else {
                // Without a locally known video there is nothing to submit.
                match resolve_channel_id(videos.as_slice(), &form_data.id_video) {
                    Some(id) => id,
                    None => return,
                }
            };

            wasm_bindgen_futures::spawn_local(async move {
                let payload = DonationPayload {
                    id_video: form_data.id_video.parse().unwrap_or(0),
                    id_canal,
                    id_usuario: form_data.id_usuario.parse().unwrap_or(0),
                    seq_comentario: form_data.seq_comentario.parse().ok(),
                    seq_pg: form_data.seq_pg.parse().ok(),
                    valor: form_data.valor.parse().unwrap_or(0.0),
                    status: form_data.status.clone(),
                };
                let result = if edit {
                    api::update_donation(
                        payload.id_video,
                        id_canal,
                        payload.id_usuario,
                        form_data.seq_comentario.parse().unwrap_or(0),
                        form_data.seq_pg.parse().unwrap_or(0),
                        &payload,
                    )
                    .await
                } else {
                    api::create_donation(&payload).await
                };
                if result.is_ok() {
                    modal_open.set(false);
                    fetch_items(q, page_no);
                }
            });
        })
    };

    let on_delete = {
        let fetch_items = fetch_items.clone();
        let search_term = search_term.clone();
        let page = page.clone();
        Callback::from(move |donation: Donation| {
            if !confirm("Reverse this donation?") {
                return;
            }
            let fetch_items = fetch_items.clone();
            let q = (*search_term).clone();
            let page_no = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let _ = api::delete_donation(&donation).await;
                fetch_items(q, page_no);
            });
        })
    };

    let user_options: Vec<SelectOption> = users
        .iter()
        .map(|u| SelectOption::new(u.id, u.nick.clone()))
        .collect();
    let video_options: Vec<SelectOption> = videos
        .iter()
        .map(|v| {
            SelectOption::new(
                v.id_video,
                format!("{} ({})", v.titulo, v.canal_nome.as_deref().unwrap_or("-")),
            )
        })
        .collect();

    let on_valor = input_setter(&form, |f, v| f.valor = v);
    let on_status = select_setter(&form, |f, v| f.status = v);
    let on_video = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(DonationForm {
                id_video: v,
                ..(*form).clone()
            })
        })
    };
    let on_user = {
        let form = form.clone();
        Callback::from(move |v: String| {
            form.set(DonationForm {
                id_usuario: v,
                ..(*form).clone()
            })
        })
    };

    html! {
        <div class="page">
            <section class="hero-section">
                <div class="action-bar">
                    <div>
                        <h2>{"Financial Flow"}</h2>
                        <p class="subtitle">{"Live contribution and donation management"}</p>
                    </div>
                    <div class="search-bar">
                        <input
                            type="text"
                            placeholder="Search by donor or video..."
                            value={(*search_term).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <button class="btn btn-primary" onclick={open_create}>{"+ New Donation"}</button>
                </div>
            </section>

            <div class="list-view">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Target Video"}</th>
                            <th>{"Donor"}</th>
                            <th>{"Amount (USD)"}</th>
                            <th>{"Status"}</th>
                            <th class="actions-col">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if *loading && items.is_empty() {
                                html! { <tr><td colspan="5" class="loading-cell">{"Loading..."}</td></tr> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            items.iter().enumerate().map(|(idx, donation)| {
                                let on_edit_click = {
                                    let open_edit = open_edit.clone();
                                    let donation = donation.clone();
                                    Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        open_edit.emit(donation.clone());
                                    })
                                };
                                let on_delete_click = {
                                    let on_delete = on_delete.clone();
                                    let donation = donation.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(donation.clone()))
                                };
                                html! {
                                    <tr key={idx}>
                                        <td><span class="cell-title">{ donation.video_titulo.as_deref().unwrap_or("-") }</span></td>
                                        <td>{ donation.nick.as_deref().unwrap_or("-") }</td>
                                        <td class="value-cell">{ format_money(donation.valor) }</td>
                                        <td>
                                            <span class={status_pill_class(&donation.status)}>
                                                { &donation.status }
                                            </span>
                                        </td>
                                        <td class="actions-col">
                                            <button class="btn btn-outline" onclick={on_edit_click}>{"EDIT"}</button>
                                            <button class="btn btn-danger" onclick={on_delete_click}>{"✕"}</button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
                <Pagination total={*total} page={*page} on_page_change={on_page_change} />
            </div>

            <Modal
                open={*modal_open}
                title={if *edit_mode { "Edit Entry" } else { "Record Donation" }}
                on_close={close_modal.clone()}
            >
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Associated Content"}</label>
                        <SearchableSelect
                            options={video_options}
                            value={form.id_video.clone()}
                            on_change={on_video}
                            placeholder="Search video by title or channel..."
                            disabled={*edit_mode}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Contributing User"}</label>
                        <SearchableSelect
                            options={user_options}
                            value={form.id_usuario.clone()}
                            on_change={on_user}
                            placeholder="Select donor..."
                            disabled={*edit_mode}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Donation Amount (USD)"}</label>
                        <input
                            type="number"
                            step="0.01"
                            required={true}
                            value={form.valor.clone()}
                            oninput={on_valor}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Initial Status"}</label>
                        <select required={true} onchange={on_status}>
                            <option value="recebido" selected={form.status == "recebido"}>{"Awaiting Validation (Received)"}</option>
                            <option value="lido" selected={form.status == "lido"}>{"Processed and Displayed (Read)"}</option>
                            <option value="recusado" selected={form.status == "recusado"}>{"Transaction Declined"}</option>
                        </select>
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn" onclick={close_modal}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">
                            { if *edit_mode { "Save Changes" } else { "Register Contribution" } }
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id_video: i64, id_canal: i64) -> Video {
        Video {
            id_video,
            id_canal,
            titulo: format!("video {id_video}"),
            datah: "2024-01-01T00:00:00".to_string(),
            tema: None,
            duracao: 10,
            visu_simul: None,
            visu_total: None,
            canal_nome: None,
        }
    }

    #[test]
    fn resolves_the_owning_channel_from_the_local_list() {
        let videos = vec![video(1, 10), video(2, 20)];
        assert_eq!(resolve_channel_id(&videos, "2"), Some(20));
    }

    #[test]
    fn unknown_video_resolves_to_none() {
        let videos = vec![video(1, 10)];
        assert_eq!(resolve_channel_id(&videos, "99"), None);
        assert_eq!(resolve_channel_id(&[], "1"), None);
    }

    #[test]
    fn status_maps_to_a_pill_class() {
        assert_eq!(status_pill_class("lido"), "pill pill-success");
        assert_eq!(status_pill_class("recusado"), "pill pill-error");
        assert_eq!(status_pill_class("recebido"), "pill pill-pending");
        assert_eq!(status_pill_class("???"), "pill pill-pending");
    }
}
