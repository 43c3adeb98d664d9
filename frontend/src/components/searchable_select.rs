use web_sys::HtmlInputElement;
use yew::prelude::*;

/// One entry of the in-memory option list. Callers map their entities into
/// this shape and may compose labels (e.g. "title (channel)").
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Case-insensitive substring match on the label field.
pub fn filter_options(options: &[SelectOption], search: &str) -> Vec<SelectOption> {
    let needle = search.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SearchableSelectProps {
    pub options: Vec<SelectOption>,
    pub value: String,
    pub on_change: Callback<String>,
    pub placeholder: String,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SearchableSelect)]
pub fn searchable_select(props: &SearchableSelectProps) -> Html {
    let open = use_state(|| false);
    let search = use_state(String::new);

    let selected_label = props
        .options
        .iter()
        .find(|opt| opt.value == props.value)
        .map(|opt| opt.label.clone());

    let on_toggle = {
        let open = open.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                open.set(!*open);
            }
        })
    };

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            search.set(input_value);
        })
    };

    let on_backdrop_click = {
        let open = open.clone();
        let search = search.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            search.set(String::new());
        })
    };

    let filtered = filter_options(&props.options, &search);

    let input_value = if *open {
        (*search).clone()
    } else {
        selected_label.clone().unwrap_or_default()
    };

    html! {
        <div class="smart-select-container">
            {
                if *open {
                    // Transparent layer behind the dropdown so any outside
                    // click closes it.
                    html! { <div class="smart-select-backdrop" onclick={on_backdrop_click} /> }
                } else {
                    html! {}
                }
            }
            <div class="smart-select-input-wrapper" onclick={on_toggle}>
                <input
                    type="text"
                    placeholder={selected_label.unwrap_or_else(|| props.placeholder.clone())}
                    value={input_value}
                    oninput={on_search_input}
                    readonly={!*open}
                    disabled={props.disabled}
                />
                <span class="smart-select-chevron">
                    { if *open { "▲" } else { "▼" } }
                </span>
            </div>

            {
                if *open {
                    html! {
                        <div class="smart-select-dropdown">
                            {
                                if filtered.is_empty() {
                                    html! {
                                        <div class="smart-select-no-results">{"No results found"}</div>
                                    }
                                } else {
                                    filtered.iter().map(|opt| {
                                        let is_selected = opt.value == props.value;
                                        let class = if is_selected {
                                            "smart-select-item selected"
                                        } else {
                                            "smart-select-item"
                                        };
                                        let on_select = {
                                            let on_change = props.on_change.clone();
                                            let open = open.clone();
                                            let search = search.clone();
                                            let value = opt.value.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                on_change.emit(value.clone());
                                                open.set(false);
                                                search.set(String::new());
                                            })
                                        };
                                        html! {
                                            <div key={opt.value.clone()} class={class} onclick={on_select}>
                                                <span>{ &opt.label }</span>
                                                { if is_selected { html! { <span>{"✓"}</span> } } else { html! {} } }
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1, "Master League"),
            SelectOption::new(2, "Retro Zone"),
            SelectOption::new(3, "league nights"),
        ]
    }

    #[test]
    fn filters_by_case_insensitive_substring() {
        let hits = filter_options(&options(), "LEAGUE");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].value, "1");
        assert_eq!(hits[1].value, "3");
    }

    #[test]
    fn empty_search_keeps_every_option() {
        assert_eq!(filter_options(&options(), "").len(), 3);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_options(&options(), "speedrun").is_empty());
    }
}
