use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub total: i64,
    pub page: usize,
    #[prop_or(10)]
    pub limit: usize,
    pub on_page_change: Callback<usize>,
}

pub fn page_count(total: i64, limit: usize) -> usize {
    if total <= 0 || limit == 0 {
        return 0;
    }
    (total as usize).div_ceil(limit)
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = page_count(props.total, props.limit);
    if total_pages <= 1 {
        return html! {};
    }

    let total = props.total as usize;
    let first = ((props.page - 1) * props.limit + 1).min(total);
    let last = (props.page * props.limit).min(total);

    let go_to = |target: usize| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_| on_page_change.emit(target))
    };

    html! {
        <div class="pagination">
            <div class="pagination-info">
                { format!("Showing {first} - {last} of {} records", props.total) }
            </div>
            <div class="pagination-controls">
                <button
                    class="page-btn"
                    disabled={props.page == 1}
                    onclick={go_to(props.page.saturating_sub(1))}
                >
                    {"‹"}
                </button>
                {
                    (1..=total_pages).map(|p| {
                        let class = if p == props.page { "page-btn active" } else { "page-btn" };
                        html! {
                            <button key={p} class={class} onclick={go_to(p)}>
                                { p }
                            </button>
                        }
                    }).collect::<Html>()
                }
                <button
                    class="page-btn"
                    disabled={props.page == total_pages}
                    onclick={go_to(props.page + 1)}
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_the_ceiling_of_total_over_limit() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
    }

    #[test]
    fn page_count_matches_ceiling_for_all_small_inputs() {
        for total in 0..200i64 {
            for limit in 1..15usize {
                let expected = ((total as f64) / (limit as f64)).ceil() as usize;
                assert_eq!(page_count(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn degenerate_inputs_yield_no_pages() {
        assert_eq!(page_count(-5, 10), 0);
        assert_eq!(page_count(50, 0), 0);
    }
}
