use shared::pagination::Pagination;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub pagination: Pagination,
    pub on_change: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let pagination = props.pagination;
    let page = pagination.page;

    let previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(page.saturating_sub(1)))
    };
    let next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(page + 1))
    };

    html! {
        <div class="pager">
            <span class="pager-range">
                { format!(
                    "แสดง {}-{} จาก {} รายการ",
                    pagination.first_row(),
                    pagination.last_row(),
                    pagination.total
                ) }
            </span>
            <button
                class="pager-btn"
                disabled={props.disabled || !pagination.has_previous()}
                onclick={previous}
            >
                <i class="fa-solid fa-chevron-left"></i>{" Previous"}
            </button>
            <span class="pager-position">
                { format!("หน้า {} / {}", page, pagination.total_pages()) }
            </span>
            <button
                class="pager-btn"
                disabled={props.disabled || !pagination.has_next()}
                onclick={next}
            >
                {"Next "}<i class="fa-solid fa-chevron-right"></i>
            </button>
        </div>
    }
}
