use crate::shared::icons::icon;
use contracts::shared::list::Pagination;
use leptos::prelude::*;

/// Pagination footer: range label, previous/next, a window of page numbers and
/// the page-size selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Number of items after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    on_page_change: Callback<usize>,

    /// When absent the page-size selector is hidden
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    #[prop(optional, into)]
    page_size_options: Signal<Vec<usize>>,
) -> impl IntoView {
    let current_page = move || pagination.get().current_page;
    let total_pages = move || pagination.get().total_pages(total_count.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || pagination.get().range_label(total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page().saturating_sub(1))
                disabled=move || current_page() <= 1
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                pagination
                    .get()
                    .page_numbers(total_count.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current_page() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page() + 1)
                disabled=move || current_page() >= total_pages()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            {on_page_size_change.map(|on_size| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_size.run(size);
                        }
                    }
                    prop:value=move || pagination.get().items_per_page.to_string()
                >
                    {move || page_size_options.get().into_iter().map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || pagination.get().items_per_page == size
                            >
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}
