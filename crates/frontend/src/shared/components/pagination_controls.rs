use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page navigation with first/previous/next/last buttons and a page size selector
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<u32>,
    /// Total number of pages, at least 1
    #[prop(into)]
    total_pages: Signal<u32>,
    #[prop(into)]
    total_count: Signal<u64>,
    /// "Page X of Y", as derived by the list state
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    can_previous: Signal<bool>,
    #[prop(into)]
    can_next: Signal<bool>,
    #[prop(into)]
    page_size: Signal<u32>,
    /// Disables every control while a fetch is in flight
    #[prop(optional, into)]
    disabled: Signal<bool>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
    page_size_options: Vec<u32>,
) -> impl IntoView {
    let at_start = move || disabled.get() || !can_previous.get();
    let at_end = move || disabled.get() || !can_next.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if can_previous.get() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} ({} items)", label.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if can_next.get() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
