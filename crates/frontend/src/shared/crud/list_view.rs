//! Generic server-paginated table bound to a [`ListViewState`].

use contracts::shared::{EntityStatus, StatusFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use super::api::{ResourceApi, ResourceRow};
use super::descriptor::{CellValue, ListDescriptor};
use super::list_state::{ApplyOutcome, FetchTicket, ListViewState};
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::PaginationControls;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::ConfirmModal;
use crate::shared::toast::{use_toast, ToastService};

/// Runs one list fetch and feeds the result back into the state.
///
/// Responses for superseded tickets are dropped by the state; responses that
/// arrive after the list was unmounted find the signal disposed and are ignored.
fn spawn_fetch<A>(
    api: StoredValue<A, LocalStorage>,
    state: RwSignal<ListViewState<A::Row>>,
    toast: ToastService,
    title: &'static str,
    ticket: FetchTicket,
) where
    A: ResourceApi + Clone + 'static,
    A::Row: Send + Sync + 'static,
{
    let Some(client) = api.try_get_value() else {
        return;
    };
    spawn_local(async move {
        log::debug!("{}: fetching page {}", title, ticket.query.page);
        let result = client.list(&ticket.query).await;
        match state.try_update(|s| s.apply(&ticket, result)) {
            None => log::debug!("{}: list unmounted, response dropped", title),
            Some(ApplyOutcome::Applied) => {}
            Some(ApplyOutcome::Stale) => {
                log::debug!("{}: stale response for page {} dropped", title, ticket.query.page)
            }
            Some(ApplyOutcome::Failed(e)) => {
                toast.error(format!("Failed to load {}: {}", title.to_lowercase(), e));
            }
            Some(ApplyOutcome::OutOfRange(next)) => {
                log::debug!("{}: page {} out of range, reloading", title, ticket.query.page);
                spawn_fetch(api, state, toast, title, next);
            }
        }
    });
}

fn render_cell(value: CellValue) -> AnyView {
    match value {
        CellValue::Text(text) => view! {
            <TableCellLayout truncate=true>{text}</TableCellLayout>
        }
        .into_any(),
        CellValue::Status(status) => view! { <StatusBadge status=status /> }.into_any(),
        CellValue::Image(Some(url)) => view! {
            <img class="table-thumb" src=url alt="" loading="lazy" />
        }
        .into_any(),
        CellValue::Money(amount) => view! {
            <span class="table-money">{format_money(amount)}</span>
        }
        .into_any(),
        CellValue::Date(Some(raw)) => view! { <span>{format_datetime(&raw)}</span> }.into_any(),
        CellValue::Image(None) | CellValue::Date(None) | CellValue::Empty => {
            view! { <span class="table-empty">"—"</span> }.into_any()
        }
    }
}

#[component]
pub fn PaginatedResourceList<A>(api: A, descriptor: ListDescriptor) -> impl IntoView
where
    A: ResourceApi + Clone + 'static,
    A::Row: ResourceRow + Clone + Send + Sync + 'static,
{
    let toast = use_toast();
    let navigate = use_navigate();
    let api = StoredValue::new_local(api);
    let descriptor = StoredValue::new(descriptor);
    let title = descriptor.with_value(|d| d.title);

    let state = RwSignal::new(ListViewState::<A::Row>::new(
        descriptor.with_value(|d| d.default_page_size),
    ));

    let run = move |ticket: Option<FetchTicket>| {
        if let Some(ticket) = ticket {
            spawn_fetch(api, state, toast, title, ticket);
        }
    };

    // initial load
    run(state.try_update(|s| s.request()));

    let on_page_change = Callback::new(move |page: u32| {
        run(state.try_update(|s| s.set_page(page)).flatten());
    });
    let on_page_size_change = Callback::new(move |size: u32| {
        run(state.try_update(|s| s.set_page_size(size)).flatten());
    });
    let on_search = Callback::new(move |term: String| {
        run(state.try_update(|s| s.set_search(&term)).flatten());
    });
    let on_status_change = move |ev| {
        let status = StatusFilter::parse(&event_target_value(&ev));
        run(state.try_update(|s| s.set_status(status)).flatten());
    };
    let on_refresh = move |_| {
        run(state.try_update(|s| s.refresh()));
    };

    let on_confirm_delete = Callback::new(move |_| {
        let Some(id) = state.try_update(|s| s.confirm_delete()).flatten() else {
            return;
        };
        let Some(client) = api.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match client.delete(&id).await {
                Ok(()) => {
                    log::debug!("{}: deleted {}", title, id);
                    toast.success("Deleted successfully");
                    if let Some(ticket) = state.try_update(|s| s.delete_succeeded()) {
                        spawn_fetch(api, state, toast, title, ticket);
                    }
                }
                Err(e) => {
                    let _ = state.try_update(|s| s.delete_failed());
                    toast.error(format!("Delete failed: {}", e));
                }
            }
        });
    });
    let on_cancel_delete = Callback::new(move |_| state.update(|s| s.cancel_delete()));

    let create_route = descriptor.with_value(|d| d.create_route);
    let go_create = {
        let navigate = navigate.clone();
        move |_| {
            if let Some(route) = create_route {
                navigate(route, NavigateOptions::default());
            }
        }
    };

    let has_actions = descriptor.with_value(|d| d.edit_route.is_some() || d.deletable);
    let columns = descriptor.with_value(|d| d.columns.clone());
    let column_count = columns.len() + usize::from(has_actions);
    let row_columns = columns.clone();
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <div class="page__actions">
                    {descriptor.with_value(|d| d.search_placeholder).map(|placeholder| view! {
                        <SearchInput
                            value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                            on_change=on_search
                            placeholder=placeholder
                        />
                    })}
                    {descriptor.with_value(|d| d.status_filter).then(|| view! {
                        <label class="status-filter">
                            {icon("filter")}
                            <select
                                class="status-filter__select"
                                prop:value=move || state.with(|s| s.filter_status.as_str().to_string())
                                on:change=on_status_change
                            >
                                <option value="all">"All statuses"</option>
                                {EntityStatus::ALL.iter().map(|status| view! {
                                    <option value=status.code().to_string()>{status.label()}</option>
                                }).collect_view()}
                            </select>
                        </label>
                    })}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=on_refresh
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    {create_route.map(|_| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=go_create>
                            {icon("plus")}
                            " Add"
                        </Button>
                    })}
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper" class:table-wrapper--loading=move || loading.get()>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {columns.into_iter().map(|column| view! {
                                    <TableHeaderCell resizable=false min_width=column.min_width>
                                        {column.header}
                                    </TableHeaderCell>
                                }).collect_view()}
                                {has_actions.then(|| view! {
                                    <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                                })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows.clone())
                                key=|row| row.row_id().clone()
                                children=move |row| {
                                    let id = row.row_id().clone();
                                    let edit_link = descriptor.with_value(|d| d.edit_link(id.as_str()));
                                    let deletable = descriptor.with_value(|d| d.deletable);
                                    let navigate = navigate.clone();
                                    let cells = row_columns
                                        .iter()
                                        .map(|column| render_cell(row.cell(column.key)))
                                        .collect::<Vec<_>>();
                                    view! {
                                        <TableRow>
                                            {cells.into_iter().map(|cell| view! {
                                                <TableCell>{cell}</TableCell>
                                            }).collect_view()}
                                            {has_actions.then(move || view! {
                                                <TableCell>
                                                    <div class="table-actions">
                                                        {edit_link.map(|link| view! {
                                                            <button
                                                                class="button button--icon"
                                                                title="Edit"
                                                                on:click=move |_| navigate(&link, NavigateOptions::default())
                                                            >
                                                                {icon("edit")}
                                                            </button>
                                                        })}
                                                        {deletable.then(|| view! {
                                                            <button
                                                                class="button button--icon button--danger"
                                                                title="Delete"
                                                                disabled=move || state.with(|s| s.deleting)
                                                                on:click=move |_| state.update(|s| s.request_delete(id.clone()))
                                                            >
                                                                {icon("trash")}
                                                            </button>
                                                        })}
                                                    </div>
                                                </TableCell>
                                            })}
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || state.with(|s| s.rows.is_empty() && !s.is_loading())>
                                <TableRow>
                                    <TableCell attr:colspan=column_count.to_string()>
                                        <div class="table-placeholder">
                                            {move || state.with(|s| if s.phase == super::Phase::Error {
                                                "Could not load data"
                                            } else {
                                                "No records found"
                                            })}
                                        </div>
                                    </TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                    <Show when=move || loading.get()>
                        <div class="table-overlay">
                            <Spinner label="Loading..." />
                        </div>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page_index))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_items))
                    label=Signal::derive(move || state.with(|s| s.page_label()))
                    can_previous=Signal::derive(move || state.with(|s| s.can_previous()))
                    can_next=Signal::derive(move || state.with(|s| s.can_next()))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    disabled=loading
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    page_size_options=descriptor.with_value(|d| d.page_sizes.clone())
                />
            </div>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmModal
                    title="Delete record"
                    message="Are you sure you want to delete this record? This cannot be undone."
                    busy=Signal::derive(move || state.with(|s| s.deleting))
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
