use leptos::prelude::*;

use crate::domain::a009_notification::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Notifications")
        .column(Column::new("title", "Title").width(260.0))
        .column(Column::new("audience", "Audience").width(120.0))
        .column(Column::new("sent_at", "Sent").width(150.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Search notifications...")
        .editable(ROUTE, "/notifications/new")
}

#[component]
pub fn NotificationList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
