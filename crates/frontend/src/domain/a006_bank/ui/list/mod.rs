use leptos::prelude::*;

use crate::domain::a006_bank::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Banks")
        .column(Column::new("name", "Name").width(240.0))
        .column(Column::new("code", "Code").width(140.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Search banks...")
        .page_size(50)
        .editable(ROUTE, "/banks/new")
}

#[component]
pub fn BankList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
