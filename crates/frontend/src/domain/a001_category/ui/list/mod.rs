use leptos::prelude::*;

use crate::domain::a001_category::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Categories")
        .column(Column::new("image", "Image").width(80.0))
        .column(Column::new("name", "Name").width(220.0))
        .column(Column::new("status", "Status").width(100.0))
        .column(Column::new("created_at", "Created").width(140.0))
        .status_filter()
        .searchable("Search categories...")
        .editable(ROUTE, "/categories/new")
}

#[component]
pub fn CategoryList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
