use leptos::prelude::*;

use crate::domain::a003_attribute::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Attributes")
        .column(Column::new("name", "Name").width(220.0))
        .column(Column::new("subcategory", "Subcategory").width(200.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Search attributes...")
        .editable(ROUTE, "/attributes/new")
}

#[component]
pub fn AttributeList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
