use leptos::prelude::*;

use crate::domain::a002_subcategory::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Subcategories")
        .column(Column::new("image", "Image").width(80.0))
        .column(Column::new("name", "Name").width(200.0))
        .column(Column::new("category", "Category").width(180.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Search subcategories...")
        .editable(ROUTE, "/subcategories/new")
}

#[component]
pub fn SubcategoryList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
