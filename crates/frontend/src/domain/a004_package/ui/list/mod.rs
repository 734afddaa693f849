use leptos::prelude::*;

use crate::domain::a004_package::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Packages")
        .column(Column::new("image", "Image").width(80.0))
        .column(Column::new("name", "Name").width(200.0))
        .column(Column::new("category", "Category").width(150.0))
        .column(Column::new("subcategory", "Subcategory").width(150.0))
        .column(Column::new("price", "Price").width(110.0))
        .column(Column::new("duration", "Duration").width(100.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Search packages...")
        .page_size(25)
        .editable(ROUTE, "/packages/new")
}

#[component]
pub fn PackageList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
