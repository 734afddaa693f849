use leptos::prelude::*;

use crate::domain::a005_banner::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Banners")
        .column(Column::new("image", "Image").width(120.0))
        .column(Column::new("title", "Title").width(200.0))
        .column(Column::new("link", "Link").width(220.0))
        .column(Column::new("position", "Position").width(80.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .page_size(10)
        .editable(ROUTE, "/banners/new")
}

#[component]
pub fn BannerList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
