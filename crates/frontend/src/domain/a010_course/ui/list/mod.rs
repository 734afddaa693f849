use leptos::prelude::*;

use crate::domain::a010_course::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Courses")
        .column(Column::new("thumbnail", "Thumbnail").width(100.0))
        .column(Column::new("title", "Title").width(260.0))
        .column(Column::new("video", "Video").width(100.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Search courses...")
        .page_size(10)
        .editable(ROUTE, "/courses/new")
}

#[component]
pub fn CourseList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
