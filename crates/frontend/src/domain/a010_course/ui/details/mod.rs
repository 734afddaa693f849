use leptos::prelude::*;

use crate::domain::a010_course::{api, ROUTE};
use crate::domain::route_id;
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("course", ROUTE)
        .field(FieldDescriptor::text("title", "Title").required())
        .field(FieldDescriptor::textarea("description", "Description"))
        .field(FieldDescriptor::file("video", "Video", "video/*").required())
        .field(FieldDescriptor::file("thumbnail", "Thumbnail", "image/*"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn CourseDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
