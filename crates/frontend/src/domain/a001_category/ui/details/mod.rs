use leptos::prelude::*;

use crate::domain::a001_category::{api, ROUTE};
use crate::domain::route_id;
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("category", ROUTE)
        .field(FieldDescriptor::text("name", "Name").required())
        .field(FieldDescriptor::file("image", "Image", "image/*"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn CategoryDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
