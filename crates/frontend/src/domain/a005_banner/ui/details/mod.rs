use leptos::prelude::*;

use crate::domain::a005_banner::{api, ROUTE};
use crate::domain::route_id;
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("banner", ROUTE)
        .field(FieldDescriptor::text("title", "Title").required())
        .field(FieldDescriptor::text("link", "Link").placeholder("https://"))
        .field(FieldDescriptor::number("position", "Position"))
        .field(FieldDescriptor::file("image", "Image", "image/*").required())
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn BannerDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
