use leptos::prelude::*;

use crate::domain::a009_notification::{api, ROUTE};
use crate::domain::{route_id, static_options};
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("notification", ROUTE)
        .field(FieldDescriptor::text("title", "Title").required())
        .field(FieldDescriptor::textarea("body", "Message").required())
        .field(
            FieldDescriptor::select(
                "audience",
                "Audience",
                static_options(&[("all", "Everyone"), ("customers", "Customers"), ("partners", "Partners")]),
            )
            .required(),
        )
        .field(FieldDescriptor::file("image", "Image", "image/*"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn NotificationDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
