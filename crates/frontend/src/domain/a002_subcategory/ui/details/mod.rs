use leptos::prelude::*;

use crate::domain::a002_subcategory::{api, ROUTE};
use crate::domain::{category_options, route_id};
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("subcategory", ROUTE)
        .field(FieldDescriptor::select("categoryId", "Category", category_options()).required())
        .field(FieldDescriptor::text("name", "Name").required())
        .field(FieldDescriptor::file("image", "Image", "image/*"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn SubcategoryDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
