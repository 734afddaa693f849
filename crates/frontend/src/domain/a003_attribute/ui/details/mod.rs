use leptos::prelude::*;

use crate::domain::a003_attribute::{api, ROUTE};
use crate::domain::{category_options, route_id, subcategory_options};
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

/// The category only narrows the subcategory list; the backend stores the
/// subcategory alone.
pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("attribute", ROUTE)
        .field(FieldDescriptor::select("categoryId", "Category", category_options()).required())
        .field(
            FieldDescriptor::dependent("subcategoryId", "Subcategory", "categoryId", subcategory_options())
                .required(),
        )
        .field(FieldDescriptor::text("name", "Name").required())
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn AttributeDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
