use leptos::prelude::*;

use crate::domain::a004_package::{api, ROUTE};
use crate::domain::{attribute_options, category_options, route_id, subcategory_options};
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

/// Category -> subcategory -> attribute cascade plus pricing and an image.
pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("package", ROUTE)
        .field(FieldDescriptor::text("name", "Name").required())
        .field(FieldDescriptor::select("categoryId", "Category", category_options()).required())
        .field(
            FieldDescriptor::dependent("subcategoryId", "Subcategory", "categoryId", subcategory_options())
                .required(),
        )
        .field(FieldDescriptor::dependent(
            "attributeId",
            "Attribute",
            "subcategoryId",
            attribute_options(),
        ))
        .field(FieldDescriptor::number("price", "Price").required().placeholder("0.00"))
        .field(FieldDescriptor::number("durationMinutes", "Duration (minutes)"))
        .field(FieldDescriptor::textarea("description", "Description"))
        .field(FieldDescriptor::file("image", "Image", "image/*"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn PackageDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_is_chained() {
        let form = descriptor();
        let children: Vec<_> = form.children_of("categoryId").map(|f| f.name).collect();
        assert_eq!(children, vec!["subcategoryId"]);
        let grandchildren: Vec<_> = form.children_of("subcategoryId").map(|f| f.name).collect();
        assert_eq!(grandchildren, vec!["attributeId"]);
    }
}
