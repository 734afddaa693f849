use leptos::prelude::*;

use crate::domain::a007_b2b_customer::{api, ROUTE};
use crate::domain::route_id;
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("B2B customer", ROUTE)
        .field(FieldDescriptor::text("companyName", "Company name").required())
        .field(FieldDescriptor::text("contactName", "Contact person"))
        .field(FieldDescriptor::email("email", "Email").required())
        .field(FieldDescriptor::text("phone", "Phone"))
        .field(FieldDescriptor::textarea("address", "Address"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn B2bCustomerDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
