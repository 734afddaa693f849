use leptos::prelude::*;

use crate::domain::a006_bank::{api, ROUTE};
use crate::domain::route_id;
use crate::shared::crud::{FieldDescriptor, FormDescriptor, ResourceMutationForm};

pub fn descriptor() -> FormDescriptor {
    FormDescriptor::new("bank", ROUTE)
        .field(FieldDescriptor::text("name", "Name").required())
        .field(FieldDescriptor::text("code", "Code").placeholder("e.g. HDFC"))
        .field(FieldDescriptor::status("status", "Status"))
}

#[component]
pub fn BankDetails() -> impl IntoView {
    view! { <ResourceMutationForm api=api() descriptor=descriptor() id=route_id() /> }
}
