use leptos::prelude::*;

use crate::domain::a007_b2b_customer::{api, ROUTE};
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("B2B Customers")
        .column(Column::new("company", "Company").width(220.0))
        .column(Column::new("contact", "Contact").width(160.0))
        .column(Column::new("email", "Email").width(200.0))
        .column(Column::new("phone", "Phone").width(130.0))
        .column(Column::new("status", "Status").width(100.0))
        .status_filter()
        .searchable("Company, contact or email...")
        .editable(ROUTE, "/b2b-customers/new")
}

#[component]
pub fn B2bCustomerList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
