use leptos::prelude::*;

use crate::domain::a008_payment::api;
use crate::shared::crud::{Column, ListDescriptor, PaginatedResourceList};

/// Read-only: no add, edit or delete.
pub fn descriptor() -> ListDescriptor {
    ListDescriptor::new("Payments")
        .column(Column::new("reference", "Reference").width(160.0))
        .column(Column::new("customer", "Customer").width(180.0))
        .column(Column::new("amount", "Amount").width(120.0))
        .column(Column::new("method", "Method").width(110.0))
        .column(Column::new("state", "State").width(110.0))
        .column(Column::new("paid_at", "Paid at").width(150.0))
        .searchable("Reference or customer...")
        .page_size(50)
}

#[component]
pub fn PaymentList() -> impl IntoView {
    view! { <PaginatedResourceList api=api() descriptor=descriptor() /> }
}
