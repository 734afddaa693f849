use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::context::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One session for the whole app, restored from storage exactly once.
    provide_context(Session::restore());

    provide_context(ToastService::new());

    view! {
        <AppRoutes />
        <Toaster />
    }
}
