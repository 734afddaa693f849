use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders children only for a signed-in admin, otherwise redirects to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only when the admin holds `permission`
#[component]
pub fn RequirePermission(
    permission: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.can(permission)
            fallback=|| view! {
                <div class="access-denied">
                    <h2>"Access denied"</h2>
                    <p>"You do not have permission to view this page."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
