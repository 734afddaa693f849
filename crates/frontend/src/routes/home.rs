use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::menu_groups;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Landing page: shortcuts to every section the admin may open.
#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">
                    {move || session.state().with(|s| match s.display_name() {
                        Some(name) => format!("Welcome, {}", name),
                        None => "Welcome".to_string(),
                    })}
                </h1>
            </div>
            <div class="page__content home-grid">
                {menu_groups().into_iter().flat_map(|g| g.items.iter().copied()).map(|item| view! {
                    <Show when=move || session.can(item.permission)>
                        <A href=item.route attr:class="home-card">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </A>
                    </Show>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the dashboard"</A>
        </div>
    }
}
