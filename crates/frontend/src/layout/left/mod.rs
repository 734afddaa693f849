pub mod sidebar;

pub use sidebar::Sidebar;

use crate::layout::LayoutContext;
use leptos::prelude::*;

/// Collapsible left column.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<LayoutContext>().expect("LayoutContext not found");

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
