//! Sidebar with collapsible menu groups, filtered by the admin's permissions.

use crate::domain::{menu_groups, MenuGroup};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    let render_group = move |group: MenuGroup| {
        let group_id = group.id;
        let items = group.items;
        let visible = move || {
            items
                .iter()
                .any(|item| session.can(item.permission))
        };
        let is_expanded = move || !collapsed_groups.with(|c| c.contains(&group_id));

        view! {
            <Show when=visible>
                <div class="app-sidebar__group">
                    <div
                        class="app-sidebar__item app-sidebar__item--group"
                        on:click=move |_| collapsed_groups.update(|c| {
                            if let Some(pos) = c.iter().position(|g| *g == group_id) {
                                c.remove(pos);
                            } else {
                                c.push(group_id);
                            }
                        })
                    >
                        {icon(group.icon)}
                        <span>{group.label}</span>
                        <span class="app-sidebar__chevron">
                            {move || if is_expanded() { icon("chevron-down") } else { icon("chevron-right") }}
                        </span>
                    </div>
                    <Show when=is_expanded>
                        {items.iter().map(|item| {
                            let permission = item.permission;
                            view! {
                                <Show when=move || session.can(permission)>
                                    <A href=item.route attr:class="app-sidebar__item app-sidebar__item--child">
                                        {icon(item.icon)}
                                        <span>{item.label}</span>
                                    </A>
                                </Show>
                            }
                        }).collect_view()}
                    </Show>
                </div>
            </Show>
        }
    };

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(render_group).collect_view()}
        </nav>
    }
}
