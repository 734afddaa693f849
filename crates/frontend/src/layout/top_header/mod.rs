//! Top bar: sidebar toggle, title, signed-in admin and logout.

use crate::layout::LayoutContext;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<LayoutContext>().expect("LayoutContext not found");
    let session = use_session();
    let toast = use_toast();
    let navigate = use_navigate();

    let logout = move |_| {
        session.sign_out();
        toast.info("Signed out");
        navigate("/login", NavigateOptions::default());
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("chevrons-left")
                    } else {
                        icon("chevrons-right")
                    }}
                </button>
                <span class="top-header__title">"Admin Console"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">
                        {move || session.state().with(|s| s.display_name().unwrap_or("Admin").to_string())}
                    </span>
                    <span class="top-header__user-role">
                        {move || session.state().with(|s| {
                            s.admin.as_ref().map(|a| format!("{:?}", a.role)).unwrap_or_default()
                        })}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
