use contracts::shared::EntityStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Status badge for an entity lifecycle state. Unknown codes render as a neutral dash.
#[component]
pub fn StatusBadge(status: Option<EntityStatus>) -> impl IntoView {
    match status {
        Some(status) => view! {
            <Badge variant=status.badge_variant()>{status.label()}</Badge>
        }
        .into_any(),
        None => view! { <Badge>"—"</Badge> }.into_any(),
    }
}
