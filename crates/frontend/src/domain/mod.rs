//! Entity pages. Each module supplies a REST resource, a row renderer and
//! list/form descriptors; the generic crud views do the rest.

pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_attribute;
pub mod a004_package;
pub mod a005_banner;
pub mod a006_bank;
pub mod a007_b2b_customer;
pub mod a008_payment;
pub mod a009_notification;
pub mod a010_course;

use contracts::shared::{EntityId, SelectOption};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::crud::OptionsSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub route: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub permission: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: &'static [MenuItem],
}

const CATALOG: &[MenuItem] = &[
    MenuItem { route: a001_category::ROUTE, label: "Categories", icon: "categories", permission: a001_category::PERMISSION },
    MenuItem { route: a002_subcategory::ROUTE, label: "Subcategories", icon: "subcategories", permission: a002_subcategory::PERMISSION },
    MenuItem { route: a003_attribute::ROUTE, label: "Attributes", icon: "attributes", permission: a003_attribute::PERMISSION },
    MenuItem { route: a004_package::ROUTE, label: "Packages", icon: "packages", permission: a004_package::PERMISSION },
];

const CONTENT: &[MenuItem] = &[
    MenuItem { route: a005_banner::ROUTE, label: "Banners", icon: "banners", permission: a005_banner::PERMISSION },
    MenuItem { route: a009_notification::ROUTE, label: "Notifications", icon: "notifications", permission: a009_notification::PERMISSION },
    MenuItem { route: a010_course::ROUTE, label: "Courses", icon: "courses", permission: a010_course::PERMISSION },
];

const FINANCE: &[MenuItem] = &[
    MenuItem { route: a006_bank::ROUTE, label: "Banks", icon: "banks", permission: a006_bank::PERMISSION },
    MenuItem { route: a007_b2b_customer::ROUTE, label: "B2B Customers", icon: "customers", permission: a007_b2b_customer::PERMISSION },
    MenuItem { route: a008_payment::ROUTE, label: "Payments", icon: "payments", permission: a008_payment::PERMISSION },
];

pub fn menu_groups() -> [MenuGroup; 3] {
    [
        MenuGroup { id: "catalog", label: "Catalog", icon: "categories", items: CATALOG },
        MenuGroup { id: "content", label: "Content", icon: "banners", items: CONTENT },
        MenuGroup { id: "finance", label: "Finance", icon: "payments", items: FINANCE },
    ]
}

/// `:id` segment of the current route.
pub fn route_id() -> Option<EntityId> {
    use_params_map()
        .with_untracked(|p| p.get("id"))
        .filter(|id| !id.is_empty())
        .map(EntityId::from)
}

// Option endpoints shared by the catalog cascade
pub fn category_options() -> OptionsSource {
    OptionsSource::remote("/api/categories/options")
}

pub fn subcategory_options() -> OptionsSource {
    OptionsSource::keyed("/api/subcategories/options", "categoryId")
}

pub fn attribute_options() -> OptionsSource {
    OptionsSource::keyed("/api/attributes/options", "subcategoryId")
}

pub fn static_options(pairs: &[(&str, &str)]) -> OptionsSource {
    OptionsSource::Static(pairs.iter().map(|(v, l)| SelectOption::new(*v, *l)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_item_has_a_distinct_route() {
        let mut routes: Vec<&str> = menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.route))
            .collect();
        let total = routes.len();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), total);
        assert_eq!(total, 10);
    }

    #[test]
    fn cascade_sources_are_keyed_by_parent() {
        assert_eq!(
            subcategory_options().request_path("4").as_deref(),
            Some("/api/subcategories/options?categoryId=4")
        );
        assert_eq!(
            attribute_options().request_path("a b").as_deref(),
            Some("/api/attributes/options?subcategoryId=a%20b")
        );
    }
}
