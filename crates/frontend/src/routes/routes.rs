use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::{
    a001_category, a002_subcategory, a003_attribute, a004_package, a005_banner, a006_bank,
    a007_b2b_customer, a008_payment, a009_notification, a010_course,
};
use crate::layout::Shell;
use crate::routes::home::{Home, NotFound};
use crate::system::auth::guard::{RequireAuth, RequirePermission};
use crate::system::pages::login::LoginPage;

use a001_category::ui::{details::CategoryDetails, list::CategoryList};
use a002_subcategory::ui::{details::SubcategoryDetails, list::SubcategoryList};
use a003_attribute::ui::{details::AttributeDetails, list::AttributeList};
use a004_package::ui::{details::PackageDetails, list::PackageList};
use a005_banner::ui::{details::BannerDetails, list::BannerList};
use a006_bank::ui::{details::BankDetails, list::BankList};
use a007_b2b_customer::ui::{details::B2bCustomerDetails, list::B2bCustomerList};
use a008_payment::ui::list::PaymentList;
use a009_notification::ui::{details::NotificationDetails, list::NotificationList};
use a010_course::ui::{details::CourseDetails, list::CourseList};

/// Wraps a page component in the permission guard for its section.
macro_rules! guarded {
    ($permission:expr, $page:ident) => {
        || view! { <RequirePermission permission=$permission><$page /></RequirePermission> }
    };
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=Home />

                    <Route path=path!("categories") view=guarded!(a001_category::PERMISSION, CategoryList) />
                    <Route path=path!("categories/new") view=guarded!(a001_category::PERMISSION, CategoryDetails) />
                    <Route path=path!("categories/:id") view=guarded!(a001_category::PERMISSION, CategoryDetails) />

                    <Route path=path!("subcategories") view=guarded!(a002_subcategory::PERMISSION, SubcategoryList) />
                    <Route path=path!("subcategories/new") view=guarded!(a002_subcategory::PERMISSION, SubcategoryDetails) />
                    <Route path=path!("subcategories/:id") view=guarded!(a002_subcategory::PERMISSION, SubcategoryDetails) />

                    <Route path=path!("attributes") view=guarded!(a003_attribute::PERMISSION, AttributeList) />
                    <Route path=path!("attributes/new") view=guarded!(a003_attribute::PERMISSION, AttributeDetails) />
                    <Route path=path!("attributes/:id") view=guarded!(a003_attribute::PERMISSION, AttributeDetails) />

                    <Route path=path!("packages") view=guarded!(a004_package::PERMISSION, PackageList) />
                    <Route path=path!("packages/new") view=guarded!(a004_package::PERMISSION, PackageDetails) />
                    <Route path=path!("packages/:id") view=guarded!(a004_package::PERMISSION, PackageDetails) />

                    <Route path=path!("banners") view=guarded!(a005_banner::PERMISSION, BannerList) />
                    <Route path=path!("banners/new") view=guarded!(a005_banner::PERMISSION, BannerDetails) />
                    <Route path=path!("banners/:id") view=guarded!(a005_banner::PERMISSION, BannerDetails) />

                    <Route path=path!("banks") view=guarded!(a006_bank::PERMISSION, BankList) />
                    <Route path=path!("banks/new") view=guarded!(a006_bank::PERMISSION, BankDetails) />
                    <Route path=path!("banks/:id") view=guarded!(a006_bank::PERMISSION, BankDetails) />

                    <Route path=path!("b2b-customers") view=guarded!(a007_b2b_customer::PERMISSION, B2bCustomerList) />
                    <Route path=path!("b2b-customers/new") view=guarded!(a007_b2b_customer::PERMISSION, B2bCustomerDetails) />
                    <Route path=path!("b2b-customers/:id") view=guarded!(a007_b2b_customer::PERMISSION, B2bCustomerDetails) />

                    <Route path=path!("payments") view=guarded!(a008_payment::PERMISSION, PaymentList) />

                    <Route path=path!("notifications") view=guarded!(a009_notification::PERMISSION, NotificationList) />
                    <Route path=path!("notifications/new") view=guarded!(a009_notification::PERMISSION, NotificationDetails) />
                    <Route path=path!("notifications/:id") view=guarded!(a009_notification::PERMISSION, NotificationDetails) />

                    <Route path=path!("courses") view=guarded!(a010_course::PERMISSION, CourseList) />
                    <Route path=path!("courses/new") view=guarded!(a010_course::PERMISSION, CourseDetails) />
                    <Route path=path!("courses/:id") view=guarded!(a010_course::PERMISSION, CourseDetails) />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
