pub mod ui;

use contracts::domain::a007_b2b_customer::B2bCustomer;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/b2b-customers";
pub const PERMISSION: &str = "b2b_customers";

pub fn api() -> RestResource<B2bCustomer> {
    RestResource::new("/api/b2b-customers")
}

impl ResourceRow for B2bCustomer {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "company" => CellValue::text(&self.company_name),
            "contact" => CellValue::opt_text(self.contact_name.as_deref()),
            "email" => CellValue::opt_text(self.email.as_deref()),
            "phone" => CellValue::opt_text(self.phone.as_deref()),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
