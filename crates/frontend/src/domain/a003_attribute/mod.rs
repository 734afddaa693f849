pub mod ui;

use contracts::domain::a003_attribute::Attribute;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/attributes";
pub const PERMISSION: &str = "attributes";

pub fn api() -> RestResource<Attribute> {
    RestResource::new("/api/attributes")
}

impl ResourceRow for Attribute {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => CellValue::text(&self.name),
            "subcategory" => CellValue::opt_text(self.subcategory_name.as_deref()),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
