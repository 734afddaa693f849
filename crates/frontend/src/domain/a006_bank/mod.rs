pub mod ui;

use contracts::domain::a006_bank::Bank;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/banks";
pub const PERMISSION: &str = "banks";

pub fn api() -> RestResource<Bank> {
    RestResource::new("/api/banks")
}

impl ResourceRow for Bank {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => CellValue::text(&self.name),
            "code" => CellValue::opt_text(self.code.as_deref()),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
