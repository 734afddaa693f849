pub mod ui;

use contracts::domain::a002_subcategory::Subcategory;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/subcategories";
pub const PERMISSION: &str = "subcategories";

pub fn api() -> RestResource<Subcategory> {
    RestResource::new("/api/subcategories").update_with_post()
}

impl ResourceRow for Subcategory {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "image" => CellValue::Image(self.image.clone()),
            "name" => CellValue::text(&self.name),
            "category" => CellValue::opt_text(self.category_name.as_deref()),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
