pub mod ui;

use contracts::domain::a001_category::Category;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/categories";
pub const PERMISSION: &str = "categories";

pub fn api() -> RestResource<Category> {
    RestResource::new("/api/categories").update_with_post()
}

impl ResourceRow for Category {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "image" => CellValue::Image(self.image.clone()),
            "name" => CellValue::text(&self.name),
            "status" => CellValue::Status(self.status),
            "created_at" => CellValue::Date(self.created_at.clone()),
            _ => CellValue::Empty,
        }
    }
}
