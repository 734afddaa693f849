pub mod ui;

use contracts::domain::a005_banner::Banner;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/banners";
pub const PERMISSION: &str = "banners";

pub fn api() -> RestResource<Banner> {
    RestResource::new("/api/banners").update_with_post()
}

impl ResourceRow for Banner {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "image" => CellValue::Image(self.image.clone()),
            "title" => CellValue::text(&self.title),
            "link" => CellValue::opt_text(self.link.as_deref()),
            "position" => self
                .position
                .map(|p| CellValue::Text(p.to_string()))
                .unwrap_or(CellValue::Empty),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
