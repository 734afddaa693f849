pub mod ui;

use contracts::domain::a004_package::Package;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/packages";
pub const PERMISSION: &str = "packages";

pub fn api() -> RestResource<Package> {
    RestResource::new("/api/packages").update_with_post()
}

impl ResourceRow for Package {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "image" => CellValue::Image(self.image.clone()),
            "name" => CellValue::text(&self.name),
            "category" => CellValue::opt_text(self.category_name.as_deref()),
            "subcategory" => CellValue::opt_text(self.subcategory_name.as_deref()),
            "price" => CellValue::Money(self.price),
            "duration" => match self.duration_minutes {
                Some(m) => CellValue::Text(format!("{} min", m)),
                None => CellValue::Empty,
            },
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_fall_back_to_empty() {
        let package: Package = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Deep clean",
            "categoryId": 1,
            "price": 1499.0
        }))
        .unwrap();
        assert_eq!(package.cell("price"), CellValue::Money(1499.0));
        assert_eq!(package.cell("duration"), CellValue::Empty);
        assert_eq!(package.cell("category"), CellValue::Empty);
        assert_eq!(package.cell("unknown"), CellValue::Empty);
    }
}
