pub mod ui;

use contracts::domain::a009_notification::Notification;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/notifications";
pub const PERMISSION: &str = "notifications";

pub fn api() -> RestResource<Notification> {
    RestResource::new("/api/notifications")
}

impl ResourceRow for Notification {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "title" => CellValue::text(&self.title),
            "audience" => CellValue::opt_text(self.audience.as_deref()),
            "sent_at" => CellValue::Date(self.sent_at.map(|t| t.to_rfc3339())),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
