pub mod ui;

use contracts::domain::a010_course::Course;
use contracts::shared::EntityId;

use crate::shared::crud::{CellValue, ResourceRow, RestResource};

pub const ROUTE: &str = "/courses";
pub const PERMISSION: &str = "courses";

/// Video uploads are multipart, which the course endpoint accepts on POST only.
pub fn api() -> RestResource<Course> {
    RestResource::new("/api/courses").update_with_post()
}

impl ResourceRow for Course {
    fn row_id(&self) -> &EntityId {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "thumbnail" => CellValue::Image(self.thumbnail.clone()),
            "title" => CellValue::text(&self.title),
            "video" => CellValue::Text(if self.video.is_some() { "Uploaded" } else { "Missing" }.to_string()),
            "status" => CellValue::Status(self.status),
            _ => CellValue::Empty,
        }
    }
}
