pub mod api_message;
pub mod entity_id;
pub mod options;
pub mod pagination;
pub mod status;

pub use api_message::ApiMessage;
pub use entity_id::EntityId;
pub use options::SelectOption;
pub use pagination::{ListEnvelope, ListQuery, PageMeta, Paginated, StatusFilter};
pub use status::EntityStatus;
