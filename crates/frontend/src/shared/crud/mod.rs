//! Generic paginated list and create/edit form.
//!
//! The state machines (`list_state`, `form_state`) are plain Rust with no
//! browser dependency; `list_view` and `form_view` bind them to signals and
//! spawn the network calls. Entity pages only supply descriptors and a
//! [`api::ResourceApi`] implementation.
//!
//! Both views share the lifecycle
//! `Idle -> Loading -> {Ready, Error}`, `Ready -> Submitting -> {Idle, Ready}`.
//! Nothing retries on its own.

pub mod api;
pub mod descriptor;
pub mod form_state;
pub mod form_view;
pub mod list_state;
pub mod list_view;
pub mod payload;
pub mod preview;

pub use api::{ResourceApi, ResourceRow, RestResource};
pub use descriptor::{CellValue, Column, FieldDescriptor, FieldKind, FormDescriptor, ListDescriptor, OptionsSource};
pub use form_view::ResourceMutationForm;
pub use list_view::PaginatedResourceList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
    Submitting,
}
