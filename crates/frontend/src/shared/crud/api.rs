use async_trait::async_trait;
use contracts::shared::{EntityId, ListEnvelope, ListQuery, Paginated, SelectOption};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::marker::PhantomData;
use web_sys::File;

use super::descriptor::{CellValue, OptionsSource};
use super::payload::Payload;
use crate::shared::api_utils::with_query;
use crate::shared::http::{self, ApiError, Verb};

/// A list row the generic table can render.
pub trait ResourceRow {
    fn row_id(&self) -> &EntityId;
    fn cell(&self, key: &str) -> CellValue;
}

/// Backend operations behind one entity's list and form.
#[async_trait(?Send)]
pub trait ResourceApi {
    type Row;

    async fn list(&self, query: &ListQuery) -> Result<Paginated<Self::Row>, ApiError>;
    async fn delete(&self, id: &EntityId) -> Result<(), ApiError>;
    async fn fetch_one(&self, id: &EntityId) -> Result<Value, ApiError>;
    async fn create(&self, payload: Payload<File>) -> Result<(), ApiError>;
    async fn update(&self, id: &EntityId, payload: Payload<File>) -> Result<(), ApiError>;

    /// Choices for a select field, `parent_value` is empty for top-level lists.
    async fn options(
        &self,
        source: &OptionsSource,
        parent_value: &str,
    ) -> Result<Vec<SelectOption>, ApiError> {
        load_options(source, parent_value).await
    }
}

/// Conventional REST resource: `GET base?page..`, `GET/PUT/DELETE base/{id}`,
/// `POST base`.
pub struct RestResource<T> {
    base: &'static str,
    update_verb: Verb,
    _row: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RestResource<T> {}

impl<T> RestResource<T> {
    pub const fn new(base: &'static str) -> Self {
        Self {
            base,
            update_verb: Verb::Put,
            _row: PhantomData,
        }
    }

    /// For endpoints that take updates as `POST base/{id}` (multipart
    /// bodies are not accepted on PUT by some of them).
    pub fn update_with_post(mut self) -> Self {
        self.update_verb = Verb::Post;
        self
    }

    pub fn item_path(&self, id: &EntityId) -> String {
        format!("{}/{}", self.base, urlencoding::encode(id.as_str()))
    }

    pub fn list_path(&self, query: &ListQuery) -> String {
        with_query(self.base, &query.to_query_string())
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> ResourceApi for RestResource<T> {
    type Row = T;

    async fn list(&self, query: &ListQuery) -> Result<Paginated<T>, ApiError> {
        let envelope: ListEnvelope<T> = http::get_json(&self.list_path(query)).await?;
        Ok(envelope.into_paginated())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiError> {
        http::delete(&self.item_path(id)).await
    }

    async fn fetch_one(&self, id: &EntityId) -> Result<Value, ApiError> {
        http::get_json(&self.item_path(id)).await
    }

    async fn create(&self, payload: Payload<File>) -> Result<(), ApiError> {
        http::send_payload(Verb::Post, self.base, payload).await
    }

    async fn update(&self, id: &EntityId, payload: Payload<File>) -> Result<(), ApiError> {
        http::send_payload(self.update_verb, &self.item_path(id), payload).await
    }
}

/// Option endpoints answer with a bare array or a `{ data: [...] }` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsResponse {
    Bare(Vec<SelectOption>),
    Wrapped { data: Vec<SelectOption> },
}

impl OptionsResponse {
    fn into_vec(self) -> Vec<SelectOption> {
        match self {
            Self::Bare(list) | Self::Wrapped { data: list } => list,
        }
    }
}

pub async fn load_options(
    source: &OptionsSource,
    parent_value: &str,
) -> Result<Vec<SelectOption>, ApiError> {
    match source {
        OptionsSource::Static(list) => Ok(list.clone()),
        remote => {
            let path = remote
                .request_path(parent_value)
                .ok_or_else(|| ApiError::Decode("options source has no path".to_string()))?;
            let response: OptionsResponse = http::get_json(&path).await?;
            Ok(response.into_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::StatusFilter;

    #[test]
    fn list_path_carries_query() {
        let resource: RestResource<()> = RestResource::new("/api/banks");
        let path = resource.list_path(&ListQuery {
            page: 1,
            page_size: 50,
            status: StatusFilter::parse("1"),
            search: String::new(),
        });
        assert_eq!(path, "/api/banks?page=1&pageSize=50&size=50&status=1");
    }

    #[test]
    fn item_path_encodes_id() {
        let resource: RestResource<()> = RestResource::new("/api/banners");
        assert_eq!(resource.item_path(&EntityId::new("a/b")), "/api/banners/a%2Fb");
    }

    #[test]
    fn options_response_accepts_both_shapes() {
        let bare: OptionsResponse = serde_json::from_str(r#"[{"id":1,"name":"A"}]"#).unwrap();
        let wrapped: OptionsResponse =
            serde_json::from_str(r#"{"data":[{"id":1,"name":"A"}]}"#).unwrap();
        assert_eq!(bare.into_vec(), wrapped.into_vec());
    }
}
