//! View state of a create/edit form.
//!
//! Field values are kept as strings keyed by field name. Dependent selects
//! form a cascade: changing a parent synchronously clears every descendant's
//! options and value, then asks for the direct children's options. Each
//! option request carries a per-field token and only the latest token for a
//! field may commit, so a slow response for a superseded parent value can
//! never overwrite a newer one.

use contracts::shared::{EntityId, EntityStatus, SelectOption};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::descriptor::{FieldKind, FormDescriptor, OptionsSource};
use super::payload::{self, AttachedFile, Payload};
use super::preview::{FileSelection, ObjectUrls};
use super::Phase;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Missing { field: &'static str, label: &'static str },
    #[error("The form is not ready yet")]
    NotReady,
}

/// Request for one field's options.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsRequest {
    pub field: &'static str,
    pub source: OptionsSource,
    pub parent_value: String,
    pub token: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionsOutcome {
    Applied,
    Stale,
    Failed(ApiError),
}

pub struct FormViewState<U: ObjectUrls> {
    schema: FormDescriptor,
    mode: FormMode,
    values: HashMap<String, String>,
    options: HashMap<&'static str, Vec<SelectOption>>,
    option_tokens: HashMap<&'static str, u64>,
    next_token: u64,
    /// Option lists that must arrive before an edit form becomes interactive.
    awaiting: HashSet<&'static str>,
    hydrated: bool,
    files: HashMap<&'static str, FileSelection<U>>,
    urls: U,
    pub phase: Phase,
}

impl<U: ObjectUrls> FormViewState<U> {
    pub fn new(schema: FormDescriptor, mode: FormMode, urls: U) -> Self {
        let mut values = HashMap::new();
        let mut options = HashMap::new();
        for field in &schema.fields {
            match &field.kind {
                FieldKind::File { .. } => {}
                FieldKind::Status => {
                    values.insert(field.name.to_string(), EntityStatus::Active.code().to_string());
                }
                FieldKind::Select(OptionsSource::Static(list)) => {
                    options.insert(field.name, list.clone());
                    values.insert(field.name.to_string(), String::new());
                }
                _ => {
                    values.insert(field.name.to_string(), String::new());
                }
            }
        }
        let phase = match mode {
            FormMode::Create => Phase::Ready,
            FormMode::Edit(_) => Phase::Loading,
        };
        Self {
            schema,
            mode,
            values,
            options,
            option_tokens: HashMap::new(),
            next_token: 0,
            awaiting: HashSet::new(),
            hydrated: false,
            files: HashMap::new(),
            urls,
            phase,
        }
    }

    pub fn schema(&self) -> &FormDescriptor {
        &self.schema
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn options(&self, name: &str) -> &[SelectOption] {
        self.options.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// An edit form whose record never loaded stays locked.
    pub fn is_interactive(&self) -> bool {
        match self.phase {
            Phase::Ready => true,
            Phase::Error => self.has_record(),
            _ => false,
        }
    }

    fn has_record(&self) -> bool {
        self.hydrated || self.mode == FormMode::Create
    }

    fn issue(&mut self, field: &'static str, source: OptionsSource, parent_value: String) -> OptionsRequest {
        self.next_token += 1;
        self.option_tokens.insert(field, self.next_token);
        OptionsRequest {
            field,
            source,
            parent_value,
            token: self.next_token,
        }
    }

    /// Option lists of top-level remote selects, needed right after mount.
    /// An edit form also waits for these before it becomes interactive.
    pub fn mount_requests(&mut self) -> Vec<OptionsRequest> {
        let pending: Vec<_> = self
            .schema
            .fields
            .iter()
            .filter_map(|f| match &f.kind {
                FieldKind::Select(source @ OptionsSource::Remote { .. }) => {
                    Some((f.name, source.clone()))
                }
                _ => None,
            })
            .collect();
        let editing = matches!(self.mode, FormMode::Edit(_));
        pending
            .into_iter()
            .map(|(field, source)| {
                if editing {
                    self.awaiting.insert(field);
                }
                self.issue(field, source, String::new())
            })
            .collect()
    }

    /// Resets every descendant of `name`; in-flight requests for them become stale.
    fn clear_descendants(&mut self, name: &str) {
        let children: Vec<&'static str> = self.schema.children_of(name).map(|f| f.name).collect();
        for child in children {
            self.values.insert(child.to_string(), String::new());
            self.options.remove(child);
            self.next_token += 1;
            self.option_tokens.insert(child, self.next_token);
            self.awaiting.remove(child);
            self.clear_descendants(child);
        }
    }

    fn child_requests(&mut self, name: &str, parent_value: &str) -> Vec<OptionsRequest> {
        if parent_value.is_empty() {
            return Vec::new();
        }
        let children: Vec<(&'static str, OptionsSource)> = self
            .schema
            .children_of(name)
            .filter_map(|f| f.options_source().map(|s| (f.name, s.clone())))
            .collect();
        children
            .into_iter()
            .map(|(field, source)| self.issue(field, source, parent_value.to_string()))
            .collect()
    }

    /// Input handler. Returns the option fetches the change requires.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Vec<OptionsRequest> {
        let value = value.into();
        if self.value(name) == value {
            return Vec::new();
        }
        self.values.insert(name.to_string(), value.clone());
        self.clear_descendants(name);
        self.child_requests(name, &value)
    }

    pub fn apply_options(
        &mut self,
        request: &OptionsRequest,
        result: Result<Vec<SelectOption>, ApiError>,
    ) -> OptionsOutcome {
        if self.option_tokens.get(request.field) != Some(&request.token) {
            return OptionsOutcome::Stale;
        }
        self.awaiting.remove(request.field);
        if self.phase == Phase::Loading && self.hydrated && self.awaiting.is_empty() {
            self.phase = Phase::Ready;
        }
        match result {
            Ok(list) => {
                self.options.insert(request.field, list);
                OptionsOutcome::Applied
            }
            Err(e) => OptionsOutcome::Failed(e),
        }
    }

    /// Edit-mode initialisation from the fetched record.
    ///
    /// Returns the option requests for dependent fields whose parent already
    /// has a value; the form stays in `Loading` until all of them settled.
    pub fn hydrate(&mut self, record: &Value) -> Vec<OptionsRequest> {
        let record = unwrap_record(record);
        let names: Vec<&'static str> = self.schema.fields.iter().map(|f| f.name).collect();
        for name in &names {
            if let Some(v) = record_field(record, name).and_then(field_text) {
                self.values.insert(name.to_string(), v);
            }
        }
        self.hydrated = true;

        let parents: Vec<(&'static str, String)> = self
            .schema
            .fields
            .iter()
            .filter(|f| self.schema.children_of(f.name).next().is_some())
            .map(|f| (f.name, self.value(f.name).to_string()))
            .collect();

        let mut requests = Vec::new();
        for (parent, value) in parents {
            for request in self.child_requests(parent, &value) {
                self.awaiting.insert(request.field);
                requests.push(request);
            }
        }
        if self.awaiting.is_empty() {
            self.phase = Phase::Ready;
        }
        requests
    }

    pub fn load_failed(&mut self) {
        self.phase = Phase::Error;
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    /// Replaces the field's file; the previous preview URL is revoked.
    pub fn set_file(&mut self, name: &'static str, blob: U::Blob, filename: &str) -> Result<(), ApiError> {
        let selection = FileSelection::new(self.urls.clone(), blob, filename)?;
        self.files.insert(name, selection);
        Ok(())
    }

    pub fn clear_file(&mut self, name: &str) {
        self.files.remove(name);
    }

    /// Local preview of a picked file, else the stored URL from the server.
    pub fn preview(&self, name: &str) -> Option<String> {
        if let Some(selection) = self.files.get(name) {
            return Some(selection.preview_url().to_string());
        }
        let stored = self.value(name);
        (!stored.is_empty()).then(|| stored.to_string())
    }

    pub fn selected_filename(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|f| f.filename.as_str())
    }

    /// Drops all picked files, revoking their preview URLs.
    pub fn release_files(&mut self) {
        self.files.clear();
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in self.schema.fields.iter().filter(|f| f.required) {
            let present = if field.is_file() {
                self.files.contains_key(field.name) || !self.value(field.name).is_empty()
            } else {
                !self.value(field.name).trim().is_empty()
            };
            if !present {
                return Err(ValidationError::Missing {
                    field: field.name,
                    label: field.label,
                });
            }
        }
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<Payload<U::Blob>, ValidationError> {
        if !self.is_interactive() || !self.has_record() {
            return Err(ValidationError::NotReady);
        }
        self.validate()?;
        let attached = self
            .files
            .iter()
            .map(|(name, f)| AttachedFile {
                field: *name,
                filename: &f.filename,
                blob: &f.blob,
            })
            .collect();
        let payload = payload::build(&self.schema, &self.values, attached);
        self.phase = Phase::Submitting;
        Ok(payload)
    }

    /// Keeps every entered value for a retry.
    pub fn submit_failed(&mut self) {
        self.phase = Phase::Ready;
    }

    pub fn submit_succeeded(&mut self) {
        self.phase = Phase::Idle;
        self.release_files();
    }
}

/// Some endpoints wrap single records as `{ "data": { .. } }`.
pub fn unwrap_record(record: &Value) -> &Value {
    match record.get("data") {
        Some(inner @ Value::Object(_)) => inner,
        _ => record,
    }
}

/// Looks a form field up in a record under its own name, then its
/// snake_case and camelCase spellings. An `..Id` field also matches a nested
/// reference under the bare name (`categoryId` reads `category: { id }`).
pub fn record_field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    let snake = snake_case(name);
    let mut keys = vec![name.to_string(), camel_case(&snake), snake.clone()];
    if let Some(stem) = snake.strip_suffix("_id") {
        keys.push(stem.to_string());
        keys.push(camel_case(stem));
    }
    keys.iter()
        .filter_map(|key| record.get(key.as_str()))
        .find(|v| !v.is_null())
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Text form of a record field. References (`{ "id": .., "name": .. }`)
/// collapse to their id.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Object(map) => map.get("id").and_then(field_text),
        Value::Array(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::descriptor::FieldDescriptor;
    use crate::shared::crud::preview::testing::CountingUrls;
    use serde_json::json;

    fn package_form() -> FormDescriptor {
        FormDescriptor::new("Package", "/packages")
            .field(
                FieldDescriptor::select("category_id", "Category", OptionsSource::remote("/api/categories/options"))
                    .required(),
            )
            .field(FieldDescriptor::dependent(
                "subcategory_id",
                "Subcategory",
                "category_id",
                OptionsSource::keyed("/api/subcategories/options", "categoryId"),
            ))
            .field(FieldDescriptor::dependent(
                "attribute_id",
                "Attribute",
                "subcategory_id",
                OptionsSource::keyed("/api/attributes/options", "subcategoryId"),
            ))
            .field(FieldDescriptor::text("name", "Name").required())
            .field(FieldDescriptor::number("price", "Price"))
            .field(FieldDescriptor::file("image", "Image", "image/*"))
    }

    fn opts(labels: &[&str]) -> Vec<SelectOption> {
        labels.iter().map(|l| SelectOption::new(*l, *l)).collect()
    }

    fn create_form(urls: CountingUrls) -> FormViewState<CountingUrls> {
        FormViewState::new(package_form(), FormMode::Create, urls)
    }

    #[test]
    fn mount_loads_top_level_remote_selects() {
        let mut form = create_form(CountingUrls::default());
        let requests = form.mount_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].field, "category_id");
        assert_eq!(form.phase, Phase::Ready);
    }

    #[test]
    fn selecting_a_parent_requests_child_options() {
        let mut form = create_form(CountingUrls::default());
        let requests = form.set_field("category_id", "c1");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].field, "subcategory_id");
        assert_eq!(requests[0].parent_value, "c1");
        assert_eq!(
            requests[0].source.request_path(&requests[0].parent_value).as_deref(),
            Some("/api/subcategories/options?categoryId=c1")
        );
    }

    #[test]
    fn changing_parent_resets_whole_cascade_synchronously() {
        let mut form = create_form(CountingUrls::default());
        let r = form.set_field("category_id", "c1").remove(0);
        form.apply_options(&r, Ok(opts(&["s1", "s2"])));
        let r = form.set_field("subcategory_id", "s1").remove(0);
        form.apply_options(&r, Ok(opts(&["a1"])));
        form.set_field("attribute_id", "a1");

        let requests = form.set_field("category_id", "");
        assert!(requests.is_empty());
        assert_eq!(form.value("subcategory_id"), "");
        assert!(form.options("subcategory_id").is_empty());
        assert_eq!(form.value("attribute_id"), "");
        assert!(form.options("attribute_id").is_empty());
    }

    #[test]
    fn superseded_cascade_response_is_dropped() {
        let mut form = create_form(CountingUrls::default());
        let for_c1 = form.set_field("category_id", "c1").remove(0);
        let for_c2 = form.set_field("category_id", "c2").remove(0);

        // c2 answers first, then the slow c1 response arrives
        assert_eq!(form.apply_options(&for_c2, Ok(opts(&["c2-sub"]))), OptionsOutcome::Applied);
        assert_eq!(form.apply_options(&for_c1, Ok(opts(&["c1-sub"]))), OptionsOutcome::Stale);
        assert_eq!(form.options("subcategory_id"), opts(&["c2-sub"]).as_slice());
    }

    #[test]
    fn response_arriving_after_parent_cleared_is_dropped() {
        let mut form = create_form(CountingUrls::default());
        let for_c1 = form.set_field("category_id", "c1").remove(0);
        form.set_field("category_id", "");
        assert_eq!(form.apply_options(&for_c1, Ok(opts(&["late"]))), OptionsOutcome::Stale);
        assert!(form.options("subcategory_id").is_empty());
    }

    #[test]
    fn validation_runs_on_submit_only() {
        let mut form = create_form(CountingUrls::default());
        form.set_field("name", "Deep clean");
        assert_eq!(
            form.begin_submit().unwrap_err(),
            ValidationError::Missing {
                field: "category_id",
                label: "Category"
            }
        );
        assert_eq!(form.phase, Phase::Ready);
        assert_eq!(form.value("name"), "Deep clean");
    }

    #[test]
    fn failed_submit_keeps_values() {
        let mut form = create_form(CountingUrls::default());
        form.set_field("category_id", "c1");
        form.set_field("name", "Sofa cleaning");
        form.set_field("price", "499");
        let payload = form.begin_submit().unwrap();
        assert_eq!(
            payload,
            Payload::Json(json!({ "category_id": "c1", "name": "Sofa cleaning", "price": 499 }))
        );
        assert_eq!(form.phase, Phase::Submitting);
        assert!(form.begin_submit().is_err());

        form.submit_failed();
        assert_eq!(form.phase, Phase::Ready);
        assert_eq!(form.value("name"), "Sofa cleaning");
        assert_eq!(form.value("price"), "499");
    }

    #[test]
    fn file_field_switches_to_multipart() {
        let mut form = create_form(CountingUrls::default());
        form.set_field("category_id", "c1");
        form.set_field("name", "AC service");
        form.set_file("image", "png-bytes".to_string(), "ac.png").unwrap();
        assert!(form.begin_submit().unwrap().is_multipart());
    }

    #[test]
    fn every_preview_url_is_revoked() {
        let urls = CountingUrls::default();
        {
            let mut form = create_form(urls.clone());
            form.set_file("image", "a".to_string(), "a.png").unwrap();
            form.set_file("image", "b".to_string(), "b.png").unwrap();
            form.set_file("image", "c".to_string(), "c.png").unwrap();
            assert_eq!(urls.log.borrow().revoked.len(), 2);
            assert_eq!(form.selected_filename("image"), Some("c.png"));
        }
        // dropping the form is the unmount
        let log = urls.log.borrow();
        assert_eq!(log.created.len(), 3);
        assert_eq!(log.revoked.len(), log.created.len());
    }

    #[test]
    fn edit_form_waits_for_dependent_options() {
        let mut form = FormViewState::new(
            package_form(),
            FormMode::Edit(EntityId::new("p1")),
            CountingUrls::default(),
        );
        assert_eq!(form.phase, Phase::Loading);
        assert!(form.begin_submit().is_err());

        let requests = form.hydrate(&json!({
            "data": {
                "name": "Bathroom cleaning",
                "category_id": { "id": 4, "name": "Cleaning" },
                "subcategory_id": 17,
                "attribute_id": null,
                "price": 799.5,
                "image": "/media/bath.png"
            }
        }));
        let fields: Vec<_> = requests.iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["subcategory_id", "attribute_id"]);
        assert_eq!(form.phase, Phase::Loading);
        // hydration must not wipe the stored child values
        assert_eq!(form.value("subcategory_id"), "17");
        assert_eq!(form.value("category_id"), "4");
        assert_eq!(form.preview("image").as_deref(), Some("/media/bath.png"));

        form.apply_options(&requests[0], Ok(opts(&["17"])));
        assert_eq!(form.phase, Phase::Loading);
        form.apply_options(&requests[1], Ok(opts(&["a"])));
        assert_eq!(form.phase, Phase::Ready);
        assert_eq!(form.options("subcategory_id"), opts(&["17"]).as_slice());
    }

    #[test]
    fn edit_form_also_waits_for_top_level_options() {
        let mut form = FormViewState::new(
            package_form(),
            FormMode::Edit(EntityId::new("p1")),
            CountingUrls::default(),
        );
        let categories = form.mount_requests().remove(0);
        let deps = form.hydrate(&json!({ "category_id": "4", "subcategory_id": "" , "name": "x" }));
        assert_eq!(deps.len(), 1);
        form.apply_options(&deps[0], Ok(opts(&["s"])));
        assert_eq!(form.phase, Phase::Loading);
        form.apply_options(&categories, Err(ApiError::Network("offline".to_string())));
        assert_eq!(form.phase, Phase::Ready);
    }

    #[test]
    fn edit_form_without_dependents_is_ready_after_hydrate() {
        let schema = FormDescriptor::new("Bank", "/banks")
            .field(FieldDescriptor::text("name", "Name").required())
            .field(FieldDescriptor::status("status", "Status"));
        let mut form = FormViewState::new(schema, FormMode::Edit(EntityId::new("1")), CountingUrls::default());
        assert!(form.hydrate(&json!({ "name": "HDFC", "status": 0 })).is_empty());
        assert_eq!(form.phase, Phase::Ready);
        assert_eq!(form.value("status"), "0");
    }

    #[test]
    fn field_text_collapses_references() {
        assert_eq!(field_text(&json!({ "id": "x", "name": "X" })), Some("x".to_string()));
        assert_eq!(field_text(&json!(12)), Some("12".to_string()));
        assert_eq!(field_text(&json!(true)), Some("1".to_string()));
        assert_eq!(field_text(&json!(null)), None);
    }

    fn camel_package_form() -> FormDescriptor {
        FormDescriptor::new("Package", "/packages")
            .field(FieldDescriptor::select("categoryId", "Category", OptionsSource::remote("/api/categories/options")))
            .field(FieldDescriptor::dependent(
                "subcategoryId",
                "Subcategory",
                "categoryId",
                OptionsSource::keyed("/api/subcategories/options", "categoryId"),
            ))
            .field(FieldDescriptor::text("name", "Name").required())
            .field(FieldDescriptor::number("durationMinutes", "Duration"))
    }

    fn hydrate_camel(record: Value) -> (FormViewState<CountingUrls>, Vec<OptionsRequest>) {
        let mut form = FormViewState::new(
            camel_package_form(),
            FormMode::Edit(EntityId::new("p1")),
            CountingUrls::default(),
        );
        let requests = form.hydrate(&record);
        (form, requests)
    }

    #[test]
    fn hydrate_reads_snake_case_records() {
        let (form, requests) = hydrate_camel(json!({
            "name": "Deep clean",
            "category_id": 4,
            "subcategory_id": 17,
            "duration_minutes": 90
        }));
        assert_eq!(form.value("categoryId"), "4");
        assert_eq!(form.value("subcategoryId"), "17");
        assert_eq!(form.value("durationMinutes"), "90");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].field, "subcategoryId");
        assert_eq!(requests[0].parent_value, "4");
    }

    #[test]
    fn hydrate_reads_camel_case_records() {
        let (form, requests) = hydrate_camel(json!({
            "name": "Deep clean",
            "categoryId": "4",
            "subcategoryId": "17",
            "durationMinutes": 45
        }));
        assert_eq!(form.value("categoryId"), "4");
        assert_eq!(form.value("subcategoryId"), "17");
        assert_eq!(form.value("durationMinutes"), "45");
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn hydrate_reads_nested_references() {
        let (form, _) = hydrate_camel(json!({
            "name": "Deep clean",
            "category": { "id": 4, "name": "Cleaning" },
            "subcategory": { "id": 17, "name": "Kitchen" }
        }));
        assert_eq!(form.value("categoryId"), "4");
        assert_eq!(form.value("subcategoryId"), "17");
    }

    #[test]
    fn key_spellings() {
        assert_eq!(snake_case("durationMinutes"), "duration_minutes");
        assert_eq!(camel_case("duration_minutes"), "durationMinutes");
        assert_eq!(camel_case("name"), "name");
        let record = json!({ "category_id": null, "category": { "id": 3 } });
        assert_eq!(record_field(&record, "categoryId"), Some(&json!({ "id": 3 })));
    }

    #[test]
    fn edit_form_that_failed_to_load_cannot_submit() {
        let mut form = FormViewState::new(
            package_form(),
            FormMode::Edit(EntityId::new("p1")),
            CountingUrls::default(),
        );
        form.mount_requests();
        form.load_failed();
        assert_eq!(form.phase, Phase::Error);
        assert!(!form.is_interactive());
        assert_eq!(form.begin_submit().unwrap_err(), ValidationError::NotReady);
        assert_eq!(form.phase, Phase::Error);
    }
}
