//! Serialisation of form values into a request body.
//!
//! JSON unless at least one file is attached, multipart otherwise.

use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use super::descriptor::{FieldKind, FormDescriptor};

#[derive(Debug, Clone, PartialEq)]
pub enum Part<B> {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        blob: B,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload<B> {
    Json(Value),
    Multipart(Vec<Part<B>>),
}

impl<B> Payload<B> {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }
}

/// A newly picked file for one field.
pub struct AttachedFile<'a, B> {
    pub field: &'a str,
    pub filename: &'a str,
    pub blob: &'a B,
}

fn json_number(raw: &str) -> Option<Value> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

pub fn build<B: Clone>(
    schema: &FormDescriptor,
    values: &HashMap<String, String>,
    files: Vec<AttachedFile<'_, B>>,
) -> Payload<B> {
    let scalar_fields = schema.fields.iter().filter(|f| !f.is_file()).filter_map(|f| {
        let value = values.get(f.name).map(|v| v.trim()).unwrap_or("");
        (!value.is_empty() || f.required).then_some((f, value))
    });

    if files.is_empty() {
        let mut body = Map::new();
        for (field, value) in scalar_fields {
            let json = match field.kind {
                FieldKind::Number | FieldKind::Status => {
                    json_number(value).unwrap_or_else(|| Value::String(value.to_string()))
                }
                _ => Value::String(value.to_string()),
            };
            body.insert(field.name.to_string(), json);
        }
        return Payload::Json(Value::Object(body));
    }

    let mut parts: Vec<Part<B>> = scalar_fields
        .map(|(field, value)| Part::Text {
            name: field.name.to_string(),
            value: value.to_string(),
        })
        .collect();
    parts.extend(files.into_iter().map(|f| Part::File {
        name: f.field.to_string(),
        filename: f.filename.to_string(),
        blob: f.blob.clone(),
    }));
    Payload::Multipart(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::descriptor::FieldDescriptor;
    use serde_json::json;

    fn banner_form() -> FormDescriptor {
        FormDescriptor::new("Banner", "/banners")
            .field(FieldDescriptor::text("title", "Title").required())
            .field(FieldDescriptor::number("position", "Position"))
            .field(FieldDescriptor::text("link", "Link"))
            .field(FieldDescriptor::status("status", "Status"))
            .field(FieldDescriptor::file("image", "Image", "image/*"))
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn json_when_no_file_attached() {
        let payload: Payload<String> = build(
            &banner_form(),
            &values(&[("title", " Monsoon offer "), ("position", "3"), ("status", "1"), ("link", "")]),
            vec![],
        );
        assert_eq!(
            payload,
            Payload::Json(json!({ "title": "Monsoon offer", "position": 3, "status": 1 }))
        );
    }

    #[test]
    fn multipart_when_file_attached() {
        let blob = "bytes".to_string();
        let payload = build(
            &banner_form(),
            &values(&[("title", "Offer"), ("status", "0")]),
            vec![AttachedFile {
                field: "image",
                filename: "offer.png",
                blob: &blob,
            }],
        );
        let Payload::Multipart(parts) = payload else {
            panic!("expected multipart");
        };
        assert!(parts.contains(&Part::Text {
            name: "title".to_string(),
            value: "Offer".to_string()
        }));
        assert!(parts.contains(&Part::File {
            name: "image".to_string(),
            filename: "offer.png".to_string(),
            blob: "bytes".to_string()
        }));
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn non_numeric_number_is_sent_as_text() {
        let payload: Payload<String> = build(
            &banner_form(),
            &values(&[("title", "x"), ("position", "1.5"), ("status", "abc")]),
            vec![],
        );
        assert_eq!(
            payload,
            Payload::Json(json!({ "title": "x", "position": 1.5, "status": "abc" }))
        );
    }
}
