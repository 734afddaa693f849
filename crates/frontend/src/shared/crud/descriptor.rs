//! Column and field descriptors for the generic list and form.
//!
//! Pages describe themselves with these builders instead of re-implementing
//! the list/form plumbing. Names and labels are `'static` so descriptors are
//! cheap compile-time constants.

use contracts::shared::{EntityStatus, SelectOption};

// ============================================================================
// List
// ============================================================================

/// Rendered form of one table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Status(Option<EntityStatus>),
    Image(Option<String>),
    Money(f64),
    Date(Option<String>),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::Text(v.to_string()),
            _ => Self::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub min_width: f32,
}

impl Column {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            min_width: 120.0,
        }
    }

    pub fn width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListDescriptor {
    pub title: &'static str,
    pub columns: Vec<Column>,
    pub status_filter: bool,
    pub search_placeholder: Option<&'static str>,
    pub page_sizes: Vec<u32>,
    pub default_page_size: u32,
    /// Route of the "add" form; `None` hides the button.
    pub create_route: Option<&'static str>,
    /// Edit route prefix; the row id is appended as the last segment.
    pub edit_route: Option<&'static str>,
    pub deletable: bool,
}

impl ListDescriptor {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            columns: Vec::new(),
            status_filter: false,
            search_placeholder: None,
            page_sizes: vec![10, 25, 50, 100],
            default_page_size: crate::shared::config::config().default_page_size,
            create_route: None,
            edit_route: None,
            deletable: false,
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn status_filter(mut self) -> Self {
        self.status_filter = true;
        self
    }

    pub fn searchable(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = Some(placeholder);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        if !self.page_sizes.contains(&size) {
            self.page_sizes.push(size);
            self.page_sizes.sort_unstable();
        }
        self
    }

    /// Enables "add", "edit" and "delete" for a resource mounted at `base_route`.
    pub fn editable(mut self, base_route: &'static str, create_route: &'static str) -> Self {
        self.edit_route = Some(base_route);
        self.create_route = Some(create_route);
        self.deletable = true;
        self
    }

    pub fn edit_link(&self, id: &str) -> Option<String> {
        self.edit_route
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), id))
    }
}

// ============================================================================
// Form
// ============================================================================

/// Where a select gets its options from.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsSource {
    Static(Vec<SelectOption>),
    /// `GET path` for independent selects; `GET path?param=<parent value>`
    /// for dependent ones.
    Remote {
        path: &'static str,
        parent_param: Option<&'static str>,
    },
}

impl OptionsSource {
    pub fn remote(path: &'static str) -> Self {
        Self::Remote {
            path,
            parent_param: None,
        }
    }

    pub fn keyed(path: &'static str, parent_param: &'static str) -> Self {
        Self::Remote {
            path,
            parent_param: Some(parent_param),
        }
    }

    /// Request path for the given parent value.
    pub fn request_path(&self, parent_value: &str) -> Option<String> {
        match self {
            Self::Static(_) => None,
            Self::Remote {
                path,
                parent_param: None,
            } => Some(path.to_string()),
            Self::Remote {
                path,
                parent_param: Some(param),
            } => Some(crate::shared::api_utils::with_query(
                path,
                &format!("{}={}", param, urlencoding::encode(parent_value)),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Number,
    TextArea,
    Select(OptionsSource),
    /// Select whose options are keyed by another field's value.
    Dependent {
        parent: &'static str,
        source: OptionsSource,
    },
    File {
        accept: &'static str,
    },
    Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub fn select(name: &'static str, label: &'static str, source: OptionsSource) -> Self {
        Self::new(name, label, FieldKind::Select(source))
    }

    pub fn dependent(
        name: &'static str,
        label: &'static str,
        parent: &'static str,
        source: OptionsSource,
    ) -> Self {
        Self::new(name, label, FieldKind::Dependent { parent, source })
    }

    pub fn file(name: &'static str, label: &'static str, accept: &'static str) -> Self {
        Self::new(name, label, FieldKind::File { accept })
    }

    pub fn status(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Status)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, FieldKind::File { .. })
    }

    pub fn parent(&self) -> Option<&'static str> {
        match &self.kind {
            FieldKind::Dependent { parent, .. } => Some(parent),
            _ => None,
        }
    }

    pub fn options_source(&self) -> Option<&OptionsSource> {
        match &self.kind {
            FieldKind::Select(source) | FieldKind::Dependent { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormDescriptor {
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
    /// Where to go after a successful save or on cancel.
    pub list_route: &'static str,
}

impl FormDescriptor {
    pub fn new(title: &'static str, list_route: &'static str) -> Self {
        Self {
            title,
            fields: Vec::new(),
            list_route,
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Direct dependents of `name`.
    pub fn children_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        self.fields.iter().filter(move |f| f.parent() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package_form() -> FormDescriptor {
        FormDescriptor::new("Package", "/packages")
            .field(FieldDescriptor::select(
                "category_id",
                "Category",
                OptionsSource::remote("/api/categories/options"),
            ))
            .field(FieldDescriptor::dependent(
                "subcategory_id",
                "Subcategory",
                "category_id",
                OptionsSource::keyed("/api/subcategories/options", "categoryId"),
            ))
            .field(FieldDescriptor::text("name", "Name").required())
    }

    #[test]
    fn children_follow_parent_links() {
        let form = package_form();
        let children: Vec<_> = form.children_of("category_id").map(|f| f.name).collect();
        assert_eq!(children, vec!["subcategory_id"]);
        assert_eq!(form.children_of("name").count(), 0);
    }

    #[test]
    fn keyed_source_encodes_parent_value() {
        let source = OptionsSource::keyed("/api/subcategories/options", "categoryId");
        assert_eq!(
            source.request_path("a b").as_deref(),
            Some("/api/subcategories/options?categoryId=a%20b")
        );
        assert_eq!(OptionsSource::Static(vec![]).request_path("x"), None);
    }

    #[test]
    fn edit_link_appends_id() {
        let list = ListDescriptor::new("Banks").editable("/banks", "/banks/new");
        assert_eq!(list.edit_link("9").as_deref(), Some("/banks/9"));
        assert!(list.deletable);
    }

    #[test]
    fn custom_page_size_is_offered() {
        let list = ListDescriptor::new("Banks").page_size(20);
        assert_eq!(list.default_page_size, 20);
        assert!(list.page_sizes.contains(&20));
    }
}
