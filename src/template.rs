use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::{Element, ElementKind, ElementPatch};

/// Errors from index-based document operations
///
/// The interaction state machine only ever hands out live indices, so
/// hitting this is a programming defect rather than a user-recoverable
/// condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("element index {index} out of range (template has {len} elements)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors from loading a template out of external JSON
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("JSON does not describe a template: {0}")]
    NotATemplate(String),
}

/// The full document being edited: an id, a category and an ordered list of
/// drawing elements. Array order is paint order; the last element is
/// topmost. Elements are referenced by positional index only.
///
/// Every mutation returns a new `Template` value so that history snapshots
/// can never alias the document being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "template_id", default)]
    pub template_id: String,
    #[serde(default)]
    pub category: String,
    pub elements: Vec<Element>,
}

impl Template {
    pub fn new(template_id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            category: category.into(),
            elements: Vec::new(),
        }
    }

    /// Append a default-initialized element of the given kind. The new
    /// element's index is the previous element count.
    pub fn add_element(&self, kind: ElementKind) -> Template {
        let mut next = self.clone();
        next.elements.push(Element::new(kind));
        next
    }

    /// Merge `patch` into the element at `index`. Patched fields overwrite,
    /// all others are retained.
    pub fn update_element(&self, index: usize, patch: &ElementPatch) -> Result<Template, TemplateError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.elements[index].apply(patch);
        Ok(next)
    }

    /// Delete the element at `index`. Elements after it shift down by one,
    /// so the caller must treat any held indices past `index` as stale.
    pub fn remove_element(&self, index: usize) -> Result<Template, TemplateError> {
        self.check_index(index)?;
        let mut next = self.clone();
        next.elements.remove(index);
        Ok(next)
    }

    fn check_index(&self, index: usize) -> Result<(), TemplateError> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(TemplateError::OutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }

    /// Parse a template out of external JSON.
    ///
    /// Distinguishes unparseable text from well-formed JSON of the wrong
    /// shape (e.g. a missing `elements` array) so the user notification can
    /// say which it was. The id and category default to empty strings when
    /// absent.
    pub fn from_json(text: &str) -> Result<Template, ImportError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        serde_json::from_value(value).map_err(|err| ImportError::NotATemplate(err.to_string()))
    }

    /// Serialize for export: pretty-printed with 2-space indentation
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
