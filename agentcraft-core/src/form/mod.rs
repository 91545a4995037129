//! 表单：字段描述、校验规则与通用绑定器
//!
//! A draft type declares its fields once as a static [`FieldSpec`] slice;
//! [`FormController`] binds any such draft to text inputs and validates it.

mod controller;
mod rules;
mod schemas;

pub use controller::{FieldBinding, FormController};
pub use rules::{Rule, is_valid_url};
pub use schemas::{
    ALIAS_REQUIRED, KNOWLEDGE_BASE_FIELDS, MODEL_FIELDS, NAME_REQUIRED, URL_INVALID,
};

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Debug;

use serde::Serialize;

/// How a field is edited and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Masked unless the user toggles visibility
    Secret,
    /// Unsigned integer; input accepts ASCII digits only
    Number,
    Multiline,
}

/// One field of a draft schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Stable field id (matches the serialized key)
    pub id: &'static str,
    /// Default label; the UI may localize by `id`
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// 空值无法通过校验的字段视为必填
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| rule.check("").is_some())
    }
}

/// A form-editable record draft.
///
/// Values cross the boundary as text so one binder serves every draft type.
pub trait Draft: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Field descriptions in display order.
    fn schema() -> &'static [FieldSpec];

    /// Current value of `field` as text, `None` for unknown fields.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Store `value` into `field`. Returns `false` for unknown fields.
    ///
    /// Number fields receive digit-only text; empty text means the default.
    fn set_field_value(&mut self, field: &str, value: &str) -> bool;
}

/// First failing rule message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
