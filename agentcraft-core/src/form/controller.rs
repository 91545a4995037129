//! 通用表单绑定器

use super::{Draft, FieldErrors, FieldKind, FieldSpec};

/// View of one field for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding<'a> {
    pub value: &'a str,
    pub error: Option<&'static str>,
    pub kind: FieldKind,
    pub label: &'static str,
    pub required: bool,
}

/// Binds a [`Draft`] to per-field text inputs and validates it.
///
/// Text buffers are kept alongside the draft so a number field can be
/// cleared while typing; the draft always holds the parsed value.
#[derive(Debug, Clone)]
pub struct FormController<D: Draft> {
    initial: D,
    values: D,
    inputs: Vec<String>,
    errors: FieldErrors,
}

impl<D: Draft> Default for FormController<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Draft> FormController<D> {
    /// 以 `initial` 作为初始值（也是 reset 的目标）
    pub fn new(initial: D) -> Self {
        let inputs = Self::inputs_of(&initial);
        Self {
            values: initial.clone(),
            initial,
            inputs,
            errors: FieldErrors::default(),
        }
    }

    pub fn schema(&self) -> &'static [FieldSpec] {
        D::schema()
    }

    /// Current binding of `field`, `None` if the schema has no such field.
    pub fn binding(&self, field: &str) -> Option<FieldBinding<'_>> {
        let (index, spec) = Self::find(field)?;
        Some(FieldBinding {
            value: &self.inputs[index],
            error: self.errors.get(field),
            kind: spec.kind,
            label: spec.label,
            required: spec.is_required(),
        })
    }

    /// Change handler: replace the text of `field`.
    ///
    /// Non-digit characters are dropped for number fields. Clears the
    /// field's error. Returns `false` for unknown fields.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let Some((index, spec)) = Self::find(field) else {
            return false;
        };
        let text = if spec.kind == FieldKind::Number {
            let digits: String = value.chars().filter(char::is_ascii_digit).collect();
            if !fits_number(&digits) {
                return false;
            }
            digits
        } else {
            value.to_string()
        };
        self.commit(index, spec, text);
        true
    }

    /// Append one character. Refused (returns `false`) when a number field
    /// would receive a non-digit or overflow.
    pub fn push_char(&mut self, field: &str, c: char) -> bool {
        let Some((index, spec)) = Self::find(field) else {
            return false;
        };
        let mut text = self.inputs[index].clone();
        match spec.kind {
            FieldKind::Number if !c.is_ascii_digit() => return false,
            FieldKind::Multiline => text.push(c),
            _ if c == '\n' => return false,
            _ => text.push(c),
        }
        if spec.kind == FieldKind::Number && !fits_number(&text) {
            return false;
        }
        self.commit(index, spec, text);
        true
    }

    /// Remove the last character of `field`.
    pub fn pop_char(&mut self, field: &str) -> bool {
        let Some((index, spec)) = Self::find(field) else {
            return false;
        };
        let mut text = self.inputs[index].clone();
        if text.pop().is_none() {
            return false;
        }
        self.commit(index, spec, text);
        true
    }

    /// Run every rule over every field and keep the first failure per field.
    pub fn validate(&mut self) -> FieldErrors {
        self.errors.clear();
        for (spec, input) in D::schema().iter().zip(&self.inputs) {
            if let Some(message) = spec.rules.iter().find_map(|rule| rule.check(input)) {
                self.errors.insert(spec.id, message);
            }
        }
        self.errors.clone()
    }

    /// 当前没有任何字段错误
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Restore the initial draft and clear errors.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.inputs = Self::inputs_of(&self.values);
        self.errors.clear();
    }

    /// Overwrite every field (used to pre-fill on edit).
    pub fn set_values(&mut self, draft: D) {
        self.inputs = Self::inputs_of(&draft);
        self.values = draft;
        self.errors.clear();
    }

    pub fn values(&self) -> &D {
        &self.values
    }

    fn commit(&mut self, index: usize, spec: &FieldSpec, text: String) {
        self.values.set_field_value(spec.id, &text);
        self.inputs[index] = text;
        self.errors.remove(spec.id);
    }

    fn find(field: &str) -> Option<(usize, &'static FieldSpec)> {
        D::schema()
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.id == field)
    }

    fn inputs_of(draft: &D) -> Vec<String> {
        D::schema()
            .iter()
            .map(|spec| draft.field_value(spec.id).unwrap_or_default())
            .collect()
    }
}

fn fits_number(text: &str) -> bool {
    text.is_empty() || text.parse::<u32>().is_ok()
}
