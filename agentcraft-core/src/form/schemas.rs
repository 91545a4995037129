//! Draft schemas for the resource forms

use agentcraft_client::{DEFAULT_MODEL_REQUEST_TIMEOUT, KnowledgeBaseDraft, ModelDraft};

use super::{Draft, FieldKind, FieldSpec, Rule};

pub const NAME_REQUIRED: &str = "Name is required";
pub const ALIAS_REQUIRED: &str = "Alias is required";
pub const URL_INVALID: &str = "Please enter a valid access URL";

// ============ Model ============

pub const MODEL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "name",
        label: "Name",
        kind: FieldKind::Text,
        rules: &[Rule::Required {
            message: NAME_REQUIRED,
        }],
    },
    FieldSpec {
        id: "name_alias",
        label: "Alias",
        kind: FieldKind::Text,
        rules: &[Rule::Required {
            message: ALIAS_REQUIRED,
        }],
    },
    FieldSpec {
        id: "url",
        label: "Access URL",
        kind: FieldKind::Text,
        rules: &[Rule::Url {
            message: URL_INVALID,
        }],
    },
    FieldSpec {
        id: "token",
        label: "Access token",
        kind: FieldKind::Secret,
        rules: &[],
    },
    FieldSpec {
        id: "timeout",
        label: "Timeout (s)",
        kind: FieldKind::Number,
        rules: &[],
    },
    FieldSpec {
        id: "description",
        label: "Description",
        kind: FieldKind::Multiline,
        rules: &[],
    },
];

impl Draft for ModelDraft {
    fn schema() -> &'static [FieldSpec] {
        MODEL_FIELDS
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "name_alias" => Some(self.name_alias.clone()),
            "url" => Some(self.url.clone()),
            "token" => Some(self.token.clone()),
            "timeout" => Some(self.timeout.to_string()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => self.name = value.to_string(),
            "name_alias" => self.name_alias = value.to_string(),
            "url" => self.url = value.to_string(),
            "token" => self.token = value.to_string(),
            "timeout" => self.timeout = value.parse().unwrap_or(DEFAULT_MODEL_REQUEST_TIMEOUT),
            "description" => self.description = value.to_string(),
            _ => return false,
        }
        true
    }
}

// ============ Knowledge Base ============

pub const KNOWLEDGE_BASE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "name",
        label: "Name",
        kind: FieldKind::Text,
        rules: &[Rule::Required {
            message: NAME_REQUIRED,
        }],
    },
    FieldSpec {
        id: "description",
        label: "Description",
        kind: FieldKind::Multiline,
        rules: &[],
    },
];

impl Draft for KnowledgeBaseDraft {
    fn schema() -> &'static [FieldSpec] {
        KNOWLEDGE_BASE_FIELDS
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "description" => Some(self.description.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => self.name = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_ids_round_trip_through_draft() {
        let draft = ModelDraft::default();
        for spec in ModelDraft::schema() {
            assert!(draft.field_value(spec.id).is_some(), "{} unmapped", spec.id);
        }
        let draft = KnowledgeBaseDraft::default();
        for spec in KnowledgeBaseDraft::schema() {
            assert!(draft.field_value(spec.id).is_some(), "{} unmapped", spec.id);
        }
    }

    #[test]
    fn empty_timeout_falls_back_to_default() {
        let mut draft = ModelDraft {
            timeout: 30,
            ..ModelDraft::default()
        };
        assert!(draft.set_field_value("timeout", ""));
        assert_eq!(draft.timeout, DEFAULT_MODEL_REQUEST_TIMEOUT);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut draft = KnowledgeBaseDraft::default();
        assert!(!draft.set_field_value("url", "https://x.y"));
        assert_eq!(draft.field_value("token"), None);
    }

    #[test]
    fn required_flags() {
        let required: Vec<_> = MODEL_FIELDS
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.id)
            .collect();
        assert_eq!(required, vec!["name", "name_alias", "url"]);
    }
}
