//! Record types exchanged with the backend

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Resource;
use crate::utils::{datetime, null_as_default};

/// 模型请求默认超时（秒）
pub const DEFAULT_MODEL_REQUEST_TIMEOUT: u32 = 600;

/// Backend collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    /// LLM provider proxy
    Model,
    /// Knowledge base
    KnowledgeBase,
    /// Agent (forwarded opaquely by the proxy)
    Agent,
}

impl ResourceKind {
    /// All kinds known to the backend.
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::Model,
            ResourceKind::KnowledgeBase,
            ResourceKind::Agent,
        ]
    }

    /// Path segment of the backend collection.
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Model => "model",
            ResourceKind::KnowledgeBase => "knowledgeBase",
            ResourceKind::Agent => "agent",
        }
    }

    /// Parse a collection path segment.
    pub fn from_collection(segment: &str) -> Option<ResourceKind> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.collection() == segment)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

// ============ Model ============

/// LLM 代理
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_alias: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// 访问凭证，日志中只能以掩码形式出现
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(default = "default_timeout", deserialize_with = "timeout_or_default")]
    pub timeout: u32,
    #[serde(default, with = "datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime")]
    pub modified: Option<DateTime<Utc>>,
}

/// Writable fields of a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDraft {
    pub name: String,
    pub name_alias: String,
    pub url: String,
    pub token: String,
    pub timeout: u32,
    pub description: String,
}

impl Default for ModelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            name_alias: String::new(),
            url: String::new(),
            token: String::new(),
            timeout: DEFAULT_MODEL_REQUEST_TIMEOUT,
            description: String::new(),
        }
    }
}

fn default_timeout() -> u32 {
    DEFAULT_MODEL_REQUEST_TIMEOUT
}

/// `null` 与 0 都回退到默认超时
fn timeout_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_MODEL_REQUEST_TIMEOUT))
}

impl Resource for Model {
    type Draft = ModelDraft;

    const KIND: ResourceKind = ResourceKind::Model;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> ModelDraft {
        ModelDraft {
            name: self.name.clone(),
            name_alias: self.name_alias.clone(),
            url: self.url.clone(),
            token: self.token.clone(),
            timeout: self.timeout,
            description: self.description.clone(),
        }
    }

    fn from_draft(id: i64, draft: ModelDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            name_alias: draft.name_alias,
            description: draft.description,
            url: draft.url,
            token: draft.token,
            timeout: draft.timeout,
            created: Some(now),
            modified: Some(now),
        }
    }

    fn apply_draft(&mut self, draft: ModelDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.name_alias = draft.name_alias;
        self.description = draft.description;
        self.url = draft.url;
        self.token = draft.token;
        self.timeout = draft.timeout;
        self.modified = Some(now);
    }
}

// ============ Knowledge Base ============

/// 知识库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, with = "datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "datetime")]
    pub modified: Option<DateTime<Utc>>,
}

/// Writable fields of a [`KnowledgeBase`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseDraft {
    pub name: String,
    pub description: String,
}

impl Resource for KnowledgeBase {
    type Draft = KnowledgeBaseDraft;

    const KIND: ResourceKind = ResourceKind::KnowledgeBase;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_draft(&self) -> KnowledgeBaseDraft {
        KnowledgeBaseDraft {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn from_draft(id: i64, draft: KnowledgeBaseDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            created: Some(now),
            modified: Some(now),
        }
    }

    fn apply_draft(&mut self, draft: KnowledgeBaseDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.description = draft.description;
        self.modified = Some(now);
    }
}

// ============ Response envelope ============

/// Backend payload: either wrapped as `{ "code": .., "data": .. }` or bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Payload<T> {
    Envelope {
        #[allow(dead_code)]
        #[serde(default)]
        code: Option<serde_json::Value>,
        data: T,
    },
    Bare(T),
}

impl<T> Payload<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Payload::Envelope { data, .. } | Payload::Bare(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names_round_trip() {
        for kind in ResourceKind::all() {
            assert_eq!(ResourceKind::from_collection(kind.collection()), Some(*kind));
        }
        assert_eq!(ResourceKind::from_collection("accounts"), None);
    }

    #[test]
    fn model_decodes_backend_shape() {
        let json = r#"{
            "id": 7,
            "name": "gpt4proxy",
            "name_alias": "gpt4",
            "description": null,
            "url": "https://api.example.com/v1",
            "token": "secret",
            "timeout": 30,
            "created": "2024-03-01 10:20:30",
            "modified": "2024-03-02T08:00:00Z"
        }"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, 7);
        assert_eq!(model.description, "");
        assert_eq!(model.timeout, 30);
        assert!(model.created.is_some());
        assert!(model.modified.is_some());
    }

    #[test]
    fn model_missing_timeout_uses_default() {
        let json = r#"{"id": 1, "name": "m"}"#;
        let model: Model = serde_json::from_str(json).unwrap();
        assert_eq!(model.timeout, DEFAULT_MODEL_REQUEST_TIMEOUT);
        assert_eq!(model.created, None);
    }

    #[test]
    fn model_null_timeout_does_not_break_the_list() {
        let json = r#"[
            {"id": 1, "name": "a", "timeout": 30},
            {"id": 2, "name": "b", "timeout": null},
            {"id": 3, "name": "c", "timeout": 0}
        ]"#;
        let models: Vec<Model> = serde_json::from_str(json).unwrap();
        let timeouts: Vec<u32> = models.iter().map(|m| m.timeout).collect();
        assert_eq!(
            timeouts,
            vec![30, DEFAULT_MODEL_REQUEST_TIMEOUT, DEFAULT_MODEL_REQUEST_TIMEOUT]
        );
    }

    #[test]
    fn draft_excludes_identity_and_timestamps() {
        let draft = ModelDraft::default();
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created").is_none());
        assert_eq!(value["timeout"], DEFAULT_MODEL_REQUEST_TIMEOUT);
    }

    #[test]
    fn payload_accepts_envelope_and_bare() {
        let wrapped: Payload<Vec<KnowledgeBase>> =
            serde_json::from_str(r#"{"code":200,"data":[{"id":1,"name":"kb"}]}"#).unwrap();
        assert_eq!(wrapped.into_inner().len(), 1);

        let bare: Payload<Vec<KnowledgeBase>> =
            serde_json::from_str(r#"[{"id":1,"name":"kb"},{"id":2,"name":"kb2"}]"#).unwrap();
        assert_eq!(bare.into_inner().len(), 2);
    }

    #[test]
    fn apply_draft_keeps_id_and_created() {
        let now = Utc::now();
        let mut model = Model::from_draft(3, ModelDraft::default(), now);
        let later = now + chrono::Duration::seconds(5);
        model.apply_draft(
            ModelDraft {
                name: "renamed".into(),
                ..ModelDraft::default()
            },
            later,
        );
        assert_eq!(model.id, 3);
        assert_eq!(model.created, Some(now));
        assert_eq!(model.modified, Some(later));
        assert_eq!(model.name, "renamed");
    }
}
