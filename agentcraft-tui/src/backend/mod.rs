//! Backend 层：业务服务
//!
//!     config_service.rs   控制台配置的加载与保存
//!     command.rs          Update 层产生的副作用描述
//!     executor.rs         在 tokio 运行时上执行命令，结果经 mpsc 回传 UI 线程
//!
//! [`Services`] 持有每种资源的 `CrudService`，
//! HTTP 模式与演示模式只在构造时不同。

mod command;
mod config_service;
mod executor;

use std::sync::Arc;

use agentcraft_client::{
    InMemoryResourceApi, KnowledgeBase, KnowledgeBaseDraft, Model, ModelDraft, Resource,
    ResourceKind, create_resource_client,
};
use agentcraft_core::{CrudService, EditMode};
use anyhow::Result;
use chrono::Utc;

pub use command::Command;
pub use config_service::{ConfigService, ConsoleConfig, LocalConfigService};
pub use executor::Executor;

use crate::message::{BackendMessage, Completion, Operation};
use crate::model::ConsoleResource;

/// 每种资源的 CRUD 服务
#[derive(Clone)]
pub struct Services {
    pub models: CrudService<Model>,
    pub knowledge_bases: CrudService<KnowledgeBase>,
}

impl Services {
    /// 通过 HTTP 访问后端
    pub fn http(config: &ConsoleConfig) -> Result<Self> {
        let client_config = config.client_config();
        Ok(Self {
            models: CrudService::new(create_resource_client::<Model>(&client_config)?),
            knowledge_bases: CrudService::new(create_resource_client::<KnowledgeBase>(
                &client_config,
            )?),
        })
    }

    /// 进程内存后端，带几条示例数据
    pub fn demo() -> Self {
        let now = Utc::now();
        let models = vec![
            Model::from_draft(
                1,
                ModelDraft {
                    name: "qwen-turbo".into(),
                    name_alias: "qwen".into(),
                    url: "https://dashscope.example.com/api/v1".into(),
                    token: "sk-demo-qwen-0001".into(),
                    timeout: 600,
                    description: "通义千问".into(),
                },
                now,
            ),
            Model::from_draft(
                2,
                ModelDraft {
                    name: "gpt4proxy".into(),
                    name_alias: "gpt4".into(),
                    url: "https://api.example.com/v1".into(),
                    token: "sk-demo-gpt4-0002".into(),
                    timeout: 30,
                    description: "prod".into(),
                },
                now,
            ),
        ];
        let knowledge_bases = vec![KnowledgeBase::from_draft(
            1,
            KnowledgeBaseDraft {
                name: "product-manual".into(),
                description: "产品手册".into(),
            },
            now,
        )];

        Self {
            models: CrudService::new(Arc::new(InMemoryResourceApi::with_records(models))),
            knowledge_bases: CrudService::new(Arc::new(InMemoryResourceApi::with_records(
                knowledge_bases,
            ))),
        }
    }

    /// Run one command to completion. `SaveConfig` is not a network
    /// command and yields `None`.
    pub async fn execute(&self, command: Command) -> Option<BackendMessage> {
        let message = match command {
            Command::Refresh(kind) => match kind {
                ResourceKind::Model => self.refresh::<Model>().await,
                ResourceKind::KnowledgeBase => self.refresh::<KnowledgeBase>().await,
                ResourceKind::Agent => return unsupported(kind),
            },
            Command::SaveModel { mode, draft } => self.save::<Model>(mode, draft).await,
            Command::SaveKnowledgeBase { mode, draft } => {
                self.save::<KnowledgeBase>(mode, draft).await
            }
            Command::Delete { kind, id } => match kind {
                ResourceKind::Model => self.delete::<Model>(id).await,
                ResourceKind::KnowledgeBase => self.delete::<KnowledgeBase>(id).await,
                ResourceKind::Agent => return unsupported(kind),
            },
            Command::SaveConfig(_) => return None,
        };
        Some(message)
    }

    async fn refresh<R: ConsoleResource>(&self) -> BackendMessage {
        R::completed(Completion {
            operation: Operation::Refresh,
            result: R::service(self).refresh().await,
        })
    }

    async fn save<R: ConsoleResource>(&self, mode: EditMode, draft: R::Draft) -> BackendMessage {
        R::completed(Completion {
            operation: Operation::Save(mode),
            result: R::service(self).save(mode, &draft).await,
        })
    }

    async fn delete<R: ConsoleResource>(&self, id: i64) -> BackendMessage {
        R::completed(Completion {
            operation: Operation::Delete(id),
            result: R::service(self).delete(id).await,
        })
    }
}

fn unsupported(kind: ResourceKind) -> Option<BackendMessage> {
    log::warn!("[{kind}] No console page for this resource, command dropped");
    None
}

#[cfg(test)]
mod tests {
    use agentcraft_core::CoreError;

    use super::*;

    fn gpt4_draft() -> ModelDraft {
        ModelDraft {
            name: "gpt4proxy".into(),
            name_alias: "gpt4".into(),
            url: "https://api.example.com/v1".into(),
            token: "secret".into(),
            timeout: 30,
            description: "prod".into(),
        }
    }

    fn models(message: Option<BackendMessage>) -> Completion<Model> {
        match message {
            Some(BackendMessage::Models(completion)) => completion,
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn create_then_delete_round_trip() {
        let services = Services::demo();

        let created = models(tokio_test::block_on(services.execute(Command::SaveModel {
            mode: EditMode::Create,
            draft: gpt4_draft(),
        })));
        assert_eq!(created.operation, Operation::Save(EditMode::Create));
        let list = created.result.unwrap();
        let record = list.iter().find(|m| m.name_alias == "gpt4" && m.id > 2).unwrap();
        assert_eq!(record.to_draft(), gpt4_draft());
        assert!(record.created.is_some());
        let id = record.id;

        let deleted = models(tokio_test::block_on(
            services.execute(Command::Delete {
                kind: ResourceKind::Model,
                id,
            }),
        ));
        assert!(deleted.result.unwrap().iter().all(|m| m.id != id));

        let again = models(tokio_test::block_on(
            services.execute(Command::Delete {
                kind: ResourceKind::Model,
                id,
            }),
        ));
        assert!(matches!(
            again.result,
            Err(CoreError::Client(agentcraft_client::ClientError::NotFound { .. }))
        ));
    }

    #[test]
    fn refresh_returns_seed_data() {
        let services = Services::demo();
        let message = tokio_test::block_on(
            services.execute(Command::Refresh(ResourceKind::KnowledgeBase)),
        );
        let Some(BackendMessage::KnowledgeBases(completion)) = message else {
            panic!("unexpected message: {message:?}");
        };
        assert_eq!(completion.operation, Operation::Refresh);
        assert_eq!(completion.result.unwrap().len(), 1);
    }

    #[test]
    fn agent_and_config_commands_produce_nothing() {
        let services = Services::demo();
        assert!(
            tokio_test::block_on(services.execute(Command::Refresh(ResourceKind::Agent)))
                .is_none()
        );
        assert!(
            tokio_test::block_on(
                services.execute(Command::SaveConfig(ConsoleConfig::default()))
            )
            .is_none()
        );
    }

    #[test]
    fn http_services_reject_bad_base_url() {
        let config = ConsoleConfig {
            api_base_url: "ftp://example.com".into(),
            ..ConsoleConfig::default()
        };
        assert!(Services::http(&config).is_err());
    }
}
