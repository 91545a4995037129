//! 命令执行器
//!
//! The UI thread never awaits. Each network command is spawned on a
//! dedicated tokio runtime and its result is sent back over an unbounded
//! channel that the main loop drains every tick.

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{Command, ConfigService, Services};
use crate::message::BackendMessage;

pub struct Executor {
    runtime: Runtime,
    services: Services,
    config_service: Arc<dyn ConfigService>,
    tx: UnboundedSender<BackendMessage>,
}

impl Executor {
    /// 创建执行器，返回结果接收端
    pub fn new(
        services: Services,
        config_service: Arc<dyn ConfigService>,
    ) -> Result<(Self, UnboundedReceiver<BackendMessage>)> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("agentcraft-io")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok((
            Self {
                runtime,
                services,
                config_service,
                tx,
            },
            rx,
        ))
    }

    /// Start `command`; its result arrives later as a [`BackendMessage`].
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {command:?}");

        // 配置文件很小，直接在 UI 线程写入
        if let Command::SaveConfig(config) = command {
            let result = self
                .config_service
                .save(&config)
                .map_err(|e| format!("{e:#}"));
            if let Err(e) = &result {
                log::error!("Failed to save config: {e}");
            }
            self.send(BackendMessage::ConfigSaved(result));
            return;
        }

        let services = self.services.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            if let Some(message) = services.execute(command).await
                && tx.send(message).is_err()
            {
                log::debug!("UI loop has exited, dropping backend result");
            }
        });
    }

    fn send(&self, message: BackendMessage) {
        if self.tx.send(message).is_err() {
            log::debug!("UI loop has exited, dropping backend result");
        }
    }
}
