//! AgentCraft Console
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 命令执行与配置 (`backend/`)
//!
//! main.rs 的执行顺序：
//!
//!     解析命令行 → 读取配置 → 初始化日志 → 应用语言/主题
//!     → 创建后端服务与执行器 → init_terminal() → app::run() → restore_terminal()
//!
//! 终端处于 raw mode 时日志只写文件，不写 stdout。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use backend::{ConfigService, Executor, LocalConfigService, Services};
use util::{init_logging, init_terminal, restore_terminal};

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal console for AgentCraft LLM proxies and knowledge bases", long_about = None)]
struct Args {
    /// 使用内存后端（附带示例数据），不访问网络
    #[arg(long)]
    demo: bool,

    /// 配置文件路径（默认位于系统配置目录）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 覆盖配置中的后端地址
    #[arg(long)]
    api: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. 读取配置
    let config_service = match &args.config {
        Some(path) => LocalConfigService::new(path.clone()),
        None => LocalConfigService::in_dir(&LocalConfigService::default_dir()?),
    };
    let data_dir = config_service
        .path()
        .parent()
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let mut config = config_service.load()?;
    if let Some(api) = args.api {
        config.api_base_url = api;
    }

    // 2. 初始化日志（guard 存活到退出，保证落盘）
    let _log_guard = init_logging(&data_dir.join("logs"))?;
    log::info!(
        "Starting AgentCraft console (config: {}, demo: {})",
        config_service.path().display(),
        args.demo
    );

    // 3. 语言与主题
    if let Some(language) = i18n::Language::from_code(&config.language) {
        i18n::set_language(language);
    }
    view::theme::set_theme(config.theme);

    // 4. 后端服务与执行器
    let services = if args.demo {
        Services::demo()
    } else {
        Services::http(&config).context("invalid backend configuration")?
    };
    let (executor, mut backend_rx) = Executor::new(services, Arc::new(config_service))?;

    let mut app = model::App::new(config, args.demo);

    // 5. 运行主循环，无论成功失败都恢复终端
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &executor, &mut backend_rx);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("Console exited with error: {e:#}");
    }
    result
}
