//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = backend_rx.try_recv() {     // 应用已完成的后台请求
//!         update::update(&mut app, AppMessage::Backend(msg))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update::update(&mut app, msg)                   // 更新状态
//!     }
//! }
//!
//! update 返回的 Command 都交给 Executor 在后台运行，界面从不阻塞在网络上。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{Command, Executor};
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &Executor,
    backend_rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    // 首页的列表
    dispatch(executor, update::enter_page(app));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用后台结果
        while let Ok(msg) = backend_rx.try_recv() {
            let command = update::update(app, AppMessage::Backend(msg));
            dispatch(executor, command);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let command = update::update(app, msg);
            dispatch(executor, command);
        }
    }

    Ok(())
}

fn dispatch(executor: &Executor, command: Option<Command>) {
    if let Some(command) = command {
        executor.dispatch(command);
    }
}
