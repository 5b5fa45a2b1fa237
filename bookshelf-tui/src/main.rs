//! Bookshelf TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，不做 I/O，返回 `Command`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 请求执行与配置 (`backend/`)
//!
//!
//! main.rs
//! Bookshelf TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，guard 持有到退出
//!     load config             // <config dir>/bookshelf-tui/config.json + BOOKSHELF_API_URL
//!     set_language / theme    // 选择翻译表与配色
//!     tokio runtime           // 后台请求在多线程运行时上执行
//!     HttpBookClient::new()   // bookshelf-client 的 HTTP 客户端
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use bookshelf_client::{BookApi, ClientConfig, HttpBookClient};
use tokio::sync::mpsc;

use backend::{Executor, LocalConfigService, API_URL_ENV};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（guard 必须存活到程序结束）
    let _log_guard = init_logging()?;

    // 2. 加载配置（首次运行时写出默认配置文件），再叠加环境变量覆盖
    let config = LocalConfigService::new()?
        .load_or_init()?
        .with_env_override(std::env::var(API_URL_ENV).ok());
    log::info!(
        "Using API at {} (language {})",
        config.api_base_url,
        config.language.code()
    );

    i18n::set_language(config.language);
    view::theme::set_theme(config.theme);

    // 3. 后台运行时与 HTTP 客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = HttpBookClient::new(
        ClientConfig::new(config.api_base_url.clone())
            .with_timeout(config.request_timeout())
            .with_user_agent(concat!("bookshelf-tui/", env!("CARGO_PKG_VERSION"))),
    )?;
    let api: Arc<dyn BookApi> = Arc::new(client);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut executor = Executor::new(api, runtime.handle().clone(), tx);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config.api_base_url);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut executor, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("Exited with error: {e:#}");
    }

    // 8. 返回结果
    result
}
