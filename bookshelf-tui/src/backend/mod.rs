//!
//! src/backend/mod.rs
//! Backend 层：请求执行与配置
//!
//! Backend 层与 UI 完全解耦。Update 层只返回 `Command`，
//! 真正的网络请求由这里的执行器在 tokio 运行时上完成。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!         mod executor;           // 请求执行器
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、请求执行器（Executor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/executor.rs 中定义：
//!
//!         Executor 持有：
//!             - api: Arc<dyn BookApi>         // bookshelf-client 提供的 HTTP 客户端
//!             - runtime: Handle               // tokio 运行时句柄
//!             - tx: UnboundedSender<ApiMessage>
//!
//!         执行流程：
//!             update() 返回 Command::Request { ticket, call }
//!                 ↓
//!             Executor::execute() 在运行时上 spawn 一个任务
//!                 ↓
//!             任务调用 BookApi，把结果包装成 ApiMessage
//!                 ↓
//!             通过 tx 发回，app.rs 每轮循环用 try_recv 取出
//!
//!         List / Search 是可取代的：同一 lane 上的新请求会 abort 旧任务。
//!         即便旧结果已经在通道里，Update 层也会按 Ticket 丢弃它。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         配置文件位置：<config dir>/bookshelf-tui/config.json
//!
//!         {
//!             "api_base_url": "http://localhost:8080/api",
//!             "request_timeout_secs": null,
//!             "theme": "dark",
//!             "language": "en-US"
//!         }
//!
//!         - 文件不存在：使用默认配置（启动时写出一份默认文件）
//!         - 文件格式错误：启动失败并报告路径
//!         - 环境变量 BOOKSHELF_API_URL 覆盖 api_base_url（只在本次运行生效，不写回文件）
//!

mod config_service;
mod executor;

pub use config_service::{LocalConfigService, API_URL_ENV};
pub use executor::Executor;
