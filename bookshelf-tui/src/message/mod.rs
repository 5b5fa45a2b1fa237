//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend → Update 之间的桥梁。
//! 所有的用户操作、后台请求结果和时钟推进都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod api;            // 后台请求结果
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     消息来源有三个：
//!         - event/handler.rs  将按键、鼠标事件翻译成消息
//!         - backend/executor  请求完成后通过通道送回 AppMessage::Api(...)
//!         - app.rs            每轮循环发出 AppMessage::Tick(now)
//!
//!     它们最终都汇入同一个入口：
//!         update::update(&mut app, msg) -> Vec<Command>
//!

mod api;
mod app;
mod content;
mod modal;
mod navigation;

pub use api::ApiMessage;
pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
