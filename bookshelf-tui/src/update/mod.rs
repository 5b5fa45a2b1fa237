//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方，并且不做任何 I/O：
//! 需要访问网络时，返回 `Command` 交给 backend 执行器。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod api;                // 后台请求结果处理
//!         mod command;            // Command / ApiCall 定义
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 导航子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {...}
//!
//!
//!     数据流：
//!         用户在添加页面按 Enter
//!             ↓
//!         content::update 校验表单，返回 Command::Request { CreateBook }
//!             ↓
//!         app.rs 把 Command 交给 Executor，Executor 在 tokio 上执行请求
//!             ↓
//!         请求完成后 Executor 发回 AppMessage::Api(BookCreated { .. })
//!             ↓
//!         api::update 显示结果消息，必要时返回新的 Command（例如刷新列表）
//!

mod api;
mod command;
mod content;
mod modal;
mod navigation;


use std::time::Instant;

use bookshelf_client::SearchQuery;

pub use command::{ApiCall, Command};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::state::ModalKind;
use crate::model::{App, Page};

/// 处理应用消息，更新状态，返回需要执行的副作用
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            Vec::new()
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Api(api_msg) => api::update(app, api_msg),

        AppMessage::Refresh => refresh(app),

        AppMessage::Tick(now) => {
            tick(app, now);
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}

/// 启动时的副作用：加载书库（默认页面即书库）
pub fn init(app: &mut App) -> Vec<Command> {
    vec![load_books(app)]
}

/// 发出请求，取代同一 lane 上的旧请求
fn issue(app: &mut App, call: ApiCall) -> Command {
    let ticket = app.requests.issue(call.lane());
    Command::Request { ticket, call }
}

/// 加载书库列表
fn load_books(app: &mut App) -> Command {
    app.books.begin_loading();
    issue(app, ApiCall::ListBooks)
}

/// 以当前输入框内容执行搜索，空查询只显示错误
fn run_search(app: &mut App) -> Vec<Command> {
    let Ok(query) = SearchQuery::new(&app.search.query) else {
        app.search.table.message.show_error(t().messages.empty_search);
        return Vec::new();
    };

    app.search.table.begin_loading();
    app.search.table.hide_empty();
    vec![issue(app, ApiCall::SearchBooks(query))]
}

/// 刷新当前页面
fn refresh(app: &mut App) -> Vec<Command> {
    match app.current_page {
        Page::Books => vec![load_books(app)],
        Page::Search => run_search(app),
        Page::AddBook => Vec::new(),
    }
}

/// 推进时钟：过期消息、Toast，并关闭到时的编辑弹窗
fn tick(app: &mut App, now: Instant) {
    app.now = now;

    app.books.message.expire(now);
    app.search.table.message.expire(now);
    app.add_form.message.expire(now);

    if let Some(edit) = app.modal.edit.as_mut() {
        edit.form.message.expire(now);
        if edit.close_at.is_some_and(|deadline| deadline <= now) {
            app.modal.close(ModalKind::Edit);
        }
    }

    if app.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
        app.toast = None;
    }
}
