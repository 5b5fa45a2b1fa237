//! 内容面板更新逻辑

use super::{issue, run_search, ApiCall, Command};
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::state::{BookTable, FormField, RowAction, RowIntent, SearchFocus, Severity};
use crate::model::{App, FocusPanel, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match app.current_page {
        Page::Books => update_books(app, msg),
        Page::Search => update_search(app, msg),
        Page::AddBook => update_add_book(app, msg),
    }
}

/// 书库页面
fn update_books(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match msg {
        ContentMessage::Row(intent) => dispatch_row(app, &intent, Page::Books),
        other => {
            select_in(&mut app.books, &other);
            Vec::new()
        }
    }
}

/// 搜索页面
fn update_search(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match msg {
        ContentMessage::Row(intent) => dispatch_row(app, &intent, Page::Search),
        ContentMessage::Input(ch) => {
            if app.search.focus == SearchFocus::Input {
                app.search.query.push(ch);
            }
            Vec::new()
        }
        ContentMessage::Backspace => {
            if app.search.focus == SearchFocus::Input {
                app.search.query.pop();
            }
            Vec::new()
        }
        ContentMessage::NextField | ContentMessage::PrevField => {
            app.search.toggle_focus();
            Vec::new()
        }
        ContentMessage::Submit => run_search(app),
        other => {
            select_in(&mut app.search.table, &other);
            Vec::new()
        }
    }
}

/// 添加图书页面
fn update_add_book(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match msg {
        ContentMessage::Input(ch) => app.add_form.input(ch),
        ContentMessage::Backspace => app.add_form.backspace(),
        ContentMessage::NextField | ContentMessage::SelectNext => app.add_form.next_field(),
        ContentMessage::PrevField | ContentMessage::SelectPrevious => app.add_form.prev_field(),
        ContentMessage::Submit => return submit_create(app),
        ContentMessage::ClickField(field) => {
            app.focus = FocusPanel::Content;
            app.add_form.focus = field;
            if field == FormField::Submit {
                return submit_create(app);
            }
        }
        ContentMessage::SelectFirst | ContentMessage::SelectLast | ContentMessage::Row(_) => {}
    }
    Vec::new()
}

/// 提交添加表单
fn submit_create(app: &mut App) -> Vec<Command> {
    // 请求进行中，忽略重复提交
    if app.add_form.is_submitting() {
        return Vec::new();
    }

    let Ok(draft) = app.add_form.draft() else {
        app.add_form
            .message
            .show_message(t().messages.fill_all_fields, Severity::Error, app.now);
        return Vec::new();
    };

    let command = issue(app, ApiCall::CreateBook(draft));
    let Command::Request { ticket, .. } = &command;
    app.add_form.pending = Some(*ticket);
    vec![command]
}

/// 表格选择
fn select_in(table: &mut BookTable, msg: &ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => table.select_previous(),
        ContentMessage::SelectNext => table.select_next(),
        ContentMessage::SelectFirst => table.select_first(),
        ContentMessage::SelectLast => table.select_last(),
        _ => {}
    }
}

/// 按 id 在来源页面的表格中找到图书，打开对应弹窗
fn dispatch_row(app: &mut App, intent: &RowIntent, source: Page) -> Vec<Command> {
    let table = match source {
        Page::Search => &app.search.table,
        Page::Books | Page::AddBook => &app.books,
    };

    let Some(row) = table.find(&intent.id) else {
        log::debug!("Row intent for unknown book #{} ignored", intent.id);
        return Vec::new();
    };
    let book = row.book.clone();

    match intent.action {
        RowAction::Edit => app.modal.open_edit(&book),
        RowAction::Delete => app.modal.open_delete(&book),
    }
    Vec::new()
}
