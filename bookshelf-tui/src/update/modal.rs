//! 弹窗更新逻辑

use super::{issue, ApiCall, Command};
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::{DeleteFocus, FormField, ModalKind, Severity};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    match msg {
        // Esc：关闭所有打开的弹窗
        ModalMessage::Close => {
            app.modal.close_all();
            Vec::new()
        }

        // 点击背景：关闭最上层的弹窗
        ModalMessage::BackdropClick => {
            if let Some(kind) = app.modal.active() {
                app.modal.close(kind);
            }
            Vec::new()
        }

        other => match app.modal.active() {
            Some(ModalKind::Edit) => handle_edit(app, other),
            Some(ModalKind::Delete) => handle_delete(app, other),
            None => Vec::new(),
        },
    }
}

/// 处理编辑弹窗
fn handle_edit(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    let Some(edit) = app.modal.edit.as_mut() else {
        return Vec::new();
    };

    match msg {
        ModalMessage::NextField => edit.form.next_field(),
        ModalMessage::PrevField => edit.form.prev_field(),
        ModalMessage::Input(ch) => edit.form.input(ch),
        ModalMessage::Backspace => edit.form.backspace(),
        ModalMessage::Confirm => return activate_edit(app),
        ModalMessage::ClickField(field) => {
            edit.form.focus = field;
            if !field.is_text() {
                return activate_edit(app);
            }
        }
        ModalMessage::Close
        | ModalMessage::BackdropClick
        | ModalMessage::ToggleDeleteFocus
        | ModalMessage::ClickDelete(_) => {}
    }
    Vec::new()
}

/// 按当前焦点执行：取消按钮关闭弹窗，其余提交
fn activate_edit(app: &mut App) -> Vec<Command> {
    let on_cancel = app
        .modal
        .edit
        .as_ref()
        .is_some_and(|edit| edit.form.focus == FormField::Cancel);
    if on_cancel {
        app.modal.close(ModalKind::Edit);
        Vec::new()
    } else {
        submit_update(app)
    }
}

/// 提交编辑表单
fn submit_update(app: &mut App) -> Vec<Command> {
    let now = app.now;
    let Some(edit) = app.modal.edit.as_mut() else {
        return Vec::new();
    };

    // 请求进行中，忽略重复提交
    if edit.form.is_submitting() {
        return Vec::new();
    }

    let Ok(draft) = edit.form.draft() else {
        edit.form
            .message
            .show_message(t().messages.fill_all_fields, Severity::Error, now);
        return Vec::new();
    };

    let id = edit.book_id.clone();
    let command = issue(app, ApiCall::UpdateBook { id, draft });
    let Command::Request { ticket, .. } = &command;
    if let Some(edit) = app.modal.edit.as_mut() {
        edit.form.pending = Some(*ticket);
    }
    vec![command]
}

/// 处理删除确认弹窗
fn handle_delete(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    let Some(delete) = app.modal.delete.as_mut() else {
        return Vec::new();
    };

    match msg {
        ModalMessage::ToggleDeleteFocus | ModalMessage::NextField | ModalMessage::PrevField => {
            delete.toggle_focus();
        }
        ModalMessage::Confirm => return activate_delete(app),
        ModalMessage::ClickDelete(focus) => {
            delete.focus = focus;
            return activate_delete(app);
        }
        ModalMessage::Input(_)
        | ModalMessage::Backspace
        | ModalMessage::Close
        | ModalMessage::BackdropClick
        | ModalMessage::ClickField(_) => {}
    }
    Vec::new()
}

/// 按当前焦点执行：取消关闭弹窗，确认发出删除请求
fn activate_delete(app: &mut App) -> Vec<Command> {
    let Some(delete) = app.modal.delete.as_ref() else {
        return Vec::new();
    };

    match delete.focus {
        DeleteFocus::Cancel => {
            app.modal.close(ModalKind::Delete);
            Vec::new()
        }
        DeleteFocus::Confirm => {
            if delete.is_deleting() {
                return Vec::new();
            }
            let target = delete.target.clone();
            let command = issue(app, ApiCall::DeleteBook(target));
            let Command::Request { ticket, .. } = &command;
            if let Some(delete) = app.modal.delete.as_mut() {
                delete.pending = Some(*ticket);
            }
            vec![command]
        }
    }
}
