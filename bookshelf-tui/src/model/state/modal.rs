//! 弹窗状态
//!
//! 编辑弹窗与删除确认弹窗分别记录，互不影响。
//! 两者同时打开时，删除确认位于上层并优先接收输入。

use std::time::{Duration, Instant};

use bookshelf_client::{Book, BookId};

use super::BookForm;
use crate::model::Ticket;

/// 保存成功后编辑弹窗延迟关闭的时长
pub const EDIT_CLOSE_DELAY: Duration = Duration::from_millis(1200);

/// 编辑弹窗
#[derive(Debug, Clone)]
pub struct EditModal {
    /// 被编辑图书的 id
    pub book_id: BookId,
    pub form: BookForm,
    /// 保存成功后自动关闭的时刻
    pub close_at: Option<Instant>,
}

/// 删除确认弹窗内的焦点按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFocus {
    #[default]
    Cancel,
    Confirm,
}

/// 删除确认弹窗
#[derive(Debug, Clone)]
pub struct DeleteModal {
    /// 只读摘要（书名、作者）
    pub book: Book,
    /// 确认按钮绑定的目标 id
    pub target: BookId,
    pub focus: DeleteFocus,
    /// 在途的删除请求
    pub pending: Option<Ticket>,
}

impl DeleteModal {
    pub fn is_deleting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            DeleteFocus::Cancel => DeleteFocus::Confirm,
            DeleteFocus::Confirm => DeleteFocus::Cancel,
        };
    }
}

/// 弹窗种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Edit,
    Delete,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    pub edit: Option<EditModal>,
    pub delete: Option<DeleteModal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开编辑弹窗：预填字段、清除旧消息、聚焦书名
    pub fn open_edit(&mut self, book: &Book) {
        self.edit = Some(EditModal {
            book_id: book.id.clone(),
            form: BookForm::for_book(book),
            close_at: None,
        });
    }

    /// 打开删除确认弹窗
    pub fn open_delete(&mut self, book: &Book) {
        self.delete = Some(DeleteModal {
            book: book.clone(),
            target: book.id.clone(),
            focus: DeleteFocus::default(),
            pending: None,
        });
    }

    pub fn close(&mut self, kind: ModalKind) {
        match kind {
            ModalKind::Edit => self.edit = None,
            ModalKind::Delete => self.delete = None,
        }
    }

    /// 关闭所有打开的弹窗
    pub fn close_all(&mut self) {
        self.edit = None;
        self.delete = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.edit.is_some() || self.delete.is_some()
    }

    /// 位于最上层、接收输入的弹窗
    pub fn active(&self) -> Option<ModalKind> {
        if self.delete.is_some() {
            Some(ModalKind::Delete)
        } else if self.edit.is_some() {
            Some(ModalKind::Edit)
        } else {
            None
        }
    }
}
