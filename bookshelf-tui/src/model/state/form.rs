//! 图书表单状态
//!
//! 添加页面与编辑弹窗共用这一结构，区别只在于是否带取消按钮。

use bookshelf_client::{ApiError, Book, BookDraft};

use super::MessageRegion;
use crate::model::Ticket;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Author,
    Submit,
    Cancel,
}

impl FormField {
    /// 是否为文本输入字段
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Author)
    }
}

/// 图书表单
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub name: String,
    pub author: String,
    pub focus: FormField,
    /// 在途请求；存在时提交按钮禁用并显示忙碌文字
    pub pending: Option<Ticket>,
    /// 表单消息区域
    pub message: MessageRegion,
    has_cancel: bool,
}

impl BookForm {
    /// 添加页面的表单
    pub fn new() -> Self {
        Self::default()
    }

    /// 编辑弹窗的表单，预填图书数据
    pub fn for_book(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            author: book.author.clone(),
            has_cancel: true,
            ..Self::default()
        }
    }

    pub fn has_cancel(&self) -> bool {
        self.has_cancel
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    fn fields(&self) -> &'static [FormField] {
        if self.has_cancel {
            &[
                FormField::Name,
                FormField::Author,
                FormField::Submit,
                FormField::Cancel,
            ]
        } else {
            &[FormField::Name, FormField::Author, FormField::Submit]
        }
    }

    /// 下一个字段（循环）
    pub fn next_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    /// 上一个字段（循环）
    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }

    /// 输入字符到当前文本字段
    pub fn input(&mut self, ch: char) {
        match self.focus {
            FormField::Name => self.name.push(ch),
            FormField::Author => self.author.push(ch),
            FormField::Submit | FormField::Cancel => {}
        }
    }

    /// 删除当前文本字段的最后一个字符
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Author => {
                self.author.pop();
            }
            FormField::Submit | FormField::Cancel => {}
        }
    }

    /// 清空输入并聚焦书名
    pub fn reset(&mut self) {
        self.name.clear();
        self.author.clear();
        self.focus = FormField::Name;
    }

    /// 校验并生成请求体
    pub fn draft(&self) -> Result<BookDraft, ApiError> {
        BookDraft::new(&self.name, &self.author)
    }
}
