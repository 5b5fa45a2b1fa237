//! Update 层产出的副作用描述
//!
//! Update 层本身不做 I/O，只返回 `Command`，由 backend 执行器负责执行。

use bookshelf_client::{BookDraft, BookId, SearchQuery};

use crate::model::{Lane, Ticket};

/// 需要执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 发起一次 API 请求
    Request { ticket: Ticket, call: ApiCall },
}

/// API 调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListBooks,
    SearchBooks(SearchQuery),
    CreateBook(BookDraft),
    UpdateBook { id: BookId, draft: BookDraft },
    DeleteBook(BookId),
}

impl ApiCall {
    /// 调用所属的 lane
    pub fn lane(&self) -> Lane {
        match self {
            ApiCall::ListBooks => Lane::List,
            ApiCall::SearchBooks(_) => Lane::Search,
            ApiCall::CreateBook(_) => Lane::Create,
            ApiCall::UpdateBook { .. } => Lane::Update,
            ApiCall::DeleteBook(_) => Lane::Delete,
        }
    }
}
