//! 后台请求结果消息

use bookshelf_client::{Acknowledgement, ApiError, Book};

use crate::model::Ticket;

/// 后台请求结果
#[derive(Debug, Clone, PartialEq)]
pub enum ApiMessage {
    BooksLoaded {
        ticket: Ticket,
        result: Result<Vec<Book>, ApiError>,
    },
    SearchCompleted {
        ticket: Ticket,
        result: Result<Vec<Book>, ApiError>,
    },
    BookCreated {
        ticket: Ticket,
        result: Result<Acknowledgement, ApiError>,
    },
    BookUpdated {
        ticket: Ticket,
        result: Result<Acknowledgement, ApiError>,
    },
    BookDeleted {
        ticket: Ticket,
        result: Result<Acknowledgement, ApiError>,
    },
}

impl ApiMessage {
    pub fn ticket(&self) -> Ticket {
        match self {
            ApiMessage::BooksLoaded { ticket, .. }
            | ApiMessage::SearchCompleted { ticket, .. }
            | ApiMessage::BookCreated { ticket, .. }
            | ApiMessage::BookUpdated { ticket, .. }
            | ApiMessage::BookDeleted { ticket, .. } => *ticket,
        }
    }
}
