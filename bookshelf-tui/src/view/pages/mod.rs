//! 各页面视图

pub mod add_book;
pub mod books;
pub mod search;
