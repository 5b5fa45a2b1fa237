//! 可复用的 UI 组件

pub mod book_table;
pub mod form;
pub mod message;
pub mod modal;
pub mod navigation;
pub mod statusbar;
pub mod toast;
