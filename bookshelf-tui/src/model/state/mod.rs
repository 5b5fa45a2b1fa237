//! 页面状态模块
//!
//! 定义各个页面、表单与弹窗的状态数据结构

mod books;
mod form;
mod modal;
mod notice;
mod search;

pub use books::{BookTable, RowAction, RowIntent};
pub use form::{BookForm, FormField};
pub use modal::{DeleteFocus, DeleteModal, EditModal, ModalKind, ModalState, EDIT_CLOSE_DELAY};
pub use notice::{MessageRegion, Severity, Toast};
pub use search::{SearchFocus, SearchState};
