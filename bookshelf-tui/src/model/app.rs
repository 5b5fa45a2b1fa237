//! 应用主状态结构

use std::time::Instant;

use super::state::{BookForm, BookTable, ModalState, SearchFocus, SearchState, Toast};
use super::{FocusPanel, NavigationState, Page, RequestTracker};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 最近一次 Tick 的时刻，Update 层以此为“现在”
    pub now: Instant,

    // === 各页面状态 ===
    /// 书库列表
    pub books: BookTable,
    /// 搜索页面
    pub search: SearchState,
    /// 添加图书表单
    pub add_form: BookForm,

    /// 弹窗状态
    pub modal: ModalState,

    /// 浮动通知
    pub toast: Option<Toast>,

    /// 在途请求
    pub requests: RequestTracker,

    /// API 地址（显示在标题栏）
    pub api_base_url: String,
}

impl App {
    /// 创建新的应用实例
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Books,
            now: Instant::now(),
            books: BookTable::new(),
            search: SearchState::new(),
            add_form: BookForm::new(),
            modal: ModalState::new(),
            toast: None,
            requests: RequestTracker::new(),
            api_base_url: api_base_url.into(),
        }
    }

    /// 当前是否有文本输入框获得焦点（此时单字符快捷键让位于输入）
    pub fn is_editing_text(&self) -> bool {
        if let Some(edit) = &self.modal.edit {
            if self.modal.delete.is_none() {
                return edit.form.focus.is_text();
            }
        }
        if self.modal.is_open() || !self.focus.is_content() {
            return false;
        }
        match self.current_page {
            Page::Books => false,
            Page::Search => self.search.focus == SearchFocus::Input,
            Page::AddBook => self.add_form.focus.is_text(),
        }
    }
}
