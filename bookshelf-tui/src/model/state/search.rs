//! 搜索页面状态

use super::BookTable;

/// 搜索页面内的焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    /// 搜索输入框
    #[default]
    Input,
    /// 结果表格
    Results,
}

/// 搜索页面状态
#[derive(Debug, Default)]
pub struct SearchState {
    /// 输入框内容（未裁剪）
    pub query: String,
    pub focus: SearchFocus,
    /// 搜索结果
    pub table: BookTable,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在输入框与结果之间切换
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SearchFocus::Input => SearchFocus::Results,
            SearchFocus::Results => SearchFocus::Input,
        };
    }
}
