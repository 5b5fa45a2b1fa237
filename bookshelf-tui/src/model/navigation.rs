//! 导航状态定义

use super::Page;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    page: Page::Books,
                    icon: "≡",
                },
                NavItem {
                    page: Page::Search,
                    icon: "?",
                },
                NavItem {
                    page: Page::AddBook,
                    icon: "+",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 跳转到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳转到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中项对应的页面
    pub fn current_page(&self) -> Option<Page> {
        self.items.get(self.selected).map(|item| item.page)
    }

    /// 让高亮项跟随页面（数字键或鼠标切页时使用）
    pub fn highlight(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.page == page) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
