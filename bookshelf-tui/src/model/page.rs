//! 页面状态定义

/// 页面枚举
///
/// 同一时刻只有一个页面处于激活状态，切换页面即替换这个值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 书库列表
    #[default]
    Books,
    /// 搜索
    Search,
    /// 添加图书
    AddBook,
}

impl Page {
    /// 所有页面（导航栏顺序）
    pub const ALL: [Page; 3] = [Page::Books, Page::Search, Page::AddBook];

    /// 数字快捷键对应的页面（`1`-`3`）
    pub fn from_digit(digit: char) -> Option<Page> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }
}
