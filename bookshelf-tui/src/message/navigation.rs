//! 导航相关消息

use crate::model::Page;

/// 导航消息
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（进入选中的页面）
    Confirm,
    /// 直接切换到指定页面（数字键或鼠标点击）
    SelectTab(Page),
    /// 空书库的“添加第一本书”
    AddFirstBook,
}
