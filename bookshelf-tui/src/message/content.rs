//! 内容面板消息
//!
//! 处理内容面板中的操作：表格选择、行操作、表单输入

use crate::model::state::{FormField, RowIntent};

/// 内容面板消息
#[derive(Debug, Clone, PartialEq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 行操作 ==========
    /// 对某一行执行编辑或删除
    Row(RowIntent),

    // ========== 输入 ==========
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 提交（添加表单或搜索）
    Submit,

    // ========== 鼠标 ==========
    /// 点击添加表单的字段或按钮
    ClickField(FormField),
}
