//! 弹窗消息类型

use crate::model::state::{DeleteFocus, FormField};

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMessage {
    /// 关闭弹窗（Esc 关闭所有打开的弹窗）
    Close,

    /// 点击了弹窗外的暗色背景
    BackdropClick,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 确认/提交
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 点击编辑表单的字段或按钮
    ClickField(FormField),

    /// 点击删除确认弹窗的按钮
    ClickDelete(DeleteFocus),
}
