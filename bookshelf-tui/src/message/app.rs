//! 应用主消息枚举

use std::time::Instant;

use super::{ApiMessage, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求完成
    Api(ApiMessage),

    /// 刷新当前页面
    Refresh,

    /// 时钟推进：过期消息、Toast 与延迟关闭的弹窗
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
