//! 消息区域与 Toast
//!
//! 计时器以截止时间（`Instant`）的形式存放在消息本身，
//! 由 `AppMessage::Tick` 统一过期。新消息会连同截止时间一起替换旧消息，
//! 因此旧消息的计时器不会清掉新消息。

use std::time::{Duration, Instant};

/// 自动消失的消息显示时长
pub const MESSAGE_TTL: Duration = Duration::from_millis(3000);

/// Toast 完全显示的时长
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);

/// Toast 淡出时长
pub const TOAST_FADE: Duration = Duration::from_millis(300);

/// 消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// 一条消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    /// `None` 表示常驻，直到被清除
    pub expires_at: Option<Instant>,
}

/// 页面或表单内的消息区域
#[derive(Debug, Clone, Default)]
pub struct MessageRegion {
    notice: Option<Notice>,
}

impl MessageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示消息，3 秒后自动清除
    pub fn show_message(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.notice = Some(Notice {
            text: text.into(),
            severity,
            expires_at: Some(now + MESSAGE_TTL),
        });
    }

    /// 显示常驻错误
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            severity: Severity::Error,
            expires_at: None,
        });
    }

    /// 清除消息
    pub fn clear(&mut self) {
        self.notice = None;
    }

    /// 到期则清除，返回是否发生了变化
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .notice
            .as_ref()
            .and_then(|n| n.expires_at)
            .is_some_and(|deadline| deadline <= now);
        if expired {
            self.notice = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }
}

/// 右下角浮动通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    fade_at: Instant,
    remove_at: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        let fade_at = now + TOAST_VISIBLE;
        Self {
            text: text.into(),
            fade_at,
            remove_at: fade_at + TOAST_FADE,
        }
    }

    /// 是否处于淡出阶段
    pub fn is_fading(&self, now: Instant) -> bool {
        now >= self.fade_at
    }

    /// 是否应当移除
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.remove_at
    }
}
