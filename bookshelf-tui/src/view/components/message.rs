//! 消息区域组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::{MessageRegion, Severity};
use crate::view::theme::{colors, Styles};

/// 渲染消息区域；没有消息但正在加载时显示加载提示
pub fn render(region: &MessageRegion, loading: bool, frame: &mut Frame, area: Rect) {
    let line = match region.current() {
        Some(notice) => Line::styled(notice.text.as_str(), severity_style(notice.severity)),
        None if loading => Line::styled(t().common.loading, Styles::muted()),
        None => return,
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn severity_style(severity: Severity) -> Style {
    let c = colors();
    match severity {
        Severity::Info => Style::default().fg(c.fg),
        Severity::Success => Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        Severity::Error => Style::default().fg(c.error).add_modifier(Modifier::BOLD),
    }
}
