//! 右下角浮动通知

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染 Toast，位于状态栏上方的右下角；淡出阶段以暗色绘制
pub fn render(app: &App, frame: &mut Frame, status_area: Rect) {
    let Some(toast) = &app.toast else {
        return;
    };

    let area = toast_area(&toast.text, status_area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let c = colors();
    let style = if toast.is_fading(app.now) {
        Style::default().fg(c.muted).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(toast.text.as_str())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .style(Style::default().bg(c.dialog_bg)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Toast 的位置：贴着状态栏上沿，距右边两格
///
/// 宽度按显示宽度计算，全角字符占两格。
fn toast_area(text: &str, status_area: Rect) -> Rect {
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(status_area.width);
    let height = 3.min(status_area.y);
    let x = (status_area.x + status_area.width)
        .saturating_sub(width)
        .saturating_sub(2)
        .max(status_area.x);
    Rect::new(x, status_area.y - height, width, height)
}
