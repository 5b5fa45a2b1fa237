//! 书库列表页面视图

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::{book_table, message};
use crate::view::theme::{colors, Styles};

/// 空状态中行动按钮所在的行（相对表格区域）
pub const EMPTY_CTA_ROW: u16 = 3;

/// 页面区域划分：消息行 + 表格
pub fn regions(area: Rect) -> (Rect, Rect) {
    let [message_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    (message_area, table_area)
}

/// 渲染书库列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let (message_area, table_area) = regions(area);

    message::render(&app.books.message, app.books.loading, frame, message_area);

    if app.books.shows_empty() {
        render_empty(frame, table_area);
    } else {
        book_table::render(
            &app.books,
            frame,
            table_area,
            app.focus.is_content() && !app.modal.is_open(),
            app.now,
        );
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.books.empty), Styles::muted()),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.books.add_first_book),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}
