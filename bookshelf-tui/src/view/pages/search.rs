//! 搜索页面视图

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::SearchFocus;
use crate::model::App;
use crate::view::components::{book_table, message};
use crate::view::theme::{colors, Styles};

/// 页面区域划分：输入框 + 消息行 + 结果表格
pub fn regions(area: Rect) -> (Rect, Rect, Rect) {
    let [input_area, message_area, table_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    (input_area, message_area, table_area)
}

/// 渲染搜索页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let (input_area, message_area, table_area) = regions(area);
    let content_focused = app.focus.is_content() && !app.modal.is_open();

    render_input(app, frame, input_area, content_focused);

    let table = &app.search.table;
    message::render(&table.message, table.loading, frame, message_area);

    if table.shows_empty() {
        let line = Line::styled(format!("  {}", t().search.no_results), Styles::muted());
        frame.render_widget(Paragraph::new(line), table_area);
    } else {
        book_table::render(
            table,
            frame,
            table_area,
            content_focused && app.search.focus == SearchFocus::Results,
            app.now,
        );
    }
}

/// 渲染搜索输入框
fn render_input(app: &App, frame: &mut Frame, area: Rect, content_focused: bool) {
    let texts = t();
    let c = colors();
    let focused = content_focused && app.search.focus == SearchFocus::Input;

    let block = Block::default()
        .title(format!(" {} ", texts.search.input_label))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let line = if app.search.query.is_empty() && !focused {
        Line::styled(texts.search.placeholder, Styles::muted())
    } else if focused {
        Line::styled(format!("{}▎", app.search.query), Style::default().fg(c.highlight))
    } else {
        Line::styled(app.search.query.as_str(), Style::default().fg(c.fg))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
