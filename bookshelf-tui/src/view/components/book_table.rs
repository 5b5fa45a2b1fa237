//! 图书表格组件
//!
//! 书库页面与搜索结果共用。每行最右侧是 `[Edit] [Delete]` 操作列，
//! 鼠标点击通过 `intent_at` 换算成带图书 id 的 `RowIntent`。

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, HighlightSpacing, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::{BookTable, RowAction, RowIntent};
use crate::view::theme::{colors, Styles};

/// 操作按钮文字
fn action_labels() -> (String, String) {
    let texts = t();
    (
        format!("[{}]", texts.common.edit),
        format!("[{}]", texts.common.delete),
    )
}

/// 按显示宽度计算，兼容中文
fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// 操作列宽度
fn actions_width() -> u16 {
    let (edit, delete) = action_labels();
    display_width(&edit) + 1 + display_width(&delete)
}

/// 让选中行可见的最小滚动偏移
pub fn visible_offset(selected: usize, visible_rows: usize) -> usize {
    selected.saturating_sub(visible_rows.saturating_sub(1))
}

/// 渲染图书表格
pub fn render(table: &BookTable, frame: &mut Frame, area: Rect, focused: bool, now: Instant) {
    let texts = t();
    let c = colors();
    let (edit_label, delete_label) = action_labels();

    let header = Row::new([
        texts.books.col_id,
        texts.books.col_name,
        texts.books.col_author,
        texts.books.col_actions,
    ])
    .style(Styles::muted().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .map(|row| {
            // 淡入前以暗色绘制
            let style = if row.is_revealed(now) {
                Style::default().fg(c.fg)
            } else {
                Style::default().fg(c.muted).add_modifier(Modifier::DIM)
            };
            let actions = Line::from(vec![
                Span::styled(edit_label.clone(), Style::default().fg(c.highlight)),
                Span::raw(" "),
                Span::styled(delete_label.clone(), Style::default().fg(c.error)),
            ]);
            Row::new(vec![
                Cell::from(row.label.as_str()),
                Cell::from(row.book.name.as_str()),
                Cell::from(row.book.author.as_str()),
                Cell::from(actions),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(actions_width()),
    ];

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always);

    let visible_rows = usize::from(area.height.saturating_sub(1));
    let mut state = TableState::default()
        .with_offset(visible_offset(table.selected, visible_rows))
        .with_selected(if table.rows().is_empty() {
            None
        } else {
            Some(table.selected)
        });

    frame.render_stateful_widget(widget, area, &mut state);
}

/// 鼠标点击位置对应的行操作
pub fn intent_at(table: &BookTable, area: Rect, position: Position) -> Option<RowIntent> {
    if !area.contains(position) || position.y == area.y {
        // 表头
        return None;
    }

    let visible_rows = usize::from(area.height.saturating_sub(1));
    let index = visible_offset(table.selected, visible_rows) + usize::from(position.y - area.y - 1);
    let row = table.rows().get(index)?;

    let (edit, _) = action_labels();
    let edit_width = display_width(&edit);
    let actions_x = area.right().saturating_sub(actions_width());
    if position.x < actions_x {
        return None;
    }

    let offset = position.x - actions_x;
    if offset < edit_width {
        Some(row.intent(RowAction::Edit))
    } else if offset > edit_width {
        Some(row.intent(RowAction::Delete))
    } else {
        None
    }
}
