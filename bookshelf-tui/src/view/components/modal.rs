//! 弹窗组件
//!
//! 弹窗打开时先把整个画面调暗作为遮罩，再在中央绘制对话框。
//! 删除确认位于编辑弹窗之上。

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::{DeleteFocus, DeleteModal, EditModal, FormField, ModalKind};
use crate::model::App;
use crate::view::theme::{colors, Styles};

use super::form::{self, FormLabels, FORM_HEIGHT};

const EDIT_SIZE: (u16, u16) = (56, FORM_HEIGHT + 3);
const DELETE_SIZE: (u16, u16) = (52, 10);

/// 删除确认按钮所在行（相对对话框内侧）
const DELETE_BUTTON_ROW: u16 = 6;
/// 删除确认按钮之间的间隔
const DELETE_BUTTON_GAP: &str = "   ";

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let screen = frame.area();

    if let Some(edit) = &app.modal.edit {
        dim_backdrop(frame, screen);
        render_edit(edit, frame, centered_rect(EDIT_SIZE.0, EDIT_SIZE.1, screen));
    }

    if let Some(delete) = &app.modal.delete {
        dim_backdrop(frame, screen);
        render_delete(delete, frame, centered_rect(DELETE_SIZE.0, DELETE_SIZE.1, screen));
    }
}

/// 最上层弹窗的对话框区域，点击此区域之外即点击遮罩
pub fn dialog_area(app: &App, screen: Rect) -> Option<Rect> {
    let (width, height) = match app.modal.active()? {
        ModalKind::Edit => EDIT_SIZE,
        ModalKind::Delete => DELETE_SIZE,
    };
    Some(centered_rect(width, height, screen))
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 调暗背景
fn dim_backdrop(frame: &mut Frame, area: Rect) {
    let style = Style::default()
        .fg(colors().backdrop)
        .add_modifier(Modifier::DIM);
    frame.buffer_mut().set_style(area, style);
}

/// 对话框外框
fn dialog_block(title: &str) -> Block<'_> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.dialog_bg).fg(c.fg))
}

/// 编辑弹窗的按钮文字
fn edit_labels() -> FormLabels {
    let texts = t();
    FormLabels {
        submit: texts.form.submit_save,
        busy: texts.form.busy_save,
    }
}

/// 编辑弹窗中表单的区域
fn edit_form_area(dialog: Rect) -> Rect {
    let inner = dialog_block("").inner(dialog);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染编辑弹窗
fn render_edit(edit: &EditModal, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(dialog_block(t().modal.edit_title), area);
    form::render(&edit.form, &edit_labels(), frame, edit_form_area(area), true);
}

/// 编辑弹窗的鼠标命中测试
pub fn edit_field_at(edit: &EditModal, dialog: Rect, position: Position) -> Option<FormField> {
    form::field_at(&edit.form, &edit_labels(), edit_form_area(dialog), position)
}

/// 渲染删除确认弹窗
fn render_delete(delete: &DeleteModal, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    frame.render_widget(Clear, area);

    let block = dialog_block(texts.modal.delete_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (cancel_text, confirm_text) = delete_button_labels(delete);
    let cancel_style = if delete.focus == DeleteFocus::Cancel {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if delete.is_deleting() {
        Styles::muted().add_modifier(Modifier::DIM)
    } else if delete.focus == DeleteFocus::Confirm {
        Style::default()
            .bg(c.error)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.modal.delete_prompt, Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", texts.modal.delete_book_title), Styles::muted()),
            Span::styled(
                delete.book.name.as_str(),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", texts.modal.delete_book_author), Styles::muted()),
            Span::styled(delete.book.author.as_str(), Style::default().fg(c.fg)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    let buttons = Line::from(vec![
        Span::styled(cancel_text, cancel_style),
        Span::raw(DELETE_BUTTON_GAP),
        Span::styled(confirm_text, confirm_style),
    ]);
    let (row, _) = delete_button_spans(delete, inner);
    frame.render_widget(Paragraph::new(buttons), row);
}

/// 删除确认弹窗的两个按钮文字
fn delete_button_labels(delete: &DeleteModal) -> (String, String) {
    let texts = t();
    let confirm = if delete.is_deleting() {
        texts.modal.deleting
    } else {
        texts.modal.confirm_delete
    };
    (format!("[ {} ]", texts.common.cancel), format!("[ {confirm} ]"))
}

/// 删除确认按钮行的区域，以及两个按钮各自的横向范围
///
/// 按钮行在对话框内水平居中。
fn delete_button_spans(delete: &DeleteModal, inner: Rect) -> (Rect, [(DeleteFocus, u16, u16); 2]) {
    let (cancel_text, confirm_text) = delete_button_labels(delete);
    let width = |text: &str| u16::try_from(text.width()).unwrap_or(u16::MAX);
    let cancel_width = width(&cancel_text);
    let gap_width = width(DELETE_BUTTON_GAP);
    let line_width = cancel_width
        .saturating_add(gap_width)
        .saturating_add(width(&confirm_text))
        .min(inner.width);

    let start = inner.x + (inner.width - line_width) / 2;
    let confirm_start = start.saturating_add(cancel_width).saturating_add(gap_width);
    let row = Rect::new(
        start,
        inner.y + DELETE_BUTTON_ROW.min(inner.height.saturating_sub(1)),
        line_width,
        1.min(inner.height),
    );
    (
        row,
        [
            (DeleteFocus::Cancel, start, start.saturating_add(cancel_width)),
            (DeleteFocus::Confirm, confirm_start, start + line_width),
        ],
    )
}

/// 删除确认弹窗的鼠标命中测试
pub fn delete_button_at(
    delete: &DeleteModal,
    dialog: Rect,
    position: Position,
) -> Option<DeleteFocus> {
    let inner = dialog_block("").inner(dialog);
    let (row, spans) = delete_button_spans(delete, inner);
    if !row.contains(position) {
        return None;
    }
    spans
        .into_iter()
        .find(|(_, from, to)| position.x >= *from && position.x < *to)
        .map(|(focus, _, _)| focus)
}
