//! 图书表单组件（添加页面与编辑弹窗共用）

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::{BookForm, FormField};
use crate::view::theme::{colors, Styles};

use super::message;

/// 表单按钮文字
pub struct FormLabels {
    pub submit: &'static str,
    /// 请求进行中的文字
    pub busy: &'static str,
}

/// 表单占用的行数
pub const FORM_HEIGHT: u16 = 10;

/// 按钮所在行（相对表单顶部）
const BUTTON_ROW: u16 = 6;
/// 按钮之间的间隔
const BUTTON_GAP: &str = "  ";

/// 渲染表单
pub fn render(form: &BookForm, labels: &FormLabels, frame: &mut Frame, area: Rect, focused: bool) {
    let texts = t();
    let c = colors();

    let mut lines = Vec::new();

    // === 文本字段 ===
    for (field, label, value) in [
        (FormField::Name, texts.form.name_label, &form.name),
        (FormField::Author, texts.form.author_label, &form.author),
    ] {
        let field_focused = focused && form.focus == field;
        lines.push(Line::styled(label, Style::default().fg(c.muted)));

        let display = if field_focused {
            format!("  {value}▎")
        } else {
            format!("  {value}")
        };
        let style = if field_focused {
            Style::default().fg(c.highlight)
        } else {
            Style::default().fg(c.fg)
        };
        lines.push(Line::styled(display, style));
        lines.push(Line::from(""));
    }

    // === 按钮 ===
    let mut buttons = Vec::new();
    for (index, (field, text)) in button_labels(form, labels).into_iter().enumerate() {
        if index > 0 {
            buttons.push(Span::raw(BUTTON_GAP));
        }
        let disabled = field == FormField::Submit && form.is_submitting();
        buttons.push(Span::styled(
            text,
            button_style(focused && form.focus == field, disabled),
        ));
    }
    lines.push(Line::from(buttons));
    lines.push(Line::from(""));

    let fields_height = FORM_HEIGHT.saturating_sub(2).min(area.height);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(area.x, area.y, area.width, fields_height),
    );

    // === 消息区域 ===
    if area.height > FORM_HEIGHT - 2 {
        let message_area = Rect::new(area.x, area.y + FORM_HEIGHT - 2, area.width, 1);
        message::render(&form.message, false, frame, message_area);
    }
}

/// 按钮及其文字，按从左到右的顺序
fn button_labels(form: &BookForm, labels: &FormLabels) -> Vec<(FormField, String)> {
    let submit_text = if form.is_submitting() {
        labels.busy
    } else {
        labels.submit
    };
    let mut buttons = vec![(FormField::Submit, format!("[ {submit_text} ]"))];
    if form.has_cancel() {
        buttons.push((FormField::Cancel, format!("[ {} ]", t().common.cancel)));
    }
    buttons
}

/// 鼠标命中测试：点击位置对应的字段或按钮
///
/// `area` 与 `render` 使用的区域相同。
pub fn field_at(
    form: &BookForm,
    labels: &FormLabels,
    area: Rect,
    position: Position,
) -> Option<FormField> {
    if !area.contains(position) {
        return None;
    }

    match position.y - area.y {
        0 | 1 => Some(FormField::Name),
        3 | 4 => Some(FormField::Author),
        BUTTON_ROW => {
            let gap = u16::try_from(BUTTON_GAP.width()).unwrap_or(0);
            let mut x = area.x;
            for (field, text) in button_labels(form, labels) {
                let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
                if position.x >= x && position.x < x.saturating_add(width) {
                    return Some(field);
                }
                x = x.saturating_add(width).saturating_add(gap);
            }
            None
        }
        _ => None,
    }
}

fn button_style(focused: bool, disabled: bool) -> Style {
    if disabled {
        Styles::muted().add_modifier(Modifier::DIM)
    } else if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    }
}
