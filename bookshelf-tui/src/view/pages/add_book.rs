//! 添加图书页面视图

use ratatui::{layout::Rect, Frame};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::form::{self, FormLabels};

/// 添加表单的按钮文字
pub fn labels() -> FormLabels {
    let texts = t();
    FormLabels {
        submit: texts.form.submit_add,
        busy: texts.form.busy_add,
    }
}

/// 表单区域（页面内侧留出左边距和首行）
pub fn form_area(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(1),
    )
}

/// 渲染添加图书页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    form::render(
        &app.add_form,
        &labels(),
        frame,
        form_area(area),
        app.focus.is_content() && !app.modal.is_open(),
    );
}
