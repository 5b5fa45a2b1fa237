//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::{ModalKind, SearchFocus};
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    // 弹窗打开时只提示弹窗内的操作
    match app.modal.active() {
        Some(ModalKind::Edit) => {
            hints.push(("Tab", h.next_field));
            hints.push(("Enter", h.submit));
            hints.push(("Esc", h.close));
            return hints;
        }
        Some(ModalKind::Delete) => {
            hints.push(("←→", h.select));
            hints.push(("Enter", h.confirm));
            hints.push(("Esc", h.close));
            return hints;
        }
        None => {}
    }

    hints.push(("Tab", h.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.open));
            hints.push(("1-3", h.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Books => {
                hints.push(("↑↓", h.select));
                hints.push(("e", h.edit));
                hints.push(("d", h.delete));
                if app.books.shows_empty() {
                    hints.push(("a", h.add_first));
                }
            }
            Page::Search => match app.search.focus {
                SearchFocus::Input => {
                    hints.push(("Enter", h.search));
                    hints.push(("↓", h.select));
                }
                SearchFocus::Results => {
                    hints.push(("↑↓", h.select));
                    hints.push(("e", h.edit));
                    hints.push(("d", h.delete));
                }
            },
            Page::AddBook => {
                hints.push(("↑↓", h.next_field));
                hints.push(("Enter", h.submit));
            }
        },
    }

    if app.current_page != Page::AddBook {
        hints.push(("Alt+r", h.refresh));
    }
    hints.push(("q", h.quit));

    hints
}
