//! 左侧导航面板组件

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation() && !app.modal.is_open()));

    // 构建导航项列表
    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let is_active = nav_item.page == app.current_page;
            let prefix = if is_selected { "▶ " } else { "  " };

            let content = format!(
                "{}{} {} {}",
                prefix,
                i + 1,
                nav_item.icon,
                page_label(nav_item.page)
            );

            let style = if is_selected {
                Styles::selected()
            } else if is_active {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 导航项标签
pub fn page_label(page: Page) -> &'static str {
    let texts = t();
    match page {
        Page::Books => texts.nav.books,
        Page::Search => texts.nav.search,
        Page::AddBook => texts.nav.add_book,
    }
}

/// 鼠标点击位置对应的导航项
pub fn item_at(app: &App, area: Rect, position: Position) -> Option<Page> {
    let inner = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    if !inner.contains(position) {
        return None;
    }
    let index = usize::from(position.y - inner.y);
    app.navigation.items.get(index).map(|item| item.page)
}
