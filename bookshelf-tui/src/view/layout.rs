//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Lane, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 主布局各区域
///
/// 渲染与鼠标命中测试共用同一套计算，保证点击位置与画面一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppAreas {
    pub title: Rect,
    pub nav: Rect,
    pub page: Rect,
    /// 页面边框内侧
    pub page_inner: Rect,
    pub status: Rect,
}

/// 计算主布局
pub fn areas(size: Rect) -> AppAreas {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    AppAreas {
        title: main_layout[0],
        nav: columns[0],
        page: columns[1],
        page_inner: columns[1].inner(Margin::new(1, 1)),
        status: main_layout[2],
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = areas(frame.area());

    render_title_bar(app, frame, areas.title);
    components::navigation::render(app, frame, areas.nav);
    render_page_content(app, frame, areas.page);
    components::statusbar::render(app, frame, areas.status);
    components::toast::render(app, frame, areas.status);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    // 读请求进行中时显示同步标记
    let syncing = app.requests.in_flight(Lane::List) || app.requests.in_flight(Lane::Search);
    let title = Paragraph::new(format!(
        " {} · {}{}",
        t().common.app_name,
        app.api_base_url,
        if syncing { " ⟳" } else { "" }
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match app.current_page {
        Page::Books => texts.nav.books,
        Page::Search => texts.nav.search,
        Page::AddBook => texts.nav.add_book,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content() && !app.modal.is_open()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Books => pages::books::render(app, frame, inner_area),
        Page::Search => pages::search::render(app, frame, inner_area),
        Page::AddBook => pages::add_book::render(app, frame, inner_area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inner_sits_inside_border() {
        let a = areas(Rect::new(0, 0, 100, 30));

        assert_eq!(a.title.height, 1);
        assert_eq!(a.status.y, 29);
        assert_eq!(a.nav.width, 20);
        assert_eq!(a.page_inner.x, a.page.x + 1);
        assert_eq!(a.page_inner.width, a.page.width - 2);
        assert_eq!(a.page_inner.height, 28 - 2);
    }
}
