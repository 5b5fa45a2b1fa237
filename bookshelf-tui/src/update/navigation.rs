//! 导航更新逻辑

use super::{load_books, Command};
use crate::message::NavigationMessage;
use crate::model::state::{FormField, SearchFocus};
use crate::model::{App, FocusPanel, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            Vec::new()
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            Vec::new()
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
            Vec::new()
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
            Vec::new()
        }

        NavigationMessage::Confirm => match app.navigation.current_page() {
            Some(page) => select_tab(app, page),
            None => Vec::new(),
        },

        NavigationMessage::SelectTab(page) => select_tab(app, page),

        NavigationMessage::AddFirstBook => {
            activate(app, Page::AddBook);
            app.focus = FocusPanel::Content;
            app.add_form.focus = FormField::Name;
            Vec::new()
        }
    }
}

/// 切换页面
///
/// - Books：重新加载列表
/// - Search：聚焦搜索输入框
/// - AddBook：无副作用
pub fn select_tab(app: &mut App, page: Page) -> Vec<Command> {
    activate(app, page);
    match page {
        Page::Books => vec![load_books(app)],
        Page::Search => {
            app.focus = FocusPanel::Content;
            app.search.focus = SearchFocus::Input;
            Vec::new()
        }
        Page::AddBook => Vec::new(),
    }
}

fn activate(app: &mut App, page: Page) {
    app.current_page = page;
    app.navigation.highlight(page);
}
