//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{BookTable, ModalKind, RowAction, SearchFocus};
use crate::model::{App, Page};
use crate::view;
use crate::view::components::{book_table, form, modal, navigation};
use crate::view::pages;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
///
/// `screen` 为上一次绘制时的终端区域，用于鼠标命中测试。
pub fn handle_event(event: Event, app: &App, screen: Rect) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app, screen),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

// ============================================================================
// 键盘
// ============================================================================

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 单字符快捷键：输入框获得焦点时让位于输入
    if !app.is_editing_text() {
        if DefaultKeymap::QUIT.matches(&key) {
            return AppMessage::Quit;
        }
        if DefaultKeymap::REFRESH_SHORT.matches(&key) {
            return AppMessage::Refresh;
        }
        if let KeyCode::Char(digit) = key.code {
            if key.modifiers.is_empty() {
                if let Some(page) = Page::from_digit(digit) {
                    return AppMessage::Navigation(NavigationMessage::SelectTab(page));
                }
            }
        }
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }

    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectNext);
    }

    match key.code {
        // k: 上移
        KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),

        // j: 下移
        KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Books => {
            if app.books.shows_empty() && DefaultKeymap::ADD_FIRST.matches(&key) {
                return AppMessage::Navigation(NavigationMessage::AddFirstBook);
            }
            handle_table_keys(key, &app.books)
        }
        Page::Search => match app.search.focus {
            SearchFocus::Input => handle_search_input_keys(key),
            SearchFocus::Results => {
                // 在第一行按 ↑ 或 Shift+Tab 回到输入框
                if key.code == KeyCode::BackTab
                    || (key.code == KeyCode::Up && app.search.table.selected == 0)
                {
                    return AppMessage::Content(ContentMessage::PrevField);
                }
                handle_table_keys(key, &app.search.table)
            }
        },
        Page::AddBook => handle_form_keys(key),
    }
}

/// 处理表格的按键
fn handle_table_keys(key: KeyEvent, table: &BookTable) -> AppMessage {
    let row_action = if DefaultKeymap::ACTION_EDIT.matches(&key)
        || DefaultKeymap::NAV_CONFIRM.matches(&key)
    {
        Some(RowAction::Edit)
    } else if DefaultKeymap::ACTION_DELETE.matches(&key)
        || DefaultKeymap::ACTION_DELETE_KEY.matches(&key)
    {
        Some(RowAction::Delete)
    } else {
        None
    };

    if let Some(action) = row_action {
        return match table.selected_row() {
            Some(row) => AppMessage::Content(ContentMessage::Row(row.intent(action))),
            None => AppMessage::Noop,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理搜索输入框的按键
fn handle_search_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(c) if is_plain_char(&key) => AppMessage::Content(ContentMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理添加表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::Up | KeyCode::BackTab => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(c) if is_plain_char(&key) => AppMessage::Content(ContentMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let is_delete = app.modal.delete.is_some();
    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => ModalMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ModalMessage::PrevField,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Left | KeyCode::Right if is_delete => ModalMessage::ToggleDeleteFocus,
        KeyCode::Backspace if !is_delete => ModalMessage::Backspace,
        KeyCode::Char(c) if !is_delete && is_plain_char(&key) => ModalMessage::Input(c),
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

/// 普通字符输入（允许 Shift）
fn is_plain_char(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

// ============================================================================
// 鼠标
// ============================================================================

/// 处理鼠标事件（只响应左键按下）
fn handle_mouse_event(mouse: MouseEvent, app: &App, screen: Rect) -> AppMessage {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppMessage::Noop;
    }
    let position = Position::new(mouse.column, mouse.row);

    // 弹窗打开时，点击对话框之外即点击遮罩
    if let Some(dialog) = modal::dialog_area(app, screen) {
        if !dialog.contains(position) {
            return AppMessage::Modal(ModalMessage::BackdropClick);
        }
        return dialog_click(app, dialog, position);
    }

    let areas = view::areas(screen);

    if let Some(page) = navigation::item_at(app, areas.nav, position) {
        return AppMessage::Navigation(NavigationMessage::SelectTab(page));
    }

    if !areas.page_inner.contains(position) {
        return AppMessage::Noop;
    }

    match app.current_page {
        Page::Books => {
            let (_, table_area) = pages::books::regions(areas.page_inner);
            if app.books.shows_empty() {
                if position.y == table_area.y + pages::books::EMPTY_CTA_ROW {
                    return AppMessage::Navigation(NavigationMessage::AddFirstBook);
                }
                return AppMessage::Noop;
            }
            row_click(&app.books, table_area, position)
        }
        Page::Search => {
            let (_, _, table_area) = pages::search::regions(areas.page_inner);
            if app.search.table.shows_empty() {
                return AppMessage::Noop;
            }
            row_click(&app.search.table, table_area, position)
        }
        Page::AddBook => {
            let area = pages::add_book::form_area(areas.page_inner);
            match form::field_at(&app.add_form, &pages::add_book::labels(), area, position) {
                Some(field) => AppMessage::Content(ContentMessage::ClickField(field)),
                None => AppMessage::Noop,
            }
        }
    }
}

/// 对话框内的点击：最上层弹窗的字段或按钮
fn dialog_click(app: &App, dialog: Rect, position: Position) -> AppMessage {
    let msg = match (app.modal.active(), &app.modal.delete, &app.modal.edit) {
        (Some(ModalKind::Delete), Some(delete), _) => {
            modal::delete_button_at(delete, dialog, position).map(ModalMessage::ClickDelete)
        }
        (Some(ModalKind::Edit), _, Some(edit)) => {
            modal::edit_field_at(edit, dialog, position).map(ModalMessage::ClickField)
        }
        _ => None,
    };
    msg.map_or(AppMessage::Noop, AppMessage::Modal)
}

fn row_click(table: &BookTable, area: Rect, position: Position) -> AppMessage {
    match book_table::intent_at(table, area, position) {
        Some(intent) => AppMessage::Content(ContentMessage::Row(intent)),
        None => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use bookshelf_client::{Book, BookId};
    use crossterm::event::KeyEventState;

    use super::*;
    use crate::model::state::{DeleteFocus, FormField, RowIntent};
    use crate::model::FocusPanel;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app_with_books() -> App {
        let mut app = App::new("http://localhost:8080/api");
        let books = [
            Book {
                id: BookId::new("1"),
                name: "Dune".into(),
                author: "Herbert".into(),
            },
            Book {
                id: BookId::new("2"),
                name: "Emma".into(),
                author: "Austen".into(),
            },
        ];
        app.books.set_books(&books, app.now);
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new("http://localhost:8080/api");
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(release, &app, SCREEN), AppMessage::Noop);
    }

    #[test]
    fn digits_select_tabs_outside_inputs() {
        let app = App::new("http://localhost:8080/api");
        assert_eq!(
            handle_event(key(KeyCode::Char('2')), &app, SCREEN),
            AppMessage::Navigation(NavigationMessage::SelectTab(Page::Search))
        );
    }

    #[test]
    fn typing_in_search_input_does_not_trigger_shortcuts() {
        let mut app = App::new("http://localhost:8080/api");
        app.current_page = Page::Search;
        app.focus = FocusPanel::Content;

        assert_eq!(
            handle_event(key(KeyCode::Char('q')), &app, SCREEN),
            AppMessage::Content(ContentMessage::Input('q'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Char('1')), &app, SCREEN),
            AppMessage::Content(ContentMessage::Input('1'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app, SCREEN),
            AppMessage::Content(ContentMessage::Submit)
        );
    }

    #[test]
    fn row_keys_target_selected_book() {
        let mut app = app_with_books();
        app.focus = FocusPanel::Content;
        app.books.selected = 1;

        assert_eq!(
            handle_event(key(KeyCode::Char('d')), &app, SCREEN),
            AppMessage::Content(ContentMessage::Row(RowIntent {
                id: BookId::new("2"),
                action: RowAction::Delete,
            }))
        );
        assert_eq!(
            handle_event(key(KeyCode::Enter), &app, SCREEN),
            AppMessage::Content(ContentMessage::Row(RowIntent {
                id: BookId::new("2"),
                action: RowAction::Edit,
            }))
        );
    }

    #[test]
    fn empty_library_accepts_add_first_book() {
        let mut app = App::new("http://localhost:8080/api");
        app.focus = FocusPanel::Content;
        app.books.set_books(&[], app.now);

        assert_eq!(
            handle_event(key(KeyCode::Char('a')), &app, SCREEN),
            AppMessage::Navigation(NavigationMessage::AddFirstBook)
        );
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = app_with_books();
        let dune = app.books.rows()[0].book.clone();
        app.modal.open_edit(&dune);

        assert_eq!(
            handle_event(key(KeyCode::Char('q')), &app, SCREEN),
            AppMessage::Modal(ModalMessage::Input('q'))
        );
        assert_eq!(
            handle_event(key(KeyCode::Esc), &app, SCREEN),
            AppMessage::Modal(ModalMessage::Close)
        );

        app.modal.open_delete(&dune);
        assert_eq!(
            handle_event(key(KeyCode::Right), &app, SCREEN),
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        );
        assert_eq!(handle_event(key(KeyCode::Char('x')), &app, SCREEN), AppMessage::Noop);
    }

    #[test]
    fn click_outside_dialog_hits_backdrop() {
        let mut app = app_with_books();
        let dune = app.books.rows()[0].book.clone();
        app.modal.open_delete(&dune);

        assert_eq!(
            handle_event(click(1, 1), &app, SCREEN),
            AppMessage::Modal(ModalMessage::BackdropClick)
        );
        // 对话框内的空白处不触发任何操作
        assert_eq!(handle_event(click(50, 15), &app, SCREEN), AppMessage::Noop);
    }

    #[test]
    fn click_on_delete_buttons() {
        let mut app = app_with_books();
        let dune = app.books.rows()[0].book.clone();
        app.modal.open_delete(&dune);
        let dialog = modal::dialog_area(&app, SCREEN).unwrap();
        // 对话框 52 列宽，按钮行 "[ Cancel ]   [ Delete ]" 共 23 列，居中于内侧 50 列
        let row = dialog.y + 1 + 6;
        let start = dialog.x + 1 + (50 - 23) / 2;

        assert_eq!(
            handle_event(click(start + 2, row), &app, SCREEN),
            AppMessage::Modal(ModalMessage::ClickDelete(DeleteFocus::Cancel))
        );
        assert_eq!(
            handle_event(click(start + 15, row), &app, SCREEN),
            AppMessage::Modal(ModalMessage::ClickDelete(DeleteFocus::Confirm))
        );
    }

    #[test]
    fn click_on_edit_dialog_controls() {
        let mut app = app_with_books();
        let dune = app.books.rows()[0].book.clone();
        app.modal.open_edit(&dune);
        let dialog = modal::dialog_area(&app, SCREEN).unwrap();
        // 表单从边框内侧再缩进一格开始
        let left = dialog.x + 2;
        let top = dialog.y + 1;

        assert_eq!(
            handle_event(click(left + 1, top + 4), &app, SCREEN),
            AppMessage::Modal(ModalMessage::ClickField(FormField::Author))
        );
        assert_eq!(
            handle_event(click(left, top + 6), &app, SCREEN),
            AppMessage::Modal(ModalMessage::ClickField(FormField::Submit))
        );
        // "[ Save Changes ]" 16 列 + 间隔 2 列
        assert_eq!(
            handle_event(click(left + 18, top + 6), &app, SCREEN),
            AppMessage::Modal(ModalMessage::ClickField(FormField::Cancel))
        );
    }

    #[test]
    fn click_on_add_book_button() {
        let mut app = App::new("http://localhost:8080/api");
        app.current_page = Page::AddBook;
        let form_area = pages::add_book::form_area(view::areas(SCREEN).page_inner);

        assert_eq!(
            handle_event(click(form_area.x + 3, form_area.y + 6), &app, SCREEN),
            AppMessage::Content(ContentMessage::ClickField(FormField::Submit))
        );
        assert_eq!(
            handle_event(click(form_area.x + 3, form_area.y + 1), &app, SCREEN),
            AppMessage::Content(ContentMessage::ClickField(FormField::Name))
        );
        assert_eq!(
            handle_event(click(form_area.x + 3, form_area.y + 7), &app, SCREEN),
            AppMessage::Noop
        );
    }

    #[test]
    fn click_on_nav_item_selects_tab() {
        let app = App::new("http://localhost:8080/api");
        let nav = view::areas(SCREEN).nav;

        assert_eq!(
            handle_event(click(nav.x + 3, nav.y + 3), &app, SCREEN),
            AppMessage::Navigation(NavigationMessage::SelectTab(Page::AddBook))
        );
    }

    #[test]
    fn click_on_row_action_emits_intent() {
        let app = app_with_books();
        let inner = view::areas(SCREEN).page_inner;
        let (_, table_area) = pages::books::regions(inner);
        // 表头下第二行，[Delete] 按钮
        let x = table_area.right() - 3;
        let y = table_area.y + 2;

        assert_eq!(
            handle_event(click(x, y), &app, SCREEN),
            AppMessage::Content(ContentMessage::Row(RowIntent {
                id: BookId::new("2"),
                action: RowAction::Delete,
            }))
        );
    }

    #[test]
    fn click_on_empty_state_cta() {
        let mut app = App::new("http://localhost:8080/api");
        app.books.set_books(&[], app.now);
        let inner = view::areas(SCREEN).page_inner;
        let (_, table_area) = pages::books::regions(inner);

        assert_eq!(
            handle_event(click(table_area.x + 4, table_area.y + 3), &app, SCREEN),
            AppMessage::Navigation(NavigationMessage::AddFirstBook)
        );
    }
}
