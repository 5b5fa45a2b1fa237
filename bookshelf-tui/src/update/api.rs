//! 后台请求结果处理

use bookshelf_client::ApiError;

use super::{load_books, run_search, Command};
use crate::i18n::t;
use crate::message::ApiMessage;
use crate::model::state::{ModalKind, Severity, Toast, EDIT_CLOSE_DELAY};
use crate::model::{App, Page};

/// 处理请求结果
pub fn update(app: &mut App, msg: ApiMessage) -> Vec<Command> {
    let ticket = msg.ticket();
    let is_current = app.requests.complete(ticket);

    match msg {
        ApiMessage::BooksLoaded { result, .. } => {
            if !is_current {
                log::debug!("Discarding superseded list result (seq {})", ticket.seq);
                return Vec::new();
            }
            match result {
                Ok(books) => {
                    log::debug!("Loaded {} books", books.len());
                    app.books.set_books(&books, app.now);
                }
                Err(e) => {
                    log_failure("load books", &e);
                    app.books
                        .set_failed(format!("{}{e}", t().messages.load_failed));
                }
            }
            Vec::new()
        }

        ApiMessage::SearchCompleted { result, .. } => {
            if !is_current {
                log::debug!("Discarding superseded search result (seq {})", ticket.seq);
                return Vec::new();
            }
            match result {
                Ok(books) => {
                    log::debug!("Search returned {} books", books.len());
                    app.search.table.set_books(&books, app.now);
                }
                Err(e) => {
                    log_failure("search books", &e);
                    app.search
                        .table
                        .set_failed(format!("{}{e}", t().messages.search_failed));
                }
            }
            Vec::new()
        }

        ApiMessage::BookCreated { result, .. } => {
            if app.add_form.pending != Some(ticket) {
                log::debug!("Create result without a waiting form (seq {})", ticket.seq);
                return Vec::new();
            }
            app.add_form.pending = None;

            match result {
                Ok(_) => {
                    log::info!("Book created");
                    app.add_form.message.show_message(
                        t().messages.book_added,
                        Severity::Success,
                        app.now,
                    );
                    app.add_form.reset();
                    if app.current_page == Page::Books {
                        return vec![load_books(app)];
                    }
                }
                Err(e) => {
                    log_failure("create book", &e);
                    app.add_form.message.show_message(
                        format!("{}{e}", t().messages.add_failed),
                        Severity::Error,
                        app.now,
                    );
                }
            }
            Vec::new()
        }

        ApiMessage::BookUpdated { result, .. } => {
            let now = app.now;
            let edit = app
                .modal
                .edit
                .as_mut()
                .filter(|edit| edit.form.pending == Some(ticket));

            match result {
                Ok(_) => {
                    log::info!("Book updated");
                    if let Some(edit) = edit {
                        edit.form.pending = None;
                        edit.form.message.show_message(
                            t().messages.book_updated,
                            Severity::Success,
                            now,
                        );
                        edit.close_at = Some(now + EDIT_CLOSE_DELAY);
                    }
                    vec![load_books(app)]
                }
                Err(e) => {
                    log_failure("update book", &e);
                    if let Some(edit) = edit {
                        edit.form.pending = None;
                        edit.form.message.show_message(
                            format!("{}{e}", t().messages.update_failed),
                            Severity::Error,
                            now,
                        );
                    }
                    Vec::new()
                }
            }
        }

        ApiMessage::BookDeleted { result, .. } => {
            let owns_modal = app
                .modal
                .delete
                .as_ref()
                .is_some_and(|delete| delete.pending == Some(ticket));
            if owns_modal {
                app.modal.close(ModalKind::Delete);
            }

            match result {
                Ok(_) => {
                    log::info!("Book deleted");
                    app.toast = Some(Toast::new(t().messages.book_removed, app.now));
                }
                Err(e) => {
                    // 删除失败只记录日志，不在界面上显示
                    let text = format!("{}{e}", t().messages.delete_failed);
                    if e.is_expected() {
                        log::warn!("{text}");
                    } else {
                        log::error!("{text}");
                    }
                }
            }

            let mut commands = vec![load_books(app)];
            if app.current_page == Page::Search {
                commands.extend(run_search(app));
            }
            commands
        }
    }
}

/// 按错误是否符合预期选择日志级别
fn log_failure(action: &str, err: &ApiError) {
    if err.is_expected() {
        log::warn!("Failed to {action}: {err}");
    } else {
        log::error!("Failed to {action}: {err}");
    }
}
