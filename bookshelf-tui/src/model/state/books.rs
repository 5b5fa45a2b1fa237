//! 图书表格状态
//!
//! 书库页面和搜索结果共用同一个 `BookTable`。
//! 表格行在渲染时从服务端返回的数据生成，每次都整体替换，
//! 不做任何增量合并。

use std::time::{Duration, Instant};

use bookshelf_client::{Book, BookId};

use super::MessageRegion;

/// 第一行出现前的延迟
pub const REVEAL_DELAY: Duration = Duration::from_millis(10);

/// 相邻两行出现的间隔
pub const REVEAL_STAGGER: Duration = Duration::from_millis(30);

/// 行操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// 行操作意图：由键盘或鼠标产生，携带目标图书的 id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIntent {
    pub id: BookId,
    pub action: RowAction,
}

/// 表格中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    /// 渲染时捕获的图书数据
    pub book: Book,
    /// `#<id>`
    pub label: String,
    /// 淡入时刻，此前以暗色绘制
    pub reveal_at: Instant,
}

impl BookRow {
    pub fn is_revealed(&self, now: Instant) -> bool {
        now >= self.reveal_at
    }

    pub fn intent(&self, action: RowAction) -> RowIntent {
        RowIntent {
            id: self.book.id.clone(),
            action,
        }
    }
}

/// 将图书列表转换为表格行（按输入顺序，一本书一行）
pub fn render_books(books: &[Book], now: Instant) -> Vec<BookRow> {
    books
        .iter()
        .enumerate()
        .map(|(index, book)| BookRow {
            book: book.clone(),
            label: book.label(),
            reveal_at: now + REVEAL_DELAY + REVEAL_STAGGER * u32::try_from(index).unwrap_or(u32::MAX),
        })
        .collect()
}

/// 图书表格状态
#[derive(Debug, Default)]
pub struct BookTable {
    rows: Vec<BookRow>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 最近一次成功获取的结果为空
    empty: bool,
    /// 错误消息区域
    pub message: MessageRegion,
}

impl BookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始加载：显示加载指示并清除旧错误
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.message.clear();
    }

    /// 加载成功：整体替换表格行
    pub fn set_books(&mut self, books: &[Book], now: Instant) {
        self.rows = render_books(books, now);
        self.empty = books.is_empty();
        self.loading = false;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    /// 加载失败：保留已有行，隐藏空状态
    pub fn set_failed(&mut self, text: impl Into<String>) {
        self.loading = false;
        self.empty = false;
        self.message.show_error(text);
    }

    /// 隐藏空状态提示
    pub fn hide_empty(&mut self) {
        self.empty = false;
    }

    /// 是否显示空状态提示
    pub fn shows_empty(&self) -> bool {
        self.empty
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    pub fn selected_row(&self) -> Option<&BookRow> {
        self.rows.get(self.selected)
    }

    /// 按 id 查找行
    pub fn find(&self, id: &BookId) -> Option<&BookRow> {
        self.rows.iter().find(|row| &row.book.id == id)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, name: &str, author: &str) -> Book {
        Book {
            id: BookId::new(id),
            name: name.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn one_row_per_book_in_order() {
        let now = Instant::now();
        let books = vec![
            book("3", "Emma", "Austen"),
            book("1", "Dune", "Herbert"),
            book("2", "Ulysses", "Joyce"),
        ];
        let rows = render_books(&books, now);

        assert_eq!(rows.len(), 3);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["#3", "#1", "#2"]);
        for (row, book) in rows.iter().zip(&books) {
            assert_eq!(&row.book, book);
            assert_eq!(row.intent(RowAction::Edit).id, book.id);
            assert_eq!(row.intent(RowAction::Delete).id, book.id);
        }
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(render_books(&[], Instant::now()).is_empty());
    }

    #[test]
    fn rows_reveal_staggered() {
        let now = Instant::now();
        let rows = render_books(&[book("1", "a", "b"), book("2", "c", "d")], now);

        assert_eq!(rows[0].reveal_at, now + Duration::from_millis(10));
        assert_eq!(rows[1].reveal_at, now + Duration::from_millis(40));
        assert!(!rows[1].is_revealed(now + Duration::from_millis(39)));
        assert!(rows[1].is_revealed(now + Duration::from_millis(40)));
    }

    #[test]
    fn empty_indicator_only_after_successful_empty_fetch() {
        let now = Instant::now();
        let mut table = BookTable::new();
        assert!(!table.shows_empty());

        table.begin_loading();
        table.set_books(&[], now);
        assert!(table.shows_empty());

        table.set_books(&[book("1", "Dune", "Herbert")], now);
        assert!(!table.shows_empty());

        table.set_books(&[], now);
        table.set_failed("Failed to load books. boom");
        assert!(!table.shows_empty());
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let now = Instant::now();
        let mut table = BookTable::new();
        table.set_books(&[book("1", "Dune", "Herbert")], now);
        table.begin_loading();
        table.set_failed("Failed to load books. offline");

        assert_eq!(table.rows().len(), 1);
        assert!(!table.loading);
        assert_eq!(table.message.text(), Some("Failed to load books. offline"));
    }

    #[test]
    fn selection_clamps_when_rows_shrink() {
        let now = Instant::now();
        let mut table = BookTable::new();
        table.set_books(
            &[book("1", "a", "b"), book("2", "c", "d"), book("3", "e", "f")],
            now,
        );
        table.select_last();
        table.set_books(&[book("1", "a", "b")], now);
        assert_eq!(table.selected, 0);
        assert_eq!(
            table.selected_row().map(|r| r.label.as_str()),
            Some("#1")
        );
    }
}
