//! 英文翻译 (en-US)

use super::keys::{
    BooksTexts, CommonTexts, FormTexts, HintTexts, MessageTexts, ModalTexts, NavTexts,
    SearchTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Bookshelf",
        loading: "Loading...",
        cancel: "Cancel",
        edit: "Edit",
        delete: "Delete",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Library",
        books: "My Books",
        search: "Search",
        add_book: "Add Book",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    books: BooksTexts {
        col_id: "ID",
        col_name: "Title",
        col_author: "Author",
        col_actions: "Actions",
        empty: "Your collection is empty",
        add_first_book: "[a] Add your first book",
    },

    search: SearchTexts {
        input_label: "Search by title or author",
        placeholder: "Type a search term and press Enter",
        no_results: "No books match your search",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        name_label: "Book Title",
        author_label: "Author",
        submit_add: "Add Book",
        submit_save: "Save Changes",
        busy_add: "Adding...",
        busy_save: "Saving...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        edit_title: "Edit Book",
        delete_title: "Remove Book",
        delete_prompt: "Are you sure you want to remove this book?",
        delete_book_title: "Title:",
        delete_book_author: "Author:",
        confirm_delete: "Delete",
        deleting: "Deleting...",
    },

    // ========================================================================
    // 反馈消息
    // ========================================================================
    messages: MessageTexts {
        fill_all_fields: "Please fill in all fields",
        book_added: "Book added to your collection!",
        add_failed: "Failed to add book: ",
        book_updated: "Book updated successfully!",
        update_failed: "Failed to update book: ",
        book_removed: "Book removed from collection",
        delete_failed: "Failed to delete book: ",
        load_failed: "Failed to load books. ",
        search_failed: "Search failed. ",
        empty_search: "Please enter a search term",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        open: "Open",
        select: "Select",
        edit: "Edit",
        delete: "Delete",
        refresh: "Refresh",
        add_first: "Add book",
        search: "Search",
        next_field: "Next field",
        submit: "Submit",
        confirm: "Confirm",
        close: "Close",
        quit: "Quit",
    },
};
