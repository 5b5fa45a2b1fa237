//! 简体中文翻译 (zh-CN)

use super::keys::{
    BooksTexts, CommonTexts, FormTexts, HintTexts, MessageTexts, ModalTexts, NavTexts,
    SearchTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "书架",
        loading: "加载中...",
        cancel: "取消",
        edit: "编辑",
        delete: "删除",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "书库",
        books: "我的藏书",
        search: "搜索",
        add_book: "添加图书",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    books: BooksTexts {
        col_id: "编号",
        col_name: "书名",
        col_author: "作者",
        col_actions: "操作",
        empty: "书库还是空的",
        add_first_book: "[a] 添加第一本书",
    },

    search: SearchTexts {
        input_label: "按书名或作者搜索",
        placeholder: "输入关键词后按 Enter",
        no_results: "没有符合条件的图书",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        name_label: "书名",
        author_label: "作者",
        submit_add: "添加图书",
        submit_save: "保存修改",
        busy_add: "添加中...",
        busy_save: "保存中...",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        edit_title: "编辑图书",
        delete_title: "移除图书",
        delete_prompt: "确定要移除这本书吗？",
        delete_book_title: "书名：",
        delete_book_author: "作者：",
        confirm_delete: "删除",
        deleting: "删除中...",
    },

    // ========================================================================
    // 反馈消息
    // ========================================================================
    messages: MessageTexts {
        fill_all_fields: "请填写所有字段",
        book_added: "图书已加入书库！",
        add_failed: "添加图书失败：",
        book_updated: "图书更新成功！",
        update_failed: "更新图书失败：",
        book_removed: "图书已从书库移除",
        delete_failed: "删除图书失败：",
        load_failed: "加载图书失败。",
        search_failed: "搜索失败。",
        empty_search: "请输入搜索关键词",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "切换面板",
        navigate: "导航",
        open: "打开",
        select: "选择",
        edit: "编辑",
        delete: "删除",
        refresh: "刷新",
        add_first: "添加图书",
        search: "搜索",
        next_field: "下一项",
        submit: "提交",
        confirm: "确认",
        close: "关闭",
        quit: "退出",
    },
};
