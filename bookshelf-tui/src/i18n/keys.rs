//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：编辑与删除确认弹窗的内容都放在 modal 下
//! 3. **表单文本归 `form.*`**：添加页面与编辑弹窗共用同一套表单文本
//! 4. **反馈消息归 `messages.*`**：成功 / 失败提示、Toast
//! 5. **键盘提示归 `hints.*`**：状态栏上的按键动作词

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 书库列表页面文本
    pub books: BooksTexts,
    /// 搜索页面文本
    pub search: SearchTexts,
    /// 表单文本（添加页面 + 编辑弹窗）
    pub form: FormTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 反馈消息
    pub messages: MessageTexts,
    /// 状态栏按键提示
    pub hints: HintTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub cancel: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub books: &'static str,
    pub search: &'static str,
    pub add_book: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

/// 书库列表页面文本
pub struct BooksTexts {
    pub col_id: &'static str,
    pub col_name: &'static str,
    pub col_author: &'static str,
    pub col_actions: &'static str,
    /// 空书库提示
    pub empty: &'static str,
    /// 空书库时的行动按钮
    pub add_first_book: &'static str,
}

/// 搜索页面文本
pub struct SearchTexts {
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub no_results: &'static str,
}

// ============================================================================
// 表单
// ============================================================================

/// 表单文本
pub struct FormTexts {
    pub name_label: &'static str,
    pub author_label: &'static str,
    pub submit_add: &'static str,
    pub submit_save: &'static str,
    /// 创建请求进行中的按钮文字
    pub busy_add: &'static str,
    /// 更新请求进行中的按钮文字
    pub busy_save: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub edit_title: &'static str,
    pub delete_title: &'static str,
    pub delete_prompt: &'static str,
    pub delete_book_title: &'static str,
    pub delete_book_author: &'static str,
    pub confirm_delete: &'static str,
    pub deleting: &'static str,
}

// ============================================================================
// 反馈消息
// ============================================================================

/// 反馈消息（前缀类文本在末尾自带分隔符，直接拼接错误信息）
pub struct MessageTexts {
    pub fill_all_fields: &'static str,
    pub book_added: &'static str,
    pub add_failed: &'static str,
    pub book_updated: &'static str,
    pub update_failed: &'static str,
    pub book_removed: &'static str,
    pub delete_failed: &'static str,
    pub load_failed: &'static str,
    pub search_failed: &'static str,
    pub empty_search: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本（动作词）
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub add_first: &'static str,
    pub search: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}
