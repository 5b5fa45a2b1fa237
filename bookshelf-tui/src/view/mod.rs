//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每轮主循环调用一次 `render(&app, frame)`，整屏重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏、导航、页面、状态栏）
//!         pub mod theme;      // 主题颜色与常用样式
//!         mod components;     // 导航、状态栏、表格、表单、弹窗、Toast
//!         mod pages;          // 书库、搜索、添加图书
//!
//!
//!     画面结构：
//!         ┌──────────────────────────────────────────────┐
//!         │ Bookshelf · http://localhost:8080/api        │  ← 标题栏
//!         ├──────────┬───────────────────────────────────┤
//!         │ ▶ 1 ≡ …  │  ID   Title   Author   Actions    │
//!         │   2 ? …  │  #1   Dune    Herbert  [Edit] [Delete]
//!         │   3 + …  │                                   │
//!         ├──────────┴───────────────────────────────────┤
//!         │ Tab Switch panel │ ↑↓ Navigate │ q Quit      │  ← 状态栏
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗和 Toast 绘制在最上层。
//!
//!
//!     鼠标命中测试：
//!         event/handler.rs 需要知道每个可点击元素的位置。
//!         这些位置由 View 层的同一组函数计算，渲染与命中测试不会错位：
//!             - layout::areas()               主布局
//!             - pages::books::regions()       书库页面的消息行与表格
//!             - pages::search::regions()      搜索页面的输入框、消息行与表格
//!             - components::book_table::intent_at()   点击 → RowIntent
//!             - components::navigation::item_at()     点击 → Page
//!             - components::modal::dialog_area()      对话框区域
//!

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::{areas, render};
