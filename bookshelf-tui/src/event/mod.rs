//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘 / 鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)            // 键盘事件
//!             Event::Mouse(MouseEvent)        // 鼠标事件，只处理左键按下
//!             Event::Resize(width, height)    // 终端窗口大小发生变化，下一轮重绘
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理；
//!                   单字符快捷键（q / r / 1-3）在输入框获得焦点时让位于输入
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     全局：
//!         q / Ctrl+C      → AppMessage::Quit
//!         r / Alt+r       → AppMessage::Refresh
//!         Tab             → AppMessage::ToggleFocus
//!         1 / 2 / 3       → NavigationMessage::SelectTab(page)
//!
//!     表格（书库、搜索结果）：
//!         ↑↓ / j k        → ContentMessage::SelectPrevious / SelectNext
//!         e / Enter       → ContentMessage::Row(RowIntent { id, Edit })
//!         d / Delete      → ContentMessage::Row(RowIntent { id, Delete })
//!         a（空书库）      → NavigationMessage::AddFirstBook
//!
//!     弹窗：
//!         Esc             → ModalMessage::Close（关闭所有弹窗）
//!         Tab / ↓         → ModalMessage::NextField
//!         Shift+Tab / ↑   → ModalMessage::PrevField
//!         Enter           → ModalMessage::Confirm
//!         ←/→             → ModalMessage::ToggleDeleteFocus（删除确认）
//!         字符输入         → ModalMessage::Input(c)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 鼠标映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     点击位置由 View 层的布局函数换算，和画面保持一致：
//!
//!         导航项                  → NavigationMessage::SelectTab(page)
//!         表格行的 [Edit]/[Delete] → ContentMessage::Row(RowIntent { id, action })
//!         空书库的行动按钮         → NavigationMessage::AddFirstBook
//!         添加表单的字段/按钮      → ContentMessage::ClickField(field)
//!         弹窗打开时点击对话框之外 → ModalMessage::BackdropClick
//!         编辑弹窗的字段/按钮      → ModalMessage::ClickField(field)
//!         删除确认的两个按钮       → ModalMessage::ClickDelete(focus)
//!
//!     RowIntent 只携带图书 id，Update 层再到来源页面的表格中查找该书。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
