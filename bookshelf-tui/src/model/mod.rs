//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和对自身数据的简单操作，不发起任何 I/O。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!         mod request;        // 请求票据（Lane / Ticket / RequestTracker）
//!
//!         pub mod state;      // 页面数据状态（表格、表单、弹窗、消息）
//!
//!     page.rs 与 state/ 的区别：
//!         - Page 只标识当前处于哪个页面（Books / Search / AddBook），
//!             由于是单个枚举值，同一时刻只可能有一个页面处于激活状态；
//!         - State 是各个页面的业务数据容器，存储表格行、选中项、加载状态等。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub now: Instant,                   // 最近一次 Tick 的时刻
//!
//!             pub books: BookTable,               // 书库列表
//!             pub search: SearchState,            // 搜索页面
//!             pub add_form: BookForm,             // 添加图书表单
//!             pub modal: ModalState,              // 编辑 / 删除确认弹窗
//!             pub toast: Option<Toast>,           // 浮动通知
//!             pub requests: RequestTracker,       // 在途请求
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、请求票据（RequestTracker）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个请求都属于一条 Lane（List / Search / Create / Update / Delete）。
//!     issue(lane) 发出新票据并取代同一 lane 上的旧票据；
//!     结果回来时 complete(ticket) 判断它是否仍是最新的。
//!
//!         用户连续按两次 r
//!             ↓
//!         第二次 issue(Lane::List) 取代第一次，执行器 abort 第一个任务
//!             ↓
//!         若第一个结果已经在通道中，complete 返回 false，结果被丢弃
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、计时器
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     消息自动清除、Toast 淡出、编辑弹窗延迟关闭都以截止时间的形式
//!     存放在各自的状态里，AppMessage::Tick(now) 到达时统一检查。
//!

mod app;
mod focus;
mod navigation;
mod page;
mod request;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use page::Page;
pub use request::{Lane, RequestTracker, Ticket};
