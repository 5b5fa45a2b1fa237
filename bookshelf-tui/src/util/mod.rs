//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     初始化终端：
//!         enable_raw_mode()                       // 1. 启用原始模式
//!         execute!(stdout, EnterAlternateScreen,  // 2. 进入备用屏幕
//!                          EnableMouseCapture)    // 3. 捕获鼠标，点击才能变成消息
//!         Terminal::new(backend)                  // 4. 创建终端对象
//!
//!     恢复终端：
//!         disable_raw_mode()
//!         execute!(.., LeaveAlternateScreen, DisableMouseCapture)
//!         terminal.show_cursor()
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用此函数！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         TUI 占用了 stdout，日志不能打印到终端。
//!         init_logging() 安装 tracing-subscriber，写入按天轮转的日志文件，
//!         返回的 WorkerGuard 由 main 持有到退出。
//!
//!             tail -f ~/.local/share/bookshelf-tui/logs/bookshelf-tui.*
//!
//!         RUST_LOG=bookshelf_client=trace 可以调整级别。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
