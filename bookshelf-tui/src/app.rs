//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Books , Search , AddBook],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Books,                     // 默认显示书库
//!     ...
//!
//! }
//!
//! 并执行 update::init()：书库是默认页面，启动即加载一次列表。
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     update(&mut app, Tick(now))                     // 推进时钟：过期消息、Toast、延迟关闭的弹窗
//!     while let Ok(msg) = rx.try_recv() {             // 取出已完成的后台请求
//!         update(&mut app, AppMessage::Api(msg))          // 结果可能产生新的 Command（例如刷新列表）
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app, area);     // 接收原始事件并分发消息
//!         let commands = update(&mut app , msg);          // 更新终端状态
//!         executor.execute_all(commands);                 // 把副作用交给后台执行
//!     }
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Executor;
use crate::event;
use crate::message::{ApiMessage, AppMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &mut Executor,
    results: &mut UnboundedReceiver<ApiMessage>,
) -> Result<()> {
    executor.execute_all(update::init(app));

    loop {
        // 1. 推进时钟
        let commands = update::update(app, AppMessage::Tick(Instant::now()));
        executor.execute_all(commands);

        // 2. 处理已完成的后台请求
        while let Ok(msg) = results.try_recv() {
            let commands = update::update(app, AppMessage::Api(msg));
            executor.execute_all(commands);
        }

        // 3. 渲染 UI
        let screen = terminal
            .draw(|frame| {
                view::render(app, frame);
            })?
            .area;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 6. 处理事件，获取消息
            let msg = event::handle_event(event, app, screen);

            // 7. 更新状态，执行副作用
            let commands = update::update(app, msg);
            executor.execute_all(commands);
        }
    }

    log::info!("Main loop finished");
    Ok(())
}
