//! 文件日志
//!
//! TUI 占用了终端，日志只写入文件：
//! `<data dir>/bookshelf-tui/logs/bookshelf-tui.YYYY-MM-DD.log`，按天轮转。
//! `log` 宏的记录经 tracing-subscriber 的 tracing-log 桥接进入同一条管道。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "bookshelf-tui";
const LOG_FILE_SUFFIX: &str = "log";

/// 默认日志级别，可用 `RUST_LOG` 覆盖
const DEFAULT_FILTER: &str = "bookshelf_tui=debug,bookshelf_client=debug,warn";

/// 日志目录
fn log_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine the data directory")?;
    Ok(base.join("bookshelf-tui").join("logs"))
}

/// 按天轮转的日志文件：`bookshelf-tui.YYYY-MM-DD.log`
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .with_context(|| format!("Failed to open a log file in {}", dir.display()))
}

/// 初始化日志
///
/// 返回的 guard 必须存活到程序结束，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(&dir)?);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!("Logging initialized - logs written to {}", dir.display());

    Ok(guard)
}
