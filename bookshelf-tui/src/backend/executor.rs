//! 请求执行器
//!
//! 把 Update 层返回的 `Command` 放到 tokio 运行时上执行，
//! 完成后通过无界通道把 `ApiMessage` 送回主循环。

use std::collections::HashMap;
use std::sync::Arc;

use bookshelf_client::BookApi;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::message::ApiMessage;
use crate::model::{Lane, Ticket};
use crate::update::{ApiCall, Command};

/// 请求执行器
pub struct Executor {
    api: Arc<dyn BookApi>,
    runtime: Handle,
    tx: UnboundedSender<ApiMessage>,
    /// 可被取代的 lane 上最近一次的任务
    inflight: HashMap<Lane, JoinHandle<()>>,
}

impl Executor {
    pub fn new(api: Arc<dyn BookApi>, runtime: Handle, tx: UnboundedSender<ApiMessage>) -> Self {
        Self {
            api,
            runtime,
            tx,
            inflight: HashMap::new(),
        }
    }

    /// 执行一批命令
    pub fn execute_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            self.execute(command);
        }
    }

    /// 执行单个命令
    ///
    /// List / Search 上的新请求会 abort 同一 lane 上尚未完成的旧任务；
    /// 增删改请求不会被取消。
    pub fn execute(&mut self, command: Command) {
        let Command::Request { ticket, call } = command;
        log::debug!("Dispatching {:?} request (seq {})", ticket.lane, ticket.seq);

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            let msg = perform(api.as_ref(), ticket, call).await;
            // 接收端已关闭说明主循环已退出，结果直接丢弃
            if tx.send(msg).is_err() {
                log::debug!("Result for seq {} dropped after shutdown", ticket.seq);
            }
        });

        if ticket.lane.is_supersedable() {
            if let Some(previous) = self.inflight.insert(ticket.lane, handle) {
                if !previous.is_finished() {
                    log::debug!("Aborting superseded {:?} request", ticket.lane);
                    previous.abort();
                }
            }
        }
    }
}

/// 调用 API，把结果包装成对应的消息
async fn perform(api: &dyn BookApi, ticket: Ticket, call: ApiCall) -> ApiMessage {
    match call {
        ApiCall::ListBooks => ApiMessage::BooksLoaded {
            ticket,
            result: api.list_books().await,
        },
        ApiCall::SearchBooks(query) => ApiMessage::SearchCompleted {
            ticket,
            result: api.search_books(&query).await,
        },
        ApiCall::CreateBook(draft) => ApiMessage::BookCreated {
            ticket,
            result: api.create_book(&draft).await,
        },
        ApiCall::UpdateBook { id, draft } => ApiMessage::BookUpdated {
            ticket,
            result: api.update_book(&id, &draft).await,
        },
        ApiCall::DeleteBook(id) => ApiMessage::BookDeleted {
            ticket,
            result: api.delete_book(&id).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use bookshelf_client::{
        Acknowledgement, ApiError, Book, BookDraft, BookId, Result, SearchQuery,
    };
    use tokio::sync::{mpsc, Notify};

    use super::*;
    use crate::model::RequestTracker;

    /// 标记为 slow 时列表请求挂起很久，其余请求立即返回
    #[derive(Default)]
    struct FakeApi {
        slow_list: AtomicBool,
        /// 慢请求真正开始执行时通知
        list_started: Notify,
        /// 慢请求的 future 被丢弃（任务被 abort）时置位
        list_dropped: Arc<AtomicBool>,
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl BookApi for FakeApi {
        async fn list_books(&self) -> Result<Vec<Book>> {
            if self.slow_list.swap(false, Ordering::SeqCst) {
                let _flag = DropFlag(Arc::clone(&self.list_dropped));
                self.list_started.notify_one();
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(vec![Book {
                id: BookId::new("1"),
                name: "Dune".into(),
                author: "Herbert".into(),
            }])
        }

        async fn search_books(&self, query: &SearchQuery) -> Result<Vec<Book>> {
            Err(ApiError::Http {
                status: 500,
                message: format!("no index for {query}"),
            })
        }

        async fn create_book(&self, _draft: &BookDraft) -> Result<Acknowledgement> {
            Ok(Acknowledgement::default())
        }

        async fn update_book(&self, _id: &BookId, _draft: &BookDraft) -> Result<Acknowledgement> {
            Ok(Acknowledgement::default())
        }

        async fn delete_book(&self, id: &BookId) -> Result<Acknowledgement> {
            Err(ApiError::Http {
                status: 404,
                message: format!("book {id} not found"),
            })
        }
    }

    fn executor_with(fake: Arc<FakeApi>) -> (Executor, mpsc::UnboundedReceiver<ApiMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let api: Arc<dyn BookApi> = fake;
        (Executor::new(api, Handle::current(), tx), rx)
    }

    fn executor() -> (Executor, mpsc::UnboundedReceiver<ApiMessage>) {
        executor_with(Arc::new(FakeApi::default()))
    }

    #[tokio::test]
    async fn superseded_list_request_is_aborted() {
        let fake = Arc::new(FakeApi::default());
        fake.slow_list.store(true, Ordering::SeqCst);
        let (mut executor, mut rx) = executor_with(Arc::clone(&fake));
        let mut tracker = RequestTracker::new();
        let started = Instant::now();

        let first = tracker.issue(Lane::List);
        executor.execute(Command::Request {
            ticket: first,
            call: ApiCall::ListBooks,
        });
        // 等第一个请求真正进入挂起状态后再发出新请求
        tokio::time::timeout(Duration::from_secs(5), fake.list_started.notified())
            .await
            .unwrap();
        assert!(!executor.inflight[&Lane::List].is_finished());

        let second = tracker.issue(Lane::List);
        executor.execute(Command::Request {
            ticket: second,
            call: ApiCall::ListBooks,
        });

        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(msg.ticket(), second);
        assert!(matches!(msg, ApiMessage::BooksLoaded { result: Ok(ref books), .. } if books.len() == 1));

        // 第一个任务已被 abort：挂起中的 future 被丢弃，不会再有结果
        tokio::time::timeout(Duration::from_secs(1), async {
            while !fake.list_dropped.load(Ordering::SeqCst) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
        let late = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(late.is_err());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn errors_come_back_as_messages() {
        let (mut executor, mut rx) = executor();
        let mut tracker = RequestTracker::new();

        let ticket = tracker.issue(Lane::Delete);
        executor.execute(Command::Request {
            ticket,
            call: ApiCall::DeleteBook(BookId::new("7")),
        });

        let ApiMessage::BookDeleted { result, .. } = rx.recv().await.unwrap() else {
            panic!("expected BookDeleted");
        };
        assert_eq!(result.unwrap_err().to_string(), "book 7 not found");
    }

    #[tokio::test]
    async fn mutations_run_side_by_side() {
        let (mut executor, mut rx) = executor();
        let mut tracker = RequestTracker::new();
        let draft = BookDraft::new("Dune", "Herbert").unwrap();

        let create = tracker.issue(Lane::Create);
        let update = tracker.issue(Lane::Update);
        executor.execute_all(vec![
            Command::Request {
                ticket: create,
                call: ApiCall::CreateBook(draft.clone()),
            },
            Command::Request {
                ticket: update,
                call: ApiCall::UpdateBook {
                    id: BookId::new("1"),
                    draft,
                },
            },
        ]);

        let mut seen = vec![rx.recv().await.unwrap().ticket(), rx.recv().await.unwrap().ticket()];
        seen.sort_by_key(|t| t.seq);
        assert_eq!(seen, [create, update]);
    }
}
