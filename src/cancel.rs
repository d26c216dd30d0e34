//! 调用级取消信号
//!
//! `CancelToken` 可在任务之间克隆共享；一旦 `cancel()` 或到达截止时间，
//! 所有克隆都观察到同一个已取消状态，且不可恢复。

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;
use crate::common::OlapError;

#[derive(Clone, Debug)]
pub struct CancelToken {
    tx:       Arc<watch::Sender<bool>>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx), deadline: None }
    }

    /// 从现在起 `timeout` 后自动视为取消（`DeadlineExceeded`）
    pub fn with_timeout(timeout: Duration) -> Self {
        let mut token = Self::new();
        token.deadline = Some(Instant::now() + timeout);
        token
    }

    /// 派生一个共享取消状态、但截止时间更早的 token
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let d = Instant::now() + timeout;
        Self {
            tx:       Arc::clone(&self.tx),
            deadline: Some(self.deadline.map_or(d, |cur| cur.min(d))),
        }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.err().is_some()
    }

    /// 主动取消优先于超时
    pub fn err(&self) -> Option<OlapError> {
        if *self.tx.borrow() {
            return Some(OlapError::Canceled);
        }
        match self.deadline {
            Some(d) if Instant::now() >= d => Some(OlapError::DeadlineExceeded),
            _ => None,
        }
    }

    /// 在取消或超时之后返回
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        let signalled = async move {
            loop {
                let done = *rx.borrow_and_update();
                // sender 由 self 持有，changed() 不会因通道关闭而出错
                if done || rx.changed().await.is_err() {
                    return;
                }
            }
        };
        match self.deadline {
            Some(d) => tokio::select! {
                _ = signalled => {}
                _ = tokio::time::sleep_until(d) => {}
            },
            None => signalled.await,
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self { Self::new() }
}
