// nfctag/src/exchange.rs
//! Single read or write units of work, and running them off the caller's
//! thread.
//!
//! An exchange checks its [`CancelToken`] once, before the tag session is
//! opened. From then on it runs to completion or failure and the session is
//! always closed; radio frames are never interrupted halfway.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::dispatcher::TagDispatcher;
use crate::tag::Tag;
use crate::{Error, Result};

/// What an exchange does with the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Read the variant's payload.
    Read,
    /// Write raw bytes.
    Write(Vec<u8>),
    /// Text encoded per variant, see [`TagDispatcher::write_text`].
    WriteText(String),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write(data) => write!(f, "write of {} byte(s)", data.len()),
            Self::WriteText(text) => write!(f, "write of {} char(s) of text", text.chars().count()),
        }
    }
}

/// Successful result of an exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Bytes the read returned.
    Read(Vec<u8>),
    /// The write was acknowledged.
    Written,
}

impl Outcome {
    /// Bytes of a read, `None` for a write.
    pub fn into_data(self) -> Option<Vec<u8>> {
        match self {
            Self::Read(data) => Some(data),
            Self::Written => None,
        }
    }
}

/// Shared cancellation flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag every clone as cancelled.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether any clone was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// One operation plus the token that can cancel it.
#[derive(Debug, Clone)]
pub struct Exchange {
    operation: Operation,
    token: CancelToken,
}

impl Exchange {
    /// Exchange with its own token.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            token: CancelToken::new(),
        }
    }

    /// Read exchange.
    pub fn read() -> Self {
        Self::new(Operation::Read)
    }

    /// Raw write exchange.
    pub fn write(data: impl Into<Vec<u8>>) -> Self {
        Self::new(Operation::Write(data.into()))
    }

    /// Text write exchange.
    pub fn write_text(text: impl Into<String>) -> Self {
        Self::new(Operation::WriteText(text.into()))
    }

    /// Use a token the caller already holds.
    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = token;
        self
    }

    /// Token cancelling this exchange.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// What this exchange does.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Run on the current thread. Fails with [`Error::Cancelled`] without
    /// touching the tag when the token was cancelled beforehand.
    pub fn run(&self, dispatcher: &TagDispatcher, tag: &mut Tag) -> Result<Outcome> {
        if self.token.is_cancelled() {
            debug!("{} on {} cancelled before start", self.operation, tag.uid().to_hex());
            return Err(Error::Cancelled);
        }
        dispatcher.dispatch(tag, &self.operation)
    }
}

/// A finished exchange: the tag handed back together with the result.
#[derive(Debug)]
pub struct Completed {
    /// The tag, ready for another exchange.
    pub tag: Tag,
    /// Outcome of the operation.
    pub result: Result<Outcome>,
}

#[cfg(feature = "async")]
pub use self::task::{spawn, ExchangeHandle};

#[cfg(feature = "async")]
mod task {
    use std::io;
    use std::sync::Arc;

    use tokio::task::JoinHandle;

    use super::{CancelToken, Completed, Exchange};
    use crate::dispatcher::TagDispatcher;
    use crate::tag::Tag;
    use crate::Result;

    /// Handle to an exchange running on tokio's blocking pool.
    #[derive(Debug)]
    pub struct ExchangeHandle {
        inner: JoinHandle<Completed>,
        token: CancelToken,
    }

    impl ExchangeHandle {
        /// Abandon interest. Has an effect only if the exchange has not
        /// opened its session yet.
        pub fn cancel(&self) {
            self.token.cancel();
        }

        /// Whether the task has finished.
        pub fn is_finished(&self) -> bool {
            self.inner.is_finished()
        }

        /// Wait for the exchange. Resolves exactly once.
        pub async fn join(self) -> Result<Completed> {
            self.inner
                .await
                .map_err(|e| io::Error::other(format!("exchange task failed: {}", e)).into())
        }
    }

    /// Move `tag` onto a worker thread and run `exchange` there. The tag
    /// comes back in [`Completed`].
    pub fn spawn(dispatcher: Arc<TagDispatcher>, mut tag: Tag, exchange: Exchange) -> ExchangeHandle {
        let token = exchange.token().clone();
        let inner = tokio::task::spawn_blocking(move || {
            let result = exchange.run(&dispatcher, &mut tag);
            Completed { tag, result }
        });
        ExchangeHandle { inner, token }
    }
}
