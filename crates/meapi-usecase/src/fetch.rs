//! Fetch plumbing shared by the views
//!
//! A view never awaits its own request. Starting a load hands back a
//! [`Fetch`] - the request token plus a `'static` future - which the caller
//! drives wherever it likes and returns to the view as a [`Completed`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use meapi_domain::{FetchError, FetchLifecycle, RequestToken};

pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send>>;

/// How views reach the API
pub enum Connection<R> {
    /// A repository is available
    Ready(Arc<R>),
    /// No API base configured; views fail without sending anything
    Unconfigured,
}

impl<R> Connection<R> {
    pub fn ready(repository: R) -> Self {
        Connection::Ready(Arc::new(repository))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Connection::Ready(_))
    }
}

impl<R> Clone for Connection<R> {
    fn clone(&self) -> Self {
        match self {
            Connection::Ready(repository) => Connection::Ready(Arc::clone(repository)),
            Connection::Unconfigured => Connection::Unconfigured,
        }
    }
}

impl<R> core::fmt::Debug for Connection<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Connection::Ready(_) => f.write_str("Connection::Ready"),
            Connection::Unconfigured => f.write_str("Connection::Unconfigured"),
        }
    }
}

/// An outstanding request of one view
pub struct Fetch<T> {
    token: RequestToken,
    future: FetchFuture<T>,
}

impl<T> Fetch<T> {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// Drive the request to completion
    pub async fn run(self) -> Completed<T> {
        Completed {
            token: self.token,
            outcome: self.future.await,
        }
    }
}

impl<T> core::fmt::Debug for Fetch<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fetch").field("token", &self.token).finish()
    }
}

/// The outcome of a [`Fetch`], tagged with the token it was started under
#[derive(Debug)]
pub struct Completed<T> {
    pub token: RequestToken,
    pub outcome: Result<T, FetchError>,
}

/// Begin a load on `lifecycle`, or fail it at once when unconfigured
pub(crate) fn start<R, T, F, Fut>(
    connection: &Connection<R>,
    lifecycle: &mut FetchLifecycle<T>,
    request: F,
) -> Option<Fetch<T>>
where
    F: FnOnce(Arc<R>) -> Fut,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
{
    match connection {
        Connection::Ready(repository) => {
            let token = lifecycle.begin();
            Some(Fetch {
                token,
                future: Box::pin(request(Arc::clone(repository))),
            })
        }
        Connection::Unconfigured => {
            lifecycle.fail_immediately(FetchError::configuration_missing());
            None
        }
    }
}
