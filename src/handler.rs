//! Handler trait, type erasure, and the [`Outcome`] a handler produces.
//!
//! # Ready now, or later
//!
//! A handler may have its response at hand (a cache hit, a static page) or
//! need to wait for something (a database, another service). Both are an
//! [`Outcome`]: either a value that is already there, or a boxed future that
//! will produce one. The router does not care which. It hands the outcome
//! back to the transport, which awaits it.
//!
//! ```text
//! fn hello(req: Request) -> Response { … }     ← user writes this
//!        ↓ router.get("/", hello)
//! hello.into_boxed_handler()                   ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(hello))                   ← stored as BoxedHandler
//!        ↓
//! handler.call(req) at request time            ← one vtable dispatch
//!        ↓
//! hello(req).into_outcome()                    ← Outcome::Ready / Deferred
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use crate::error::{BoxError, Error};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Outcome ───────────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a handler result.
///
/// `Send + 'static` lets the transport move it across threads.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send + 'static>>;

/// The result of dispatching one request.
///
/// `Outcome` is a [`Future`]; `.await` it to get the `Response` or the
/// handler's failure. A ready outcome completes on its first poll.
///
/// ```rust
/// use trailhead::{Outcome, Response};
///
/// let now = Outcome::ready(Response::text("cached"));
/// assert!(now.is_ready());
///
/// let later = Outcome::deferred(async { Response::text("fresh") });
/// assert!(!later.is_ready());
/// ```
#[must_use = "an Outcome does nothing until awaited"]
pub struct Outcome(Inner);

enum Inner {
    Ready(Option<Result<Response, Error>>),
    Deferred(BoxFuture),
}

impl Outcome {
    pub fn ready(response: Response) -> Self {
        Self(Inner::Ready(Some(Ok(response))))
    }

    /// An outcome that is already known to have failed.
    pub fn failed(err: impl Into<BoxError>) -> Self {
        Self(Inner::Ready(Some(Err(Error::handler(err)))))
    }

    /// Wraps work that completes later. The future's output may be anything a
    /// handler could return directly, including a `Result`.
    pub fn deferred<F, R>(future: F) -> Self
    where
        F: Future<Output = R> + Send + 'static,
        R: IntoOutcome + Send + 'static,
    {
        Self(Inner::Deferred(Box::pin(async move { future.await.into_outcome().await })))
    }

    /// `true` when no suspension is needed to obtain the result.
    pub fn is_ready(&self) -> bool {
        matches!(self.0, Inner::Ready(_))
    }
}

impl Future for Outcome {
    type Output = Result<Response, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().0 {
            Inner::Ready(slot) => {
                Poll::Ready(slot.take().expect("Outcome polled after completion"))
            }
            Inner::Deferred(future) => future.as_mut().poll(cx),
        }
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Inner::Ready(res) => f.debug_tuple("Outcome::Ready").field(res).finish(),
            Inner::Deferred(_) => f.write_str("Outcome::Deferred(..)"),
        }
    }
}

// ── IntoOutcome ───────────────────────────────────────────────────────────────

/// Anything a handler may return.
///
/// Covers every [`IntoResponse`] type, `Result<impl IntoResponse, E>` for any
/// error convertible into a boxed error, and [`Outcome`] itself for handlers
/// that defer their work.
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome { self }
}

impl<R: IntoResponse> IntoOutcome for R {
    fn into_outcome(self) -> Outcome {
        Outcome::ready(self.into_response())
    }
}

impl<R, E> IntoOutcome for Result<R, E>
where
    R: IntoResponse,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Outcome {
        match self {
            Ok(res) => Outcome::ready(res.into_response()),
            Err(err) => Outcome::failed(err),
        }
    }
}

// ── Type erasure ──────────────────────────────────────────────────────────────

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> Outcome;
}

/// A type-erased handler, shared by every route clone and every request.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// You never implement this yourself. It is satisfied by any function or
/// closure with the shape
///
/// ```text
/// fn name(req: Request) -> impl IntoOutcome
/// ```
///
/// Closures need their argument annotated (`|req: Request| …`).
///
/// The trait is **sealed**: only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, R> private::Sealed for F
where
    F: Fn(Request) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
}

impl<F, R> Handler for F
where
    F: Fn(Request) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Newtype holding a concrete handler `F`, bridging it to [`ErasedHandler`].
struct FnHandler<F>(F);

impl<F, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> R + Send + Sync,
    R: IntoOutcome,
{
    fn call(&self, req: Request) -> Outcome {
        (self.0)(req).into_outcome()
    }
}
