//! # trailhead
//!
//! A minimal HTTP request router. Register path/method pairs, hand it
//! requests, get responses back. Nothing more.
//!
//! ## The contract
//!
//! trailhead owns the part that differs between applications: which code
//! answers which request. Everything around it belongs to the transport that
//! embeds it:
//!
//! - **Sockets, TLS, HTTP framing** — your server produces a [`Request`] and
//!   writes out the [`Response`]
//! - **Body parsing** — the body is a string; decode it however you like
//! - **Query strings** — ignored for matching, left in [`Request::url`]
//!
//! What's left for trailhead:
//!
//! - First-match routing — `:name` segments match any single segment, the
//!   first registered route wins
//! - Ready or deferred handlers — both come back as an awaitable [`Outcome`]
//! - A default empty `404` when nothing matches
//!
//! ## Quick start
//!
//! ```rust
//! use trailhead::{Outcome, Request, Response, ResponseBuilder, Router, Status};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let app = Router::new()
//!     .get("/users/:id", get_user)
//!     .post("/users", create_user);
//!
//! let res = app.on_request(Request::new("GET", "/users/42")).await.unwrap();
//! assert_eq!(res.status_code(), 200);
//!
//! let res = app.on_request(Request::new("GET", "/nope")).await.unwrap();
//! assert_eq!(res.status_code(), 404);
//! # }
//!
//! fn get_user(req: Request) -> Response {
//!     // parameters are not extracted; read them off the path yourself
//!     let id = req.path().rsplit('/').next().unwrap_or_default();
//!     Response::json(format!(r#"{{"id":"{id}"}}"#))
//! }
//!
//! fn create_user(req: Request) -> Outcome {
//!     Outcome::deferred(async move {
//!         if req.body().is_none_or(str::is_empty) {
//!             return Response::status(Status::BadRequest);
//!         }
//!         ResponseBuilder::builder()
//!             .status_code(Status::Created)
//!             .header("location", "/users/99")
//!             .build()
//!     })
//! }
//! ```

mod error;
mod handler;
mod method;
mod path;
mod request;
mod response;
mod router;
mod status;

pub mod health;
pub mod middleware;

pub use error::{BoxError, Error};
pub use handler::{Handler, IntoOutcome, Outcome};
pub use method::Method;
pub use middleware::{Flow, Middleware};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::{Route, Router};
pub use status::Status;
