//! Ready-made health-check handlers.
//!
//! | Check | Path (conventional) | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it serve traffic? |
//!
//! ```rust
//! use trailhead::{Router, health};
//!
//! let app = Router::new()
//!     .get("/healthz", health::liveness)
//!     .get("/readyz", health::readiness);
//! ```
//!
//! Register your own readiness handler instead if traffic should wait on
//! dependencies (a database pool, a warm cache).

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`.
pub fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"`.
pub fn readiness(_req: Request) -> Response {
    Response::text("ready")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Router;

    #[tokio::test]
    async fn health_checks_answer_plain_text() {
        let app = Router::new()
            .get("/healthz", liveness)
            .get("/readyz", readiness);

        let live = app.on_request(Request::new("GET", "/healthz")).await.unwrap();
        assert_eq!(live.status_code(), 200);
        assert_eq!(live.body(), "ok");

        let ready = app.on_request(Request::new("GET", "/readyz")).await.unwrap();
        assert_eq!(ready.body(), "ready");
        assert_eq!(ready.header("content-type"), Some("text/plain; charset=utf-8"));
    }
}
