//! Minimal trailhead example — a few routes driven by hand-made requests.
//!
//! trailhead has no socket of its own; in a real service the transport builds
//! each `Request` and writes out the `Response`. Here we play transport.
//!
//! Run with:
//!   cargo run --example basic

use std::time::Duration;

use trailhead::{Flow, Outcome, Request, Response, ResponseBuilder, Router, Status, health};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let app = Router::new()
        .middleware(reject_legacy_clients)
        .get("/users/:id",    get_user)
        .post("/users",       create_user)
        .delete("/users/:id", delete_user)
        .get("/healthz",      health::liveness)
        .get("/readyz",       health::readiness);

    let requests = [
        Request::new("GET", "/users/42?fields=name"),
        Request::new("POST", "/users").with_body(r#"{"name":"alice"}"#),
        Request::new("POST", "/users"),
        Request::new("DELETE", "/users/42"),
        Request::new("GET", "/healthz"),
        Request::new("GET", "/users/42").with_header("user-agent", "legacy/1.0"),
        Request::new("PUT", "/users/42"),
    ];

    for req in requests {
        let line = format!("{} {}", req.method(), req.url());
        match app.on_request(req).await {
            Ok(res) => println!("{line} -> {} {:?}", res.status_code(), res.body()),
            Err(e) => println!("{line} -> failed: {e}"),
        }
    }
}

// Rejects one client family outright; everyone else passes through.
fn reject_legacy_clients(req: Request) -> Flow {
    match req.header("user-agent") {
        Some(ua) if ua.starts_with("legacy/") => Flow::Respond(
            ResponseBuilder::builder()
                .status_code(Status::Forbidden)
                .body("upgrade your client")
                .build(),
        ),
        _ => Flow::Next(req),
    }
}

// GET /users/:id
//
// Parameters are not extracted for you; the last path segment is the id.
fn get_user(req: Request) -> Response {
    let id = req.path().rsplit('/').next().unwrap_or("unknown");
    Response::json(format!(r#"{{"id":"{id}","name":"alice"}}"#))
}

// POST /users — pretends to talk to a database first.
fn create_user(req: Request) -> Outcome {
    Outcome::deferred(async move {
        if req.body().is_none_or(str::is_empty) {
            return Response::status(Status::BadRequest);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        ResponseBuilder::builder()
            .status_code(Status::Created)
            .header("location", "/users/99")
            .body(r#"{"id":"99","name":"new_user"}"#)
            .build()
    })
}

// DELETE /users/:id → 204 No Content
fn delete_user(_req: Request) -> Status {
    Status::NoContent
}
