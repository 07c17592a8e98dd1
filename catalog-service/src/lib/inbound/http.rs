pub mod handlers;
pub mod middleware;
pub mod responder;
pub mod router;
