pub mod api_handlers;

pub use api_handlers::*;
