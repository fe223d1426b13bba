pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use config::*;
pub use error::*;
pub use handlers::*;
pub use routes::*;
pub use server::*;
