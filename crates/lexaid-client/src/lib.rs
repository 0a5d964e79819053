pub mod api;
pub mod chat;
pub mod error;
pub mod reply;
pub mod upload;

pub use api::*;
pub use chat::*;
pub use error::*;
pub use reply::*;
pub use upload::*;
