pub mod actions;
pub mod config;
pub mod persistence;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::*;
pub use config::*;
pub use persistence::*;
pub use reducer::*;
pub use state::*;
pub use store::*;
