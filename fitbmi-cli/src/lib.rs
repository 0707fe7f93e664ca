pub mod config;
pub mod input;
pub mod interactive;
pub mod render;
pub mod session;

pub use config::Config;
pub use session::Session;
