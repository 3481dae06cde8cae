pub mod celebrity;
pub mod config;
pub mod debounce;
pub mod error;
pub mod http;
pub mod server;
pub mod suggestions;

pub use celebrity::fetch_celebrity_data;
pub use debounce::{Debouncer, debounce};
pub use error::{Error, Result};
pub use suggestions::fetch_celebrity_suggestions;
