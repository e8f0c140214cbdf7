pub mod chat_handlers;
pub mod system_handlers;

pub use chat_handlers::*;
pub use system_handlers::*;
