//! Local command dispatch pipeline
//!
//! Raw text -> parser -> registry lookup -> handler -> normalized
//! [`CommandResult`]. The same result schema is produced by the process
//! bridge, so callers never care which path served them.

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod registry;
pub mod result;

pub use executor::CommandExecutor;
pub use handlers::CommandHandler;
pub use registry::CommandRegistry;
pub use result::CommandResult;
