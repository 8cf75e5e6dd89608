//! CLI operation handlers.
//!
//! - [`check`]: Resolve configuration, fetch and validate the description
//! - [`logging`]: Diagnostic logging on stderr
//!
//! Output formatting utilities are in [`output`].

pub mod check;
pub mod logging;
pub mod output;
