//! Statistics requests and their text rendering.

pub mod format;
pub mod reader;

pub use format::format_general;
pub use reader::{print_stat, process_stat_requests, StatRequest};
