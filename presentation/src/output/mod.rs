//! Output formatting for purchase results

pub mod console;
pub mod formatter;
