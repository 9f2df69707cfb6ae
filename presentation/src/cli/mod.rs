//! Command-line surface: argument definitions and request input.

pub mod commands;
pub mod request_file;
pub mod ticket_arg;
