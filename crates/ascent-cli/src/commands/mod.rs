//! Command handlers, one module per subcommand.

pub mod grades;
pub mod init;
pub mod log;
pub mod misc;
