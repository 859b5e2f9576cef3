pub mod command_stream;
pub mod error;
pub mod logging;
pub mod output_macros;
pub mod user_paths;
