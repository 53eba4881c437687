pub mod add;
mod command_result;
pub mod helper;
pub mod init;
pub mod languages;
pub mod list;
pub mod missing;
pub mod sync;
pub mod translate;

pub use command_result::*;
