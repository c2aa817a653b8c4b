mod args;
mod value_enum;

pub use args::{Args, ToolCommand};
pub use value_enum::CliOutputFormat;
