// crates/infra/src/persistence.rs
pub mod file_reader;
pub mod file_writer;

pub use file_reader::{FileLineSource, FileReader};
pub use file_writer::{FileReportSink, FileWriter};
