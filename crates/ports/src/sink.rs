// crates/ports/src/sink.rs
use numtext_shared_kernel::Result;

/// Port for persisting a rendered report.
pub trait ReportSink {
    fn describe(&self) -> String;

    fn publish(&self, report: &str) -> Result<()>;
}
