// src/app.rs
use anyhow::{Context, Result};
use numtext_infra::{FileLineSource, FileReportSink};
use numtext_ports::ReportSink;
use numtext_usecase::{ComputeStatistics, ConvertNumbers, CountWords};

use crate::{
    config::Config,
    options::Tool,
    presentation::{self, Report},
};

pub fn run(config: &Config) -> Result<()> {
    let source = FileLineSource::new(&config.input);
    log::debug!("running {:?} on {}", config.tool, config.input.display());

    match config.tool {
        Tool::Statistics => emit(&ComputeStatistics::new(&source).run()?, config),
        Tool::Conversion => emit(&ConvertNumbers::new(&source).run()?, config),
        Tool::WordCount => emit(&CountWords::new(&source).run()?, config),
    }
}

fn emit<R: Report>(report: &R, config: &Config) -> Result<()> {
    presentation::print_rejected(report.rejected());

    let rendered =
        presentation::render(report, config.format).context("failed to render results")?;
    if config.echo {
        print!("{rendered}");
    }

    if config.save {
        let sink = FileReportSink::new(&config.output);
        // 保存の失敗は報告のみ。集計自体は成功として扱う
        if let Err(e) = sink.publish(&rendered) {
            eprintln!("[warn] failed to save results to {}: {e}", sink.describe());
        }
    }
    Ok(())
}
