// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use numtext_shared_kernel::PresentationError;

use crate::{
    cli::Args,
    options::{OutputFormat, Tool},
};

/// Resolved run configuration for one tool invocation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub tool: Tool,
    pub input: PathBuf,
    #[builder(default)]
    pub format: OutputFormat,
    /// Where the rendered report is saved.
    pub output: PathBuf,
    #[builder(default = "true")]
    pub save: bool,
    /// Print the rendered report to stdout.
    #[builder(default = "true")]
    pub echo: bool,
    #[builder(default)]
    pub verbose: bool,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let tool = args.command.tool();
        let input = args.command.file().clone();
        if input.as_os_str().is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "FILE".to_string(),
                value: String::new(),
                reason: "input file must not be empty".to_string(),
            });
        }

        let output = args
            .output
            .unwrap_or_else(|| PathBuf::from(tool.default_output()));

        ConfigBuilder::default()
            .tool(tool)
            .input(input)
            .format(OutputFormat::from(args.format))
            .output(output)
            .save(!args.no_save)
            .echo(!args.quiet)
            .verbose(args.verbose)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
