use clap::ValueEnum;

use crate::options::OutputFormat;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}
