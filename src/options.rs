use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 行指向のレポート（既定）
    #[default]
    Text,
    Json,
    Yaml,
}

/// 実行するツール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Statistics,
    Conversion,
    WordCount,
}

impl Tool {
    /// File the report is saved to unless `--output` is given.
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Statistics => "StatisticsResults.txt",
            Self::Conversion => "ConvertionResults.txt",
            Self::WordCount => "WordCountResults.txt",
        }
    }
}
