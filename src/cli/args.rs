// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use super::value_enum::CliOutputFormat;
use crate::options::Tool;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "numtext",
    version = crate::VERSION,
    about = "基本アルゴリズムによる統計量計算・基数変換・単語頻度集計ツール"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", global = true, help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 結果の保存先（既定はツールごとの固定ファイル名）
    #[arg(long, short, global = true, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 結果をファイルに保存しない
    #[arg(long, global = true, conflicts_with = "output", help_heading = "出力")]
    pub no_save: bool,

    /// 結果をコンソールに表示しない
    #[arg(long, short, global = true, help_heading = "出力")]
    pub quiet: bool,

    /// 詳細ログを出力
    #[arg(long, short, global = true, conflicts_with = "quiet", help_heading = "動作")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ToolCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ToolCommand {
    /// 記述統計量（件数・平均・中央値・最頻値・標本分散・標準偏差）を計算
    Stats {
        /// 1行に1つの数値を含む入力ファイル
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// 整数を2進数・16進数に変換（負数は2の補数）
    Convert {
        /// 1行に1つの整数を含む入力ファイル
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// 単語の出現頻度を集計（ASCII大文字小文字を区別しない）
    #[command(name = "wordcount", visible_alias = "words")]
    WordCount {
        /// 空白区切りの単語を含む入力ファイル
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

impl ToolCommand {
    pub fn tool(&self) -> Tool {
        match self {
            Self::Stats { .. } => Tool::Statistics,
            Self::Convert { .. } => Tool::Conversion,
            Self::WordCount { .. } => Tool::WordCount,
        }
    }

    pub fn file(&self) -> &PathBuf {
        match self {
            Self::Stats { file } | Self::Convert { file } | Self::WordCount { file } => file,
        }
    }
}
