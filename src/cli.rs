// src/cli.rs
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::{DEFAULT_CONNECTOR_FILE, DEFAULT_INSTALLER_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "patch_version",
    version = crate::VERSION,
    about = "コネクタとインストーラのバージョン番号をリリースタグに合わせて書き換える"
)]
pub struct Args {
    /// リリースタグ (例: 2.14.0)。省略時は何もしない
    pub tag: Option<String>,

    /// 対象ファイルの基準ディレクトリ
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// CONNECTOR_VERSION を含むファイル
    #[arg(long, default_value = DEFAULT_CONNECTOR_FILE)]
    pub connector_file: PathBuf,

    /// Inno Setup スクリプト
    #[arg(long, default_value = DEFAULT_INSTALLER_FILE)]
    pub installer_file: PathBuf,

    /// AppVersion の挿入行 (0 始まり)
    #[arg(long, value_name = "N", conflicts_with = "installer_anchor")]
    pub installer_line: Option<usize>,

    /// この文字列を含む最初の行の直後に挿入する
    #[arg(long, value_name = "TEXT")]
    pub installer_anchor: Option<String>,

    /// CONNECTOR_VERSION が見つからない場合はエラーにする
    #[arg(long)]
    pub strict: bool,

    /// 変更内容を表示するだけでファイルは書き換えない
    #[arg(long)]
    pub dry_run: bool,

    /// ログを詳しくする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// エラー以外のログを出さない
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by `-v`/`-q`; `RUST_LOG` still wins when set.
    pub fn log_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
