use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aoi-inspector")]
#[command(about = "PCB外観検査（AOI）デモ: 画像を収集し検査結果を再生", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を収集して検査シーケンスを再生
    Inspect {
        /// 画像ファイルまたはフォルダ（フォルダ内の画像以外は除外）
        paths: Vec<PathBuf>,

        /// フォルダを再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// tick周期（ミリ秒）
        #[arg(long)]
        period_ms: Option<u64>,

        /// ベルト表示スロット数
        #[arg(long)]
        slots: Option<usize>,

        /// 再生するデータセットJSON
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// 結果レポートJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 進捗バーを表示しない
        #[arg(long)]
        no_animation: bool,
    },

    /// 再生対象のデータセットを表示
    Dataset {
        /// データセットJSON（省略時は設定または参照データ）
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// tick周期（ミリ秒）を設定
        #[arg(long)]
        set_period_ms: Option<u64>,

        /// ベルト表示スロット数を設定
        #[arg(long)]
        set_slots: Option<usize>,

        /// 既定のデータセットJSONを設定
        #[arg(long)]
        set_dataset: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::parse_from([
            "aoi-inspector", "inspect", "boards/", "extra.png", "--period-ms", "100", "--slots", "4",
        ]);
        match cli.command {
            Commands::Inspect { paths, period_ms, slots, recursive, .. } => {
                assert_eq!(paths, [PathBuf::from("boards/"), PathBuf::from("extra.png")]);
                assert_eq!(period_ms, Some(100));
                assert_eq!(slots, Some(4));
                assert!(!recursive);
            }
            _ => panic!("inspect として解析されなかった"),
        }
    }

    #[test]
    fn test_parse_inspect_without_paths() {
        let cli = Cli::parse_from(["aoi-inspector", "-v", "inspect"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Inspect { ref paths, .. } if paths.is_empty()));
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::parse_from(["aoi-inspector", "config", "--show", "--set-slots", "5"]);
        assert!(matches!(
            cli.command,
            Commands::Config { show: true, set_slots: Some(5), .. }
        ));
    }
}
