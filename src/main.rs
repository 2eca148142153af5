use anyhow::Context;
use aoi_common::{Notice, NoticeLevel, Sequencer, UploadCollector};
use aoi_inspector::{cli, config, player, render, report, scanner};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use player::PlaybackEnd;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    // config サブコマンドは壊れた設定ファイルでも修正できるようにする
    let config = match &cli.command {
        Commands::Config { .. } => Config::load_or_default()?,
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Inspect { paths, recursive, period_ms, slots, dataset, output, no_animation } => {
            println!("AOI Inspector - Upload PCB Images for Inspection\n");

            // 1. 画像収集
            let mut collector = UploadCollector::new();
            let scan = scanner::collect_paths(&paths, recursive, &mut collector)?;
            for notice in &scan.notices {
                print_notice(notice);
            }

            // 2. 検査開始（空なら警告のみで終了）
            let handoff = match collector.submit() {
                Ok(handoff) => handoff,
                Err(err) => {
                    print_notice(&Notice::from(&err));
                    return Err(err.into());
                }
            };
            println!("Uploaded Files ({})", handoff.len());
            for name in handoff.file_names() {
                println!("  {}", name);
            }
            println!();

            // 3. 再生
            let dataset = config.resolve_dataset(dataset.as_deref())?;
            let seq_config = config.sequencer_config(period_ms, slots)?;
            let mut sequencer = Sequencer::new(dataset, seq_config)?;
            let mut observer = render::TerminalObserver::new(sequencer.total(), !no_animation);
            let started_at = chrono::Local::now();

            let cancel = player::cancel_on(tokio::signal::ctrl_c());
            let end = player::play(&mut sequencer, &mut observer, cancel).await;

            if let PlaybackEnd::Cancelled { revealed } = end {
                println!("\nInspection cancelled after {} of {} boards", revealed, sequencer.total());
            }

            // 4. レポート保存
            if let Some(output) = output {
                report::RunReport::new(handoff, &sequencer, started_at)
                    .save(&output)
                    .with_context(|| format!("write report {}", output.display()))?;
                println!("Report saved: {}", output.display());
            }
        }

        Commands::Dataset { file } => {
            let dataset = config.resolve_dataset(file.as_deref())?;
            let mut sequencer = Sequencer::new(dataset, config.sequencer_config(None, None)?)?;
            sequencer.run_to_end();
            println!("{}", render::format_table(&sequencer.table_rows()));
            println!("\n{}", render::format_summary(&sequencer.tally()));
        }

        Commands::Config { show, set_period_ms, set_slots, set_dataset } => {
            let mut config = config;
            let changed = set_period_ms.is_some() || set_slots.is_some() || set_dataset.is_some();

            if let Some(ms) = set_period_ms {
                config.period_ms = ms;
            }
            if let Some(slots) = set_slots {
                config.slot_count = slots;
            }
            if let Some(path) = set_dataset {
                config.dataset = Some(path);
            }

            if changed {
                config.validate()?;
                config.save()?;
                println!("Config saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Config:");
                println!("  Period: {}ms", config.period_ms);
                println!("  Slots: {}", config.slot_count);
                match &config.dataset {
                    Some(path) => println!("  Dataset: {}", path.display()),
                    None => println!("  Dataset: (reference)"),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_notice(notice: &Notice) {
    let mark = match notice.level {
        NoticeLevel::Info => "✔",
        NoticeLevel::Warning => "⚠",
    };
    println!("{} {}: {}", mark, notice.title, notice.description);
}
