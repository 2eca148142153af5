//! ターミナル表示
//!
//! 結果テーブル・ベルト・集計の整形と、indicatifによる進捗表示。

use crate::player::PlaybackObserver;
use aoi_common::{BeltSlot, Sequencer, Summary, TableRow};
use indicatif::{ProgressBar, ProgressStyle};

const HEADERS: [&str; 4] = ["PCB ID", "Status", "Defect Type", "Confidence"];
const COLUMN_WIDTHS: [usize; 4] = [10, 14, 20, 10];

pub fn format_row(cells: &[String; 4]) -> String {
    cells
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}

pub fn format_header() -> String {
    format_row(&HEADERS.map(String::from))
}

/// 結果テーブル全体（ヘッダ + 公開済み行 + プレースホルダ行）
pub fn format_table(rows: &[TableRow<'_>]) -> String {
    let mut lines = vec![format_header(), "-".repeat(COLUMN_WIDTHS.iter().sum::<usize>() + 3)];
    lines.extend(rows.iter().map(|row| format_row(&row.cells())));
    lines.join("\n")
}

/// ベルトを1行で表現: `[ ] [P] [ ]`
pub fn format_belt(slots: &[BeltSlot]) -> String {
    slots
        .iter()
        .map(|slot| match slot.flash {
            Some(verdict) if verdict.is_pass() => "[P]",
            Some(_) => "[F]",
            None => "[ ]",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Passed: {}  Failed: {}  Total: {}",
        summary.passed, summary.failed, summary.total
    )
}

/// 1件ずつ行を出力しながら進捗バーを進める
pub struct TerminalObserver {
    progress: ProgressBar,
    animate: bool,
}

impl TerminalObserver {
    pub fn new(total: usize, animate: bool) -> Self {
        let progress = if animate {
            ProgressBar::new(total as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} Inspection in Progress... [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        let observer = Self { progress, animate };
        observer.print_line(format_header());
        observer
    }

    // 非表示のProgressBarはprintlnを捨てるため直接出力する
    fn print_line(&self, line: String) {
        if self.animate {
            self.progress.println(line);
        } else {
            println!("{}", line);
        }
    }
}

impl PlaybackObserver for TerminalObserver {
    fn on_reveal(&mut self, sequencer: &Sequencer, index: usize) {
        if let Some(record) = sequencer.revealed().get(index) {
            self.print_line(format!(
                "{}   {}",
                format_row(&TableRow::Revealed(record).cells()),
                format_belt(&sequencer.belt_slots())
            ));
        }
        self.progress.inc(1);
    }

    fn on_complete(&mut self, _sequencer: &Sequencer, summary: &Summary) {
        self.progress.finish_and_clear();
        println!("\nInspection Complete");
        println!("{}", format_summary(summary));
    }
}
