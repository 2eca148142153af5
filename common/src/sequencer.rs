//! 検査シーケンサ
//!
//! 固定データセットを一定周期で1件ずつ公開していく状態機械。
//! タイマー自体は持たず、呼び出し側（ブラウザのinterval / tokioのinterval）が
//! `tick()` を駆動する。
//!
//! 状態遷移: Idle --start--> Running --最終tick--> Complete
//! （データセットが空なら start で即 Complete）

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::types::{InspectionRecord, Verdict};
use crate::view::{BeltSlot, TableRow};
use serde::Serialize;
use std::time::Duration;

/// 既定のtick周期
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(2000);

/// 既定のベルト表示スロット数
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// シーケンサ設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerConfig {
    pub tick_period: Duration,
    pub slot_count: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            slot_count: DEFAULT_SLOT_COUNT,
        }
    }
}

impl SequencerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slot_count == 0 {
            return Err(Error::Config("slot count must be at least 1".into()));
        }
        if self.tick_period.is_zero() {
            return Err(Error::Config("tick period must be greater than zero".into()));
        }
        Ok(())
    }
}

/// 再生フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Running,
    Complete,
}

/// `tick()` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 1件公開した。`finished` は最後の1件だった場合 true
    Revealed { index: usize, slot: usize, finished: bool },
    /// 公開対象が残っておらず停止した
    Completed,
    /// 実行中でないため何もしなかった
    Ignored,
}

/// 合否集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
}

impl Summary {
    pub fn from_records(records: &[InspectionRecord]) -> Self {
        let passed = records.iter().filter(|r| r.verdict.is_pass()).count();
        Self {
            passed,
            failed: records.len() - passed,
            total: records.len(),
        }
    }
}

/// ベルト上でハイライトするスロット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHighlight {
    pub slot: usize,
    pub verdict: Verdict,
}

/// 実行状態（画面ごとに新規作成され、tickでのみ変化する）
#[derive(Debug, Clone, PartialEq)]
struct RunState {
    revealed: Vec<InspectionRecord>,
    cursor: usize,
    slot: usize,
    phase: Phase,
}

impl RunState {
    fn new() -> Self {
        Self {
            revealed: Vec::new(),
            cursor: 0,
            slot: 0,
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sequencer {
    dataset: Dataset,
    config: SequencerConfig,
    state: RunState,
}

impl Sequencer {
    pub fn new(dataset: Dataset, config: SequencerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dataset,
            config,
            state: RunState::new(),
        })
    }

    /// 参照データ・既定設定のシーケンサ
    pub fn reference() -> Self {
        Self {
            dataset: Dataset::reference(),
            config: SequencerConfig::default(),
            state: RunState::new(),
        }
    }

    /// 再生開始。空データセットは即完了（タイマー不要）
    pub fn start(&mut self) -> Phase {
        if self.state.phase == Phase::Idle {
            self.state.phase = if self.dataset.is_empty() {
                Phase::Complete
            } else {
                Phase::Running
            };
        }
        self.state.phase
    }

    /// 周期ごとに呼ばれ、次の1件を公開する
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.phase != Phase::Running {
            return TickOutcome::Ignored;
        }

        let Some(record) = self.dataset.get(self.state.cursor) else {
            self.state.phase = Phase::Complete;
            return TickOutcome::Completed;
        };

        let index = self.state.cursor;
        self.state.revealed.push(record.clone());
        self.state.cursor += 1;
        self.state.slot = (self.state.slot + 1) % self.config.slot_count;

        let finished = self.state.cursor == self.dataset.len();
        if finished {
            self.state.phase = Phase::Complete;
        }

        TickOutcome::Revealed {
            index,
            slot: self.state.slot,
            finished,
        }
    }

    /// 開始から完了まで同期的に駆動して集計を返す
    pub fn run_to_end(&mut self) -> Summary {
        self.start();
        while self.state.phase == Phase::Running {
            self.tick();
        }
        self.tally()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_playing(&self) -> bool {
        self.state.phase != Phase::Complete
    }

    pub fn is_complete(&self) -> bool {
        self.state.phase == Phase::Complete
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn revealed(&self) -> &[InspectionRecord] {
        &self.state.revealed
    }

    pub fn revealed_count(&self) -> usize {
        self.state.revealed.len()
    }

    pub fn total(&self) -> usize {
        self.dataset.len()
    }

    /// 現在のスロット位置
    pub fn slot(&self) -> usize {
        self.state.slot
    }

    pub fn slot_count(&self) -> usize {
        self.config.slot_count
    }

    pub fn tick_period(&self) -> Duration {
        self.config.tick_period
    }

    pub fn last_revealed(&self) -> Option<&InspectionRecord> {
        self.state.revealed.last()
    }

    /// 直近に公開した結果に応じたスロットのハイライト
    pub fn highlight(&self) -> Option<SlotHighlight> {
        self.last_revealed().map(|record| SlotHighlight {
            slot: self.state.slot,
            verdict: record.verdict,
        })
    }

    /// 再生中に表示するプレースホルダ行数
    pub fn pending_count(&self) -> usize {
        if self.is_playing() {
            self.total() - self.revealed_count()
        } else {
            0
        }
    }

    /// 公開済みレコードの集計（いつでも取得可）
    pub fn tally(&self) -> Summary {
        Summary::from_records(&self.state.revealed)
    }

    /// 完了時のみの最終集計
    pub fn summary(&self) -> Option<Summary> {
        self.is_complete().then(|| self.tally())
    }

    /// 結果テーブルの行（公開済み + プレースホルダ）
    pub fn table_rows(&self) -> Vec<TableRow<'_>> {
        self.state
            .revealed
            .iter()
            .map(TableRow::Revealed)
            .chain(std::iter::repeat(TableRow::Pending).take(self.pending_count()))
            .collect()
    }

    /// ベルト上の全スロット
    pub fn belt_slots(&self) -> Vec<BeltSlot> {
        let highlight = self.highlight();
        (0..self.config.slot_count)
            .map(|index| BeltSlot::new(index, highlight.filter(|h| h.slot == index).map(|h| h.verdict)))
            .collect()
    }
}
