//! 検査シーケンサの性質テスト
//!
//! 公開順序・終了条件・集計・スロット循環を検証

use aoi_common::{
    Dataset, InspectionRecord, Phase, Sequencer, SequencerConfig, Summary, TickOutcome,
};
use std::time::Duration;

fn dataset_of(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            if i % 3 == 0 {
                InspectionRecord::pass(format!("PCB-{:03}", i + 1), 95.0)
            } else {
                InspectionRecord::fail(format!("PCB-{:03}", i + 1), "Solder Bridge", 80.0)
            }
        })
        .collect();
    Dataset::new(records).expect("データセット構築失敗")
}

fn config(slot_count: usize) -> SequencerConfig {
    SequencerConfig {
        tick_period: Duration::from_millis(2000),
        slot_count,
    }
}

/// k回のtick後、先頭k件が順序通り公開されている
#[test]
fn test_prefix_revealed_after_k_ticks() {
    for n in 0..=8 {
        let dataset = dataset_of(n);
        for k in 0..=n {
            let mut sequencer = Sequencer::new(dataset.clone(), config(3)).unwrap();
            sequencer.start();
            for _ in 0..k {
                sequencer.tick();
            }
            assert_eq!(sequencer.revealed_count(), k);
            assert_eq!(sequencer.revealed(), &dataset.records()[..k]);
        }
    }
}

/// 全件公開で停止し、以降は変化しない
#[test]
fn test_terminal_state_is_frozen() {
    let mut sequencer = Sequencer::new(dataset_of(4), config(3)).unwrap();
    sequencer.start();
    for _ in 0..4 {
        assert!(sequencer.is_playing());
        sequencer.tick();
    }
    assert!(!sequencer.is_playing());
    assert_eq!(sequencer.phase(), Phase::Complete);

    let revealed = sequencer.revealed().to_vec();
    let slot = sequencer.slot();
    for _ in 0..10 {
        assert_eq!(sequencer.tick(), TickOutcome::Ignored);
    }
    assert_eq!(sequencer.revealed(), revealed.as_slice());
    assert_eq!(sequencer.slot(), slot);
}

/// 合否の合計は常に公開件数と一致
#[test]
fn test_tally_sums_to_revealed() {
    let mut sequencer = Sequencer::new(dataset_of(7), config(3)).unwrap();
    sequencer.start();
    loop {
        let tally = sequencer.tally();
        assert_eq!(tally.passed + tally.failed, sequencer.revealed_count());
        if !sequencer.is_playing() {
            break;
        }
        sequencer.tick();
    }
    let summary = sequencer.summary().expect("完了していない");
    assert_eq!(summary.passed + summary.failed, 7);
    assert_eq!(summary.total, 7);
}

/// スロットはデータ件数に関係なくM値を循環
#[test]
fn test_slot_pointer_cycles_m_values() {
    for m in 1..=5 {
        let mut sequencer = Sequencer::new(dataset_of(12), config(m)).unwrap();
        sequencer.start();

        let mut seen = std::collections::BTreeSet::new();
        let mut previous = sequencer.slot();
        while let TickOutcome::Revealed { slot, .. } = sequencer.tick() {
            assert!(slot < m);
            assert_eq!(slot, (previous + 1) % m);
            seen.insert(slot);
            previous = slot;
        }
        assert_eq!(seen.len(), m);
    }
}

/// 参照シナリオ: 5件（PASS 2 / FAIL 3）、2000ms、M=3
#[test]
fn test_reference_scenario() {
    let mut sequencer = Sequencer::reference();
    assert_eq!(sequencer.tick_period(), Duration::from_millis(2000));
    assert_eq!(sequencer.slot_count(), 3);

    sequencer.start();
    for _ in 0..5 {
        sequencer.tick();
    }

    assert_eq!(sequencer.revealed_count(), 5);
    assert!(!sequencer.is_playing());
    assert_eq!(sequencer.summary(), Some(Summary { passed: 2, failed: 3, total: 5 }));
}

/// 空データセットは即完了
#[test]
fn test_empty_dataset_completes_immediately() {
    let mut sequencer = Sequencer::new(Dataset::empty(), config(3)).unwrap();
    assert_eq!(sequencer.start(), Phase::Complete);
    assert_eq!(sequencer.summary(), Some(Summary { passed: 0, failed: 0, total: 0 }));
    assert!(sequencer.table_rows().is_empty());
}
