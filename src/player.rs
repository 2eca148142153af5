//! 検査シーケンスの再生
//!
//! tokioのintervalで `Sequencer::tick` を駆動する。最初のtickは1周期後
//! （ブラウザの setInterval と同じ）。完了またはキャンセルでintervalを破棄する。

use aoi_common::{Phase, Sequencer, Summary, TickOutcome};
use std::future::Future;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// 再生の進行を受け取る
pub trait PlaybackObserver {
    /// 1件公開された
    fn on_reveal(&mut self, sequencer: &Sequencer, index: usize);

    /// 完了した
    fn on_complete(&mut self, sequencer: &Sequencer, summary: &Summary);
}

/// 再生の終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEnd {
    Completed(Summary),
    Cancelled { revealed: usize },
}

/// シグナル待ちをキャンセル用Futureにする。
/// ハンドラを登録できなかった場合はキャンセルせず最後まで再生させる
pub async fn cancel_on<S>(signal: S)
where
    S: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        tracing::warn!(error = %err, "cancel signal unavailable, playback cannot be interrupted");
        std::future::pending::<()>().await;
    }
}

/// 完了まで再生する。`cancel` が先に完了したらその時点で止める
pub async fn play<O, C>(sequencer: &mut Sequencer, observer: &mut O, cancel: C) -> PlaybackEnd
where
    O: PlaybackObserver + ?Sized,
    C: Future<Output = ()>,
{
    if sequencer.start() == Phase::Complete {
        // 空データセット: タイマーを起動しない
        let summary = sequencer.tally();
        observer.on_complete(sequencer, &summary);
        return PlaybackEnd::Completed(summary);
    }

    let period = sequencer.tick_period();
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tracing::info!(total = sequencer.total(), period_ms = period.as_millis() as u64, "inspection started");

    tokio::pin!(cancel);

    loop {
        tokio::select! {
            _ = &mut cancel => {
                tracing::warn!(revealed = sequencer.revealed_count(), "inspection cancelled");
                return PlaybackEnd::Cancelled { revealed: sequencer.revealed_count() };
            }
            _ = ticker.tick() => {
                match sequencer.tick() {
                    TickOutcome::Revealed { index, slot, finished } => {
                        tracing::debug!(index, slot, finished, "record revealed");
                        observer.on_reveal(sequencer, index);
                    }
                    TickOutcome::Completed | TickOutcome::Ignored => {}
                }

                if let Some(summary) = sequencer.summary() {
                    tracing::info!(passed = summary.passed, failed = summary.failed, "inspection complete");
                    observer.on_complete(sequencer, &summary);
                    return PlaybackEnd::Completed(summary);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoi_common::{Dataset, SequencerConfig};
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        revealed: Vec<(usize, String)>,
        completed: Option<Summary>,
    }

    impl PlaybackObserver for Recorder {
        fn on_reveal(&mut self, sequencer: &Sequencer, index: usize) {
            let id = sequencer.revealed()[index].board_id.clone();
            self.revealed.push((index, id));
        }

        fn on_complete(&mut self, _sequencer: &Sequencer, summary: &Summary) {
            assert!(self.completed.is_none(), "完了が2回通知された");
            self.completed = Some(*summary);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_reference_takes_five_periods() {
        let mut sequencer = Sequencer::reference();
        let mut recorder = Recorder::default();
        let started = Instant::now();

        let end = play(&mut sequencer, &mut recorder, std::future::pending()).await;

        assert_eq!(end, PlaybackEnd::Completed(Summary { passed: 2, failed: 3, total: 5 }));
        assert_eq!(started.elapsed(), Duration::from_millis(10_000));
        assert_eq!(recorder.revealed.len(), 5);
        assert_eq!(recorder.revealed[0], (0, "PCB-001".to_string()));
        assert_eq!(recorder.completed, Some(Summary { passed: 2, failed: 3, total: 5 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_empty_dataset_never_ticks() {
        let mut sequencer = Sequencer::new(Dataset::empty(), SequencerConfig::default()).unwrap();
        let mut recorder = Recorder::default();
        let started = Instant::now();

        let end = play(&mut sequencer, &mut recorder, std::future::pending()).await;

        assert_eq!(end, PlaybackEnd::Completed(Summary::default()));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(recorder.revealed.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_mutation() {
        let mut sequencer = Sequencer::reference();
        let mut recorder = Recorder::default();

        // 2件公開後、3件目の前にキャンセル
        let cancel = tokio::time::sleep(Duration::from_millis(5_000));
        let end = play(&mut sequencer, &mut recorder, cancel).await;

        assert_eq!(end, PlaybackEnd::Cancelled { revealed: 2 });
        assert_eq!(sequencer.revealed_count(), 2);
        assert!(sequencer.is_playing());
        assert!(recorder.completed.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_signal_does_not_cancel() {
        let mut sequencer = Sequencer::reference();
        let mut recorder = Recorder::default();

        let signal = async { Err(std::io::Error::other("signal handler unavailable")) };
        let end = play(&mut sequencer, &mut recorder, cancel_on(signal)).await;

        assert!(matches!(end, PlaybackEnd::Completed(summary) if summary.total == 5));
        assert_eq!(recorder.revealed.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_cancels_playback() {
        let mut sequencer = Sequencer::reference();
        let mut recorder = Recorder::default();

        let signal = async {
            tokio::time::sleep(Duration::from_millis(3_000)).await;
            Ok(())
        };
        let end = play(&mut sequencer, &mut recorder, cancel_on(signal)).await;

        assert_eq!(end, PlaybackEnd::Cancelled { revealed: 1 });
    }
}
