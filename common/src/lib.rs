//! AOI Inspector Common Library
//!
//! CLIとWeb(WASM)で共有される型と検査シーケンサ

pub mod types;
pub mod dataset;
pub mod sequencer;
pub mod collector;
pub mod handoff;
pub mod notice;
pub mod view;
pub mod error;

pub use types::{InspectionRecord, Verdict, NO_DEFECT};
pub use dataset::Dataset;
pub use sequencer::{Phase, Sequencer, SequencerConfig, SlotHighlight, Summary, TickOutcome};
pub use collector::{is_image_mime, StartAction, UploadCollector, UploadedFile};
pub use handoff::{Handoff, HandoffSlot};
pub use notice::{Notice, NoticeLevel};
pub use view::{BeltSlot, TableRow};
pub use error::{Error, Result};
