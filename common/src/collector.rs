//! アップロードコレクタ
//!
//! ドラッグ&ドロップ / ファイル選択で受け取ったファイルを保持し、
//! 検査開始時にファイル名のみの `Handoff` を作る。内容は保持しない。

use crate::error::{Error, Result};
use crate::handoff::{Handoff, HandoffSlot};
use crate::notice::Notice;

/// 「検査開始」操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartAction {
    /// 受け渡しを書き込んだので検査画面へ遷移する
    Navigate,
    /// 遷移せず通知のみ
    Notify(Notice),
}

/// アップロードされたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }
}

/// MIMEタイプが画像か
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// 追記のみ・重複排除なしのファイルリスト
#[derive(Debug, Clone, Default)]
pub struct UploadCollector {
    files: Vec<UploadedFile>,
}

impl UploadCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// ドロップされたファイルを追加（画像以外は黙って除外）
    ///
    /// 1件以上追加できた場合のみ通知を返す。
    pub fn add_dropped<I>(&mut self, files: I) -> Option<Notice>
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let before = self.files.len();
        self.files.extend(files.into_iter().filter(UploadedFile::is_image));
        let added = self.files.len() - before;
        (added > 0).then(|| Notice::files_dropped(added))
    }

    /// ファイル選択ダイアログの結果を追加（フィルタなし）
    pub fn add_picked<I>(&mut self, files: I) -> Notice
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let before = self.files.len();
        self.files.extend(files);
        Notice::files_selected(self.files.len() - before)
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// 検査開始。空なら `NoFilesSelected`
    pub fn submit(&self) -> Result<Handoff> {
        if self.files.is_empty() {
            return Err(Error::NoFilesSelected);
        }
        Ok(Handoff::new(self.names()))
    }

    /// 検査開始操作: 成功時のみ受け渡し口へ書き込む
    pub fn start_inspection(&self, slot: &mut HandoffSlot) -> StartAction {
        match self.submit() {
            Ok(handoff) => {
                slot.put(handoff);
                StartAction::Navigate
            }
            Err(err) => StartAction::Notify(Notice::from(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    fn png(name: &str) -> UploadedFile {
        UploadedFile::new(name, "image/png", 1024)
    }

    fn text(name: &str) -> UploadedFile {
        UploadedFile::new(name, "text/plain", 12)
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
        assert!(!is_image_mime("application/image"));
    }

    #[test]
    fn test_drop_filters_non_images() {
        let mut collector = UploadCollector::new();
        let notice = collector.add_dropped(vec![png("a.png"), text("notes.txt"), png("b.png")]);

        assert_eq!(collector.names(), ["a.png", "b.png"]);
        let notice = notice.expect("通知がない");
        assert_eq!(notice.description, "2 PCB image(s) ready for inspection");
    }

    #[test]
    fn test_drop_only_non_images_is_silent() {
        let mut collector = UploadCollector::new();
        assert!(collector.add_dropped(vec![text("notes.txt")]).is_none());
        assert!(collector.is_empty());
    }

    #[test]
    fn test_picker_does_not_filter() {
        let mut collector = UploadCollector::new();
        let notice = collector.add_picked(vec![text("notes.txt")]);
        assert_eq!(collector.len(), 1);
        assert_eq!(notice.title, "Files selected");
    }

    #[test]
    fn test_append_without_dedup() {
        let mut collector = UploadCollector::new();
        collector.add_dropped(vec![png("a.png")]);
        collector.add_picked(vec![png("a.png")]);
        assert_eq!(collector.names(), ["a.png", "a.png"]);
    }

    #[test]
    fn test_submit_empty_is_error() {
        let collector = UploadCollector::new();
        let err = collector.submit().unwrap_err();
        assert!(matches!(err, Error::NoFilesSelected));
        assert_eq!(Notice::from(&err).level, NoticeLevel::Warning);
    }

    #[test]
    fn test_submit_hands_off_names_only() {
        let mut collector = UploadCollector::new();
        collector.add_picked(vec![png("z.png"), png("a.png")]);
        let handoff = collector.submit().unwrap();
        assert_eq!(handoff.file_names(), ["z.png", "a.png"]);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_start_inspection_empty_does_not_write() {
        let collector = UploadCollector::new();
        let mut slot = HandoffSlot::new();

        let action = collector.start_inspection(&mut slot);
        assert_eq!(action, StartAction::Notify(Notice::no_files_selected()));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_start_inspection_writes_handoff() {
        let mut collector = UploadCollector::new();
        collector.add_dropped(vec![png("board.png")]);
        let mut slot = HandoffSlot::new();

        assert_eq!(collector.start_inspection(&mut slot), StartAction::Navigate);
        assert_eq!(slot.take().unwrap().file_names(), ["board.png"]);
        assert!(slot.take().is_none());
    }
}
