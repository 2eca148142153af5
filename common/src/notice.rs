//! ユーザー向け通知（トースト）

use crate::error::Error;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Info,
    Warning,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Warning,
        }
    }

    pub(crate) fn files_dropped(count: usize) -> Self {
        Self::info("Files uploaded successfully", ready_message(count))
    }

    pub(crate) fn files_selected(count: usize) -> Self {
        Self::info("Files selected", ready_message(count))
    }

    pub fn no_files_selected() -> Self {
        Self::warning(
            "No files selected",
            "Please upload PCB images before starting inspection",
        )
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        match error {
            Error::NoFilesSelected => Notice::no_files_selected(),
            other => Notice::warning("Something went wrong", other.to_string()),
        }
    }
}

fn ready_message(count: usize) -> String {
    format!("{} PCB image(s) ready for inspection", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_notice_text() {
        let notice = Notice::files_dropped(2);
        assert_eq!(notice.title, "Files uploaded successfully");
        assert_eq!(notice.description, "2 PCB image(s) ready for inspection");
        assert_eq!(notice.level, NoticeLevel::Info);
    }

    #[test]
    fn test_no_files_notice_is_warning() {
        let notice = Notice::from(&Error::NoFilesSelected);
        assert_eq!(notice.title, "No files selected");
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_other_error_notice() {
        let notice = Notice::from(&Error::Config("bad".into()));
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.description.contains("bad"));
    }
}
