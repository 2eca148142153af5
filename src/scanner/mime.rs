//! 拡張子からMIMEタイプを推定

use image::ImageFormat;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// ファイルのMIMEタイプ（画像形式として認識できなければ octet-stream）
pub fn guess_mime(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_images() {
        assert_eq!(guess_mime(Path::new("board.png")), "image/png");
        assert_eq!(guess_mime(Path::new("board.JPG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("board.webp")), "image/webp");
    }

    #[test]
    fn test_guess_mime_non_images() {
        assert_eq!(guess_mime(Path::new("notes.txt")), FALLBACK_MIME);
        assert_eq!(guess_mime(Path::new("no_extension")), FALLBACK_MIME);
    }
}
