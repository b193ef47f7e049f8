use arboard::Clipboard;

use crate::domain::{SiteError, SiteResult};

pub struct ClipboardService;

impl ClipboardService {
    pub fn copy_text(text: &str) -> SiteResult<()> {
        let mut clipboard =
            Clipboard::new().map_err(|err| SiteError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| SiteError::Clipboard(err.to_string()))
    }
}
