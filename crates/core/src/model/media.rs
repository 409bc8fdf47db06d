use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,

    #[error("Media URI is not a valid URL.")]
    InvalidUrl,
}

//
// ─── MEDIA CORE TYPES ──────────────────────────────────────────────────────────
//

/// The two synthesized resources attached to every reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Narration,
}

/// A resource reference the webview can display or play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    /// Accepts `http(s)` URLs as well as `data:` URIs.
    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::InvalidUrl)?;
        Ok(MediaUri::Url(u))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }

    /// The string form used for `src` attributes.
    #[must_use]
    pub fn to_src(&self) -> String {
        match self {
            MediaUri::FilePath(p) => p.display().to_string(),
            MediaUri::Url(u) => u.as_str().to_owned(),
        }
    }
}

/// Per-reel presentation state for synthesized media.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaState {
    pub image: Option<MediaUri>,
    pub audio: Option<MediaUri>,
    progress: u8,
}

impl MediaState {
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Clamped to `0..=100`.
    pub fn set_progress(&mut self, percent: u8) {
        self.progress = percent.min(100);
    }

    pub fn set(&mut self, kind: MediaKind, uri: Option<MediaUri>) {
        match kind {
            MediaKind::Image => self.image = uri,
            MediaKind::Narration => self.audio = uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_is_accepted() {
        let uri = MediaUri::from_url("data:image/png;base64,AAAA").unwrap();
        assert_eq!(uri.to_src(), "data:image/png;base64,AAAA");
        assert!(uri.as_path().is_none());
    }

    #[test]
    fn empty_uri_is_rejected() {
        assert_eq!(
            MediaUri::from_url("  ").unwrap_err(),
            MediaValidationError::EmptyMediaUri
        );
        assert_eq!(
            MediaUri::from_file("").unwrap_err(),
            MediaValidationError::EmptyMediaUri
        );
    }

    #[test]
    fn relative_text_is_not_a_url() {
        assert_eq!(
            MediaUri::from_url("no scheme here").unwrap_err(),
            MediaValidationError::InvalidUrl
        );
    }

    #[test]
    fn progress_is_clamped() {
        let mut state = MediaState::default();
        state.set_progress(250);
        assert_eq!(state.progress(), 100);
    }
}
