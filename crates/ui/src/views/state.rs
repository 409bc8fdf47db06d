use reels_core::feed::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    GenerationFailed,
    NoContent,
}

impl ViewError {
    #[must_use]
    pub fn from_notice(notice: Notice) -> Self {
        match notice {
            Notice::GenerationFailed => Self::GenerationFailed,
            Notice::NoContent => Self::NoContent,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::GenerationFailed => Notice::GenerationFailed.message(),
            Self::NoContent => Notice::NoContent.message(),
        }
    }
}
