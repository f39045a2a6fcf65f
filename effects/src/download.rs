//! Outcome of probing a downloadable asset before following the link.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::toast::ToastKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The asset answered 2xx; let the download proceed.
    Available,
    /// The asset answered with a non-2xx status.
    Missing,
    /// The request never completed.
    Failed,
}

impl ProbeOutcome {
    /// `None` stands for a network failure.
    #[must_use]
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(code) if (200..300).contains(&code) => Self::Available,
            Some(_) => Self::Missing,
            None => Self::Failed,
        }
    }

    #[must_use]
    pub fn allows_download(self) -> bool {
        self == Self::Available
    }

    /// Toast shown to the visitor for this outcome.
    #[must_use]
    pub fn notice(self) -> (&'static str, ToastKind) {
        match self {
            Self::Available => ("CV download started...", ToastKind::Success),
            Self::Missing => ("CV temporarily unavailable. Please try again later.", ToastKind::Info),
            Self::Failed => ("Download error. Please try again.", ToastKind::Info),
        }
    }
}
