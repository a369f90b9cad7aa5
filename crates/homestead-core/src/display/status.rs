//! Banner messages shown above a plan.

use std::fmt;

/// Severity of a banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Warning,
}

impl BannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerKind::Info => "Info:",
            BannerKind::Success => "Success:",
            BannerKind::Warning => "Warning:",
        }
    }
}

/// A one-line message with a severity prefix.
///
/// Warnings are used for rejected input; nothing else is shown alongside
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.kind.as_str(), self.message)
    }
}
