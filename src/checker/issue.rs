use std::fmt;

use serde::Serialize;

use crate::analyzer::Location;

/// Which validator produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    SyntaxError,
    NamingWarning,
    /// The naming rules could not be applied because the source did not
    /// parse. Marks naming as failed without counting as a naming warning.
    NamingFailure,
    DocumentationWarning,
}

impl IssueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax_error",
            Self::NamingWarning => "naming_warning",
            Self::NamingFailure => "naming_failure",
            Self::DocumentationWarning => "documentation_warning",
        }
    }

    /// Whether this issue was produced by the naming validator.
    #[must_use]
    pub const fn is_naming(self) -> bool {
        matches!(self, Self::NamingWarning | Self::NamingFailure)
    }
}

/// A single finding, tagged with its kind so the summary never has to look at
/// message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub message: String,
    pub location: Option<Location>,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
        }
    }

    #[must_use]
    pub const fn with_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
