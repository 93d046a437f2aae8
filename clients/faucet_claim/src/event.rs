use crate::constants::EXPLORER_LINK_TEXT;

/// Visual class of a status line, rendered as the CSS class of the message element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Clickable link appended after a status text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLink {
    /// Target page
    pub href: String,
    /// Anchor text
    pub text: String,
}

/// Status emitted to the UI after each step of the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Text shown to the user
    pub text: String,
    /// Info, success or error styling
    pub kind: StatusKind,
    /// Explorer link, only set on a successful claim
    pub link: Option<StatusLink>,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Info, link: None }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success, link: None }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error, link: None }
    }

    pub fn with_explorer_link(mut self, href: String) -> Self {
        self.link = Some(StatusLink { href, text: EXPLORER_LINK_TEXT.to_string() });
        self
    }
}
