//! Styling for account roles.

use owo_colors::{OwoColorize, Style};

/// How a posting's account relates to the saved preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    /// The highlighted account: postings still to be worked through
    Highlighted,
    /// The fixed account: the known side of a transaction
    Fixed,
    Other,
}

impl AccountRole {
    pub fn of(account: &str, highlighted: Option<&str>, fixed: Option<&str>) -> Self {
        if Some(account) == highlighted {
            Self::Highlighted
        } else if Some(account) == fixed {
            Self::Fixed
        } else {
            Self::Other
        }
    }

    /// Marker column for plain output.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Highlighted => "*",
            Self::Fixed => "=",
            Self::Other => " ",
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Highlighted => Style::new().yellow().bold(),
            Self::Fixed => Style::new().dimmed(),
            Self::Other => Style::new(),
        }
    }
}

/// Common styles.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Style an account according to its role.
pub fn account(text: &str, role: AccountRole, color: bool) -> String {
    styled(text, role.style(), color)
}
