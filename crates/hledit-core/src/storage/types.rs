//! Keys for persisted values.

use std::fmt;

/// The values hledit persists, each under a fixed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Raw ledger text
    LedgerText,

    /// Raw account options text, one account per line
    AccountOptions,

    /// Account treated as the known side of each transaction
    FixedAccount,

    /// Account whose postings are being recategorised
    HighlightedAccount,
}

impl StoreKey {
    pub const ALL: [StoreKey; 4] = [
        StoreKey::LedgerText,
        StoreKey::AccountOptions,
        StoreKey::FixedAccount,
        StoreKey::HighlightedAccount,
    ];

    /// Stable string form of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LedgerText => "hledger-input",
            Self::AccountOptions => "account-options",
            Self::FixedAccount => "fixed-account",
            Self::HighlightedAccount => "highlighted-account",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
