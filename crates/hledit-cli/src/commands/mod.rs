//! Command handlers, one module per subcommand group.

mod categorize;
mod edit;
mod ledger;
mod list;
mod misc;
mod options;
mod prefs;

pub use categorize::handle_categorize;
pub use edit::{handle_edit, handle_set_account};
pub use ledger::{handle_export, handle_load};
pub use list::{handle_list, handle_show};
pub use misc::handle_completions;
pub use options::handle_options;
pub use prefs::handle_prefs;
