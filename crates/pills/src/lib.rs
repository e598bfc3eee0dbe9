//! narrowbar-pills: keeps a search bar's pills and its narrow terms in sync.
//!
//! The forward direction ([`set_search_bar_contents`]) turns a term
//! sequence into pills plus a residual text tail. The reverse direction
//! ([`get_current_search_pill_terms`]) reads the pills back as terms.
//! [`create_item_from_search_string`] turns one confirmed text token into
//! a pill candidate.
//!
//! All passes are synchronous and run to completion; the pill widget is
//! borrowed mutably for the duration of a pass.

pub mod container;
pub mod contents;
pub mod error;
pub mod expand;
pub mod options;
pub mod parse;
pub mod pill;
pub mod search_bar;
pub mod terms;
pub mod view;
pub mod widget;

// ── Convenience re-exports: types ────────────────────────────────────

pub use container::PillContainer;
pub use error::{PillRejection, SearchPillError};
pub use options::PillWidgetOptions;
pub use pill::{SearchPill, SearchTermPill, SearchUserPill, UserPillItem};
pub use search_bar::{SearchBar, SearchBarState};
pub use view::PillView;
pub use widget::SearchPillWidget;

// ── Convenience re-exports: entry points ─────────────────────────────

pub use contents::set_search_bar_contents;
pub use expand::{append_user_pill, build_user_pill, resolve_users};
pub use parse::{create_item_from_search_string, get_search_string_from_item};
pub use terms::get_current_search_pill_terms;
pub use view::{generate_pill_view, robust_url_decode};
pub use widget::create_pills;
