//! Session Module
//!
//! State the refresh loop maintains and the lookup path reads: the
//! anti-forgery token and the ID/title to slug index.

mod index;
mod state;
mod token;

pub use index::{normalize_title, IdentifierIndex};
pub use state::SessionState;
pub use token::{AntiForgeryToken, CSRF_COOKIE};
