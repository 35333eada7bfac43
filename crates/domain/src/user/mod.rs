//! User directory subdomain.

mod aggregate;
mod attributes;
mod identifier;

pub use aggregate::{User, UserDraft, UserPatch};
pub use attributes::{Birthday, Email, Login};
pub use identifier::UserId;
