// Public handlers: no authentication required.
// Registration/login for token acquisition, plus the read-only feeds
// (posts, users, skate spots) that the app shows before sign-in.

pub mod auth;
pub mod posts;
pub mod spots;
pub mod users;
