// Protected handlers: bearer-token auth via jwt_auth_middleware.
// Each handler receives the authenticated identity as an AuthUser extension.

pub mod favorites;
pub mod posts;
pub mod profile;
pub mod spots;
