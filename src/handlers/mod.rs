// handlers/mod.rs - Two-tier handler architecture
//
// Public (no auth) -> Protected (bearer-token auth via jwt_auth_middleware)

pub mod protected;
pub mod public;
