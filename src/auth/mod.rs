//! Session authentication
//!
//! Admin actions require a verified session naming an administrator.
//! Verification sits behind the [`SessionVerifier`] trait so the action
//! layer never parses tokens itself and tests can swap in a static table.

mod sessions;

pub use sessions::{
    AdminIdentity, JwtSessions, SessionClaims, SessionVerifier, StaticSessions, SESSION_TTL_SECS,
};
