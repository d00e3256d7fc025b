//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth guard, store fetches,
//! form state) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod project;
pub mod projects;
