//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `projects`, `tasks`) so individual
//! components can depend on small focused models. `dashboard` derives its
//! view model from the other stores and owns no signal of its own. `fetch`
//! holds the request generations both list stores use.

pub mod auth;
pub mod dashboard;
pub mod fetch;
pub mod projects;
pub mod tasks;
