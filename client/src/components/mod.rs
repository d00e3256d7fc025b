//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards and chrome from plain props; only `nav_bar`
//! reads shared state from Leptos context.

pub mod nav_bar;
pub mod project_card;
pub mod project_list;
pub mod stat_card;
