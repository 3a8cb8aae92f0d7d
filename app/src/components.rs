//! Reusable UI pieces shared by the pages.
//!
//! Each sub-module exposes a `component` function (plus helpers where a piece
//! needs arguments), following the same layout as the pages.

pub mod counter;
pub mod error_template;
pub mod footer;
pub mod header;
pub mod icons;
pub mod loader;
pub mod notice;
pub mod project_card;
pub mod skill_bar;
pub mod status;
