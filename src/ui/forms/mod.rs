//! Form rendering module
//!
//! - `field_renderer`: per-kind field widgets
//! - `wizard_form`: the six-step application wizard
//! - `review`: summary shown on the final step

mod field_renderer;
mod review;
mod wizard_form;

pub use wizard_form::draw_wizard;
