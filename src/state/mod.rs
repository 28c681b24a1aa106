//! Application state module

mod app_state;
mod forms;
mod markets;
mod stats;

pub use app_state::*;
pub use forms::*;
pub use markets::*;
pub use stats::*;

#[cfg(test)]
pub(crate) use forms::test_support;
