//! Output formatting for classification results.
//!
//! - [`terminal`] - Terminal output with colors

pub mod terminal;

pub use terminal::{format_field, print_classification, print_nn_ips};
