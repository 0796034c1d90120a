// src/lib.rs - Library interface for internal module access

pub mod class_lookup;
pub mod constants;
pub mod coord_transform;
pub mod data_input;
pub mod error;
pub mod plot_framework;
pub mod plot_functions;

pub use error::EvalError;

/// Expose crate version for the binary's usage output.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
