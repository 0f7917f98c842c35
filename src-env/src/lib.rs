//! Environment helpers for quadcheck
//!
//! - `env_utils`: locate the project root through `QUADCHECK_DIR` and the
//!   directories generated artefacts are written to
//! - `logging`: one-shot `env_logger` initialisation for binaries
//! - `constants`: names shared across the workspace

pub mod constants;
pub mod env_utils;
pub mod logging;

pub use constants::*;
pub use env_utils::*;
pub use logging::init_logging;
