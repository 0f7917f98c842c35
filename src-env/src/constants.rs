//! Shared constants for quadcheck

/// Environment variable pointing at the quadcheck project root
pub const ENV_PROJECT_DIR: &str = "QUADCHECK_DIR";

/// Directory (relative to the project root) receiving generated artefacts
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` receiving HTML plots
pub const PLOTS_SUBDIR: &str = "plot_functions";

/// Default `env_logger` filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
