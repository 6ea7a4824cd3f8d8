pub mod check;
pub mod config;
mod context;
pub mod init;

pub use check::{CheckSettings, run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
