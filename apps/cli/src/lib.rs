pub mod config;
pub mod models;
mod main_lib;

pub use main_lib::{
    build_report, build_state, export_target, init_tracing, run_export, AppState,
};
