//! fitstat_tui - Viewer and report printer for derived ship stats

pub mod app;
pub mod format;
pub mod report;
pub mod ui;
