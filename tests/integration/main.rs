//! Integration tests for dex-view

mod config_test;
mod pipeline_test;
mod snapshot_test;
