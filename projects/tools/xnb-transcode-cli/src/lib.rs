//! Batch conversion of XNB textures to PNG.
//!
//! The `xnb-transcode` binary is a thin [`argh`] front end over this library:
//!
//! - [`scan`] walks the input tree and collects matching files
//! - [`batch`] runs every file through the read, normalize, encode pipeline and
//!   aggregates the failures
//! - [`exit_codes`] maps a batch outcome to the process exit status

pub mod batch;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod scan;
pub mod util;
