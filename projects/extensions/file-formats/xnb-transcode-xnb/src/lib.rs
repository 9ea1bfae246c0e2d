//! XNB (XNA / MonoGame compiled content) support for xnb-transcode.
//!
//! Provides [`XnbHandler`], a [`ContainerReader`] for uncompressed XNB files whose
//! primary asset is a `Texture2D`, and the lower level parsers in [`xnb`].
//!
//! ```no_run
//! use xnb_transcode_xnb::XnbHandler;
//! use xnb_transcode_file_formats_api::ContainerReader;
//!
//! let data = std::fs::read("Content/hero.xnb").unwrap();
//! let surface = XnbHandler.read(&data).unwrap();
//! println!("{}x{}", surface.width(), surface.height());
//! ```
//!
//! [`ContainerReader`]: xnb_transcode_file_formats_api::ContainerReader

pub mod xnb;

mod handler;
pub use handler::*;

#[cfg(test)]
pub(crate) mod test_prelude;
