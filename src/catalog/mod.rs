/// Image catalog module
///
/// This module handles:
/// - Scanning the image directory and fixing the presentation order (loader.rs)
/// - Recovering generator parameters from texture filenames (metadata.rs)
/// - Decoding images at display size (preview.rs)

pub mod loader;
pub mod metadata;
pub mod preview;

pub use loader::Catalog;
pub use metadata::ParsedAttributes;
