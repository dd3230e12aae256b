//! Image-source boundary: turning encoded bytes into [`SourceImage`] bitmaps.
//!
//! Any raster the `image` crate can decode is accepted; no further validation happens here.

pub(crate) mod decode;
pub(crate) mod source;

pub use decode::{decode_data_uri, decode_image, load_image};
pub use source::SourceImage;
