//! Image encoding for saved captures and shared contact sheets.

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
