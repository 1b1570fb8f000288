//! Settings file format: one `KeyName=Value` pair per line.

pub mod codec;

pub use codec::{decode_settings, encode_settings, parse_line};
