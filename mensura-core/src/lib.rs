//! Mensura Core - fundamental types
//!
//! This crate provides the types shared by every conversion path:
//! - `Number`: arbitrary precision decimal arithmetic
//! - `SourceValue`: the parsed-decimal-or-raw-text boundary value
//! - `FormatPolicy`: the cross-cutting display formatting policy

mod format;
mod number;
mod value;

pub use format::FormatPolicy;
pub use number::{Number, NumberError};
pub use value::SourceValue;
