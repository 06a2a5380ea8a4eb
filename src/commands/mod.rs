//! Command implementations for widepath

pub mod dispatch;
pub mod info;
pub mod path;
pub mod tree;
pub mod verify;

use serde::Serialize;
use widepath_core::error::Result;

/// Pretty-print a value as JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
