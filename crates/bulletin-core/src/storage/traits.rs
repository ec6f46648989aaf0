//! Key-value store trait definition.
//!
//! The `KeyValueStore` trait is the seam between the post store and the
//! medium it persists to. Values are opaque strings; the post store decides
//! what goes in them.

use crate::error::Result;

/// String key-value persistence.
///
/// Implementations must ensure:
/// - `set` replaces the whole value for a key
/// - A value written by `set` is returned by the next `get`
/// - Writes are atomic where the medium allows it
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::Storage` if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `BulletinError::Storage` if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
