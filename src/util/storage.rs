//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write glue so callers never touch
//! `web-sys` directly. Read failures surface as `None`; write failures
//! surface as an error string the caller may log, since losing persistence
//! must never take the application down.

/// Load the raw string stored under `key`, if the browser provides storage
/// and the key is present.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `raw` under `key`.
///
/// # Errors
///
/// Returns a description of the failure when storage is unavailable or the
/// write is rejected (quota, disabled storage).
pub fn save_string(key: &str, raw: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return Err("localStorage unavailable".to_owned());
        };
        storage
            .set_item(key, raw)
            .map_err(|_| "localStorage write rejected".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
        Ok(())
    }
}
