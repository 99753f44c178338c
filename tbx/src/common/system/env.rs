//! # Scoped Environment Variables (`common::system::env`)
//!
//! File: tbx/src/common/system/env.rs
//!
//! ## Overview
//!
//! `EnvGuard` sets and/or unsets environment variables for the lifetime of
//! the guard and restores the previous state when it is dropped, whether the
//! scope ends normally, through `?`, or by unwinding. `envset` is the
//! closure form.
//!
//! The environment is process-wide: child processes spawned inside the scope
//! see the overrides, and so does every other thread.
//!
//! ```rust
//! use tbx::common::system::env::envset;
//!
//! envset([("TBX_DOC_EXAMPLE", Some("on"))], || {
//!     assert_eq!(std::env::var("TBX_DOC_EXAMPLE").as_deref(), Ok("on"));
//! }).unwrap();
//! assert!(std::env::var("TBX_DOC_EXAMPLE").is_err());
//! ```
//!
use crate::core::error::{Result, TbxError};
use anyhow::bail;
use std::env;
use std::ffi::{OsStr, OsString};
use tracing::debug;

/// Restores overridden environment variables on drop.
#[derive(Debug)]
#[must_use = "the previous environment is restored as soon as the guard is dropped"]
pub struct EnvGuard {
    saved: Vec<(OsString, Option<OsString>)>,
}

impl EnvGuard {
    /// Applies `vars`: `Some(value)` sets the variable, `None` unsets it.
    ///
    /// All previous values are recorded before anything is changed.
    ///
    /// # Errors
    ///
    /// Returns `TbxError::Usage` if a name is empty or contains `=` or NUL,
    /// or a value contains NUL. Nothing is changed in that case.
    pub fn set<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let vars: Vec<(OsString, Option<OsString>)> = vars
            .into_iter()
            .map(|(key, value)| {
                (
                    key.as_ref().to_os_string(),
                    value.map(|v| v.as_ref().to_os_string()),
                )
            })
            .collect();

        for (key, value) in &vars {
            validate(key, value.as_deref())?;
        }

        let saved = vars
            .iter()
            .map(|(key, _)| (key.clone(), env::var_os(key)))
            .collect();

        for (key, value) in &vars {
            match value {
                Some(value) => {
                    debug!("envset: {:?}={:?}", key, value);
                    env::set_var(key, value);
                }
                None => {
                    debug!("envset: unset {:?}", key);
                    env::remove_var(key);
                }
            }
        }

        Ok(EnvGuard { saved })
    }

    /// Temporarily unsets every variable in `keys`.
    pub fn unset<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<OsStr>,
    {
        Self::set(keys.into_iter().map(|key| (key, None::<OsString>)))
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Reverse order so a name listed twice ends at its original value.
        for (key, previous) in self.saved.iter().rev() {
            match previous {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
        debug!("envset: restored {} variable(s)", self.saved.len());
    }
}

fn validate(key: &OsStr, value: Option<&OsStr>) -> Result<()> {
    let key_text = key.to_string_lossy();
    if key.is_empty() || key_text.contains('=') || key_text.contains('\0') {
        bail!(TbxError::usage(format!(
            "Invalid environment variable name {:?}",
            key
        )));
    }
    if let Some(value) = value {
        if value.to_string_lossy().contains('\0') {
            bail!(TbxError::usage(format!(
                "Value for environment variable {:?} contains NUL",
                key
            )));
        }
    }
    Ok(())
}

/// Runs `f` with `vars` applied, restoring the environment afterwards.
pub fn envset<I, K, V, F, R>(vars: I, f: F) -> Result<R>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
    F: FnOnce() -> R,
{
    let _guard = EnvGuard::set(vars)?;
    Ok(f())
}
