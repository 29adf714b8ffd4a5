//! On-disk store for the `session_token` cookie.
//!
//! Holds at most one cookie in `${SIGNUP_HOME}/cookies.json`. Expiry follows
//! browser rules: a cookie past its `expires_at` is never returned, and
//! storing a cookie with `Max-Age=0` deletes it.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths;
use crate::session::SessionCookie;

#[derive(Debug, Serialize, Deserialize)]
struct StoredCookie {
    name: String,
    value: String,
    path: String,
    expires_at: DateTime<Utc>,
}

/// File-backed cookie jar.
#[derive(Debug, Clone)]
pub struct CookieJar {
    path: PathBuf,
}

impl CookieJar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Jar at the default location under `SIGNUP_HOME`.
    pub fn default_location() -> Self {
        Self::new(paths::cookies_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session cookie if present and unexpired.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<SessionCookie>> {
        self.load_at(Utc::now())
    }

    /// Like [`Self::load`], but an unreadable jar counts as no cookie.
    ///
    /// For callers that can carry on anonymously; the failure is logged.
    pub fn load_or_none(&self) -> Option<SessionCookie> {
        match self.load() {
            Ok(cookie) => cookie,
            Err(err) => {
                tracing::warn!(error = format!("{err:#}"), "ignoring unreadable cookie jar");
                None
            }
        }
    }

    /// Like [`Self::load`], evaluated at `now`.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_at(&self, now: DateTime<Utc>) -> Result<Option<SessionCookie>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cookies from {}", self.path.display()))?;
        let stored: StoredCookie = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cookies from {}", self.path.display()))?;

        if stored.name != SessionCookie::NAME || stored.expires_at <= now {
            tracing::debug!(expires_at = %stored.expires_at, "stored session cookie expired");
            return Ok(None);
        }

        let remaining = (stored.expires_at - now).num_seconds().max(0) as u64;
        Ok(Some(SessionCookie {
            value: stored.value,
            path: stored.path,
            max_age: remaining,
        }))
    }

    /// Stores `cookie`, or removes the stored one when `Max-Age` is zero.
    ///
    /// # Errors
    /// Returns an error if the jar file cannot be written or removed.
    pub fn store(&self, cookie: &SessionCookie) -> Result<()> {
        self.store_at(cookie, Utc::now())
    }

    /// Like [`Self::store`], with expiry computed from `now`.
    ///
    /// # Errors
    /// Returns an error if the jar file cannot be written or removed.
    pub fn store_at(&self, cookie: &SessionCookie, now: DateTime<Utc>) -> Result<()> {
        if cookie.is_removal() {
            return self.clear();
        }

        let stored = StoredCookie {
            name: SessionCookie::NAME.to_string(),
            value: cookie.value.clone(),
            path: cookie.path.clone(),
            expires_at: now + Duration::seconds(cookie.max_age as i64),
        };
        let contents =
            serde_json::to_string_pretty(&stored).context("Failed to serialize session cookie")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        // Token is a credential: 0600, written to a temp file then renamed.
        let tmp_path = self.path.with_extension("json.tmp");
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&tmp_path)
            .with_context(|| format!("Failed to open {} for writing", tmp_path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", tmp_path.display()))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })
    }

    /// Removes the stored cookie. Safe to call when nothing is stored.
    ///
    /// # Errors
    /// Returns an error if the jar file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("cookies.json"));
        assert_eq!(jar.load().unwrap(), None);
    }

    #[test]
    fn test_store_then_load_within_max_age() {
        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("nested").join("cookies.json"));
        let now = Utc::now();

        jar.store_at(&SessionCookie::new("tok-1"), now).unwrap();

        let loaded = jar.load_at(now + Duration::hours(1)).unwrap().unwrap();
        assert_eq!(loaded.value, "tok-1");
        assert_eq!(loaded.path, "/");
        assert_eq!(loaded.max_age, SessionCookie::MAX_AGE_SECS - 3600);
    }

    #[test]
    fn test_cookie_expires_after_24_hours() {
        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("cookies.json"));
        let now = Utc::now();

        jar.store_at(&SessionCookie::new("tok-1"), now).unwrap();

        assert!(jar.load_at(now + Duration::hours(24)).unwrap().is_none());
        // The file is kept; only the value is treated as gone.
        assert!(jar.path().exists());
    }

    #[test]
    fn test_max_age_zero_removes_cookie() {
        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("cookies.json"));

        jar.store(&SessionCookie::new("tok-1")).unwrap();
        jar.store(&SessionCookie::expired()).unwrap();

        assert!(!jar.path().exists());
        assert_eq!(jar.load().unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("cookies.json"));
        jar.clear().unwrap();
        jar.clear().unwrap();
    }

    #[test]
    fn test_corrupt_jar_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, "{not json").unwrap();
        let err = CookieJar::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse cookies"));
    }

    #[test]
    fn test_corrupt_jar_loads_as_no_cookie_when_lenient() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(CookieJar::new(&path).load_or_none(), None);
    }

    #[test]
    fn test_store_replaces_previous_cookie_without_leftovers() {
        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("cookies.json"));

        jar.store(&SessionCookie::new("tok-1")).unwrap();
        jar.store(&SessionCookie::new("tok-2")).unwrap();

        assert_eq!(jar.load().unwrap().unwrap().value, "tok-2");
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("cookies.json")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_jar_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let jar = CookieJar::new(dir.path().join("cookies.json"));
        jar.store(&SessionCookie::new("tok-1")).unwrap();
        let mode = fs::metadata(jar.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
