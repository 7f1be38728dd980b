// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loading service.
//!
//! This module wires the pieces together: path validation, file I/O, the
//! grouped-properties parser, and load-time memoization. [`load_config`] is
//! the uncached entry point; [`ConfigLoader`] wraps it with a cache injected
//! by the caller.

use crate::adapters::{MemoryCache, PropertiesParser};
use crate::domain::{Config, ConfigError, Result};
use crate::ports::{ConfigCache, ConfigParser};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Separator appended after each override tag in a cache signature.
const SIGNATURE_SEPARATOR: &str = "-";

/// Loads and parses a configuration file, bypassing any cache.
///
/// Validation is fail-fast and ordered: a blank path, then a path that does
/// not exist, then an I/O failure while reading, then the parse itself. The
/// file is read and released in one scoped operation on every exit path, and
/// no partial store is ever returned.
///
/// # Arguments
///
/// * `path` - Filesystem path of the configuration file
/// * `overrides` - Environment tags selecting among tagged key variants; an
///   empty slice disables override resolution
///
/// # Examples
///
/// ```no_run
/// use groupcfg::service::load_config;
///
/// # fn main() -> groupcfg::domain::Result<()> {
/// let overrides = vec!["ubuntu".to_string(), "production".to_string()];
/// let config = load_config("/etc/myapp/app.properties", &overrides)?;
/// # Ok(())
/// # }
/// ```
pub fn load_config(path: &str, overrides: &[String]) -> Result<Config> {
    if path.trim().is_empty() {
        tracing::error!("invalid empty or blank config file path");
        return Err(ConfigError::InvalidConfigFilePath);
    }

    let file = Path::new(path);
    if !file.exists() {
        tracing::error!(path, "config file not found");
        return Err(ConfigError::ConfigFileNotFound {
            path: path.to_string(),
        });
    }

    let content = fs::read_to_string(file).map_err(|source| {
        tracing::error!(path, error = %source, "failed to read config file");
        ConfigError::FailedToReadConfigFile {
            path: path.to_string(),
            source,
        }
    })?;

    PropertiesParser::new().parse(&content, overrides)
}

/// Builds the cache signature for a `(path, overrides)` pair.
///
/// The signature is the path with every override tag appended, each suffixed
/// by `-`. The concatenation is deliberately unescaped for compatibility with
/// the historical key format, which makes it ambiguous: `["a-b"]` and
/// `["a", "b"]` serialize identically and share a cache entry. Callers who
/// need collision-free keying must keep such override lists on separate cache
/// instances.
///
/// # Examples
///
/// ```
/// use groupcfg::service::cache_signature;
///
/// let overrides = vec!["ubuntu".to_string(), "test".to_string()];
/// assert_eq!(cache_signature("/etc/app.properties", &overrides), "/etc/app.propertiesubuntu-test-");
/// assert_eq!(cache_signature("/etc/app.properties", &[]), "/etc/app.properties");
/// ```
pub fn cache_signature(path: &str, overrides: &[String]) -> String {
    let mut signature = String::from(path);
    for tag in overrides {
        signature.push_str(tag);
        signature.push_str(SIGNATURE_SEPARATOR);
    }
    signature
}

/// A memoizing configuration loader.
///
/// Wraps [`load_config`] with a cache keyed by [`cache_signature`]. The cache
/// is a collaborator injected at construction — not a process-global — so
/// callers choose whether loaders share one. A hit returns the cached store
/// without touching storage; a miss runs the full parse and caches the result
/// under its signature. Failed loads are never cached, and a blank path is
/// never cached (its parse attempt fails with
/// [`ConfigError::InvalidConfigFilePath`]).
///
/// # Examples
///
/// ```no_run
/// use groupcfg::service::ConfigLoader;
///
/// # fn main() -> groupcfg::domain::Result<()> {
/// let mut loader = ConfigLoader::new();
/// let overrides = vec!["itscript".to_string()];
///
/// let config = loader.load("/etc/myapp/app.properties", &overrides)?;
/// // second load with the same path and overrides is served from cache
/// let again = loader.load("/etc/myapp/app.properties", &overrides)?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigLoader {
    cache: Box<dyn ConfigCache>,
}

impl ConfigLoader {
    /// Creates a loader backed by a fresh [`MemoryCache`].
    pub fn new() -> Self {
        Self::with_cache(Box::new(MemoryCache::new()))
    }

    /// Creates a loader backed by the given cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use groupcfg::adapters::MemoryCache;
    /// use groupcfg::service::ConfigLoader;
    ///
    /// let loader = ConfigLoader::with_cache(Box::new(MemoryCache::new()));
    /// ```
    pub fn with_cache(cache: Box<dyn ConfigCache>) -> Self {
        Self { cache }
    }

    /// Loads a configuration, serving repeated signatures from the cache.
    ///
    /// Same error surface as [`load_config`]. The returned `Arc` is shared
    /// with the cache entry, so repeated loads of one signature hand back the
    /// same store.
    pub fn load(&mut self, path: &str, overrides: &[String]) -> Result<Arc<Config>> {
        tracing::info!(path, ?overrides, "loading configuration");

        let signature =
            (!path.trim().is_empty()).then(|| cache_signature(path, overrides));

        if let Some(signature) = signature.as_deref() {
            if let Some(config) = self.cache.lookup(signature) {
                tracing::debug!(signature, "configuration found in cache");
                return Ok(config);
            }
        }

        tracing::debug!(path, "loading configuration from the file system");
        let config = Arc::new(load_config(path, overrides)?);

        if let Some(signature) = signature.as_deref() {
            self.cache.insert(signature, Arc::clone(&config));
        }

        tracing::info!(path, "configuration loaded");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a configuration file name inside the OS-appropriate directory.
///
/// Uses the `directories` crate to locate the per-user configuration
/// directory for the application and joins `filename` onto it. Fails with
/// [`ConfigError::ConfigFileNotFound`] when the directory cannot be
/// determined or the file does not exist there.
///
/// # Arguments
///
/// * `qualifier` - The organization qualifier (e.g., "com.example")
/// * `app_name` - The application name
/// * `filename` - The configuration file name (e.g., "app.properties")
///
/// # Examples
///
/// ```no_run
/// use groupcfg::service::{default_config_path, load_config};
///
/// # fn main() -> groupcfg::domain::Result<()> {
/// let path = default_config_path("com.example", "myapp", "app.properties")?;
/// let config = load_config(&path.to_string_lossy(), &[])?;
/// # Ok(())
/// # }
/// ```
pub fn default_config_path(qualifier: &str, app_name: &str, filename: &str) -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
        tracing::error!(app_name, "failed to determine project directories");
        ConfigError::ConfigFileNotFound {
            path: filename.to_string(),
        }
    })?;

    let path = project_dirs.config_dir().join(filename);
    if !path.exists() {
        return Err(ConfigError::ConfigFileNotFound {
            path: path.to_string_lossy().into_owned(),
        });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, PropertyValue};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_config_blank_path() {
        assert_eq!(
            load_config("", &[]).unwrap_err().kind(),
            ErrorKind::InvalidConfigFilePath
        );
        assert_eq!(
            load_config("   ", &[]).unwrap_err().kind(),
            ErrorKind::InvalidConfigFilePath
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/no/such/file.properties", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigFileNotFound);
        assert!(err.to_string().contains("/no/such/file.properties"));
    }

    #[test]
    fn test_load_config_reads_and_parses() {
        let file = write_config("[ftp]\npath=/tmp/\n");
        let config = load_config(&file.path().to_string_lossy(), &[]).unwrap();
        assert_eq!(
            config.get("ftp.path"),
            Some(&PropertyValue::String("/tmp/".into()))
        );
    }

    #[test]
    fn test_load_config_propagates_parse_errors() {
        let file = write_config("orphan=1\n");
        let err = load_config(&file.path().to_string_lossy(), &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyGroupMissing);
    }

    #[test]
    fn test_cache_signature_appends_tags() {
        let overrides = vec!["itscript".to_string(), "ubuntu".to_string()];
        assert_eq!(
            cache_signature("/etc/a.properties", &overrides),
            "/etc/a.propertiesitscript-ubuntu-"
        );
    }

    #[test]
    fn test_cache_signature_without_overrides_is_the_path() {
        assert_eq!(cache_signature("/etc/a.properties", &[]), "/etc/a.properties");
    }

    #[test]
    fn test_cache_signature_collision_preserved() {
        // the historical unescaped concatenation: these two lists collide
        let joined = vec!["a-b".to_string()];
        let split = vec!["a".to_string(), "b".to_string()];
        assert_eq!(cache_signature("p", &joined), cache_signature("p", &split));
    }

    #[test]
    fn test_loader_returns_cached_store_on_second_load() {
        let file = write_config("[ftp]\npath=/tmp/\n");
        let path = file.path().to_string_lossy().into_owned();

        let mut loader = ConfigLoader::new();
        let first = loader.load(&path, &[]).unwrap();
        let second = loader.load(&path, &[]).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_loader_distinct_overrides_parse_separately() {
        let file = write_config("[ftp]\npath=/tmp/\npath<test>=/srv/\n");
        let path = file.path().to_string_lossy().into_owned();

        let mut loader = ConfigLoader::new();
        let plain = loader.load(&path, &[]).unwrap();
        let tagged = loader.load(&path, &["test".to_string()]).unwrap();

        assert_eq!(plain.get("ftp.path"), Some(&PropertyValue::String("/tmp/".into())));
        assert_eq!(tagged.get("ftp.path"), Some(&PropertyValue::String("/srv/".into())));
    }

    #[test]
    fn test_loader_does_not_cache_failures() {
        let mut loader = ConfigLoader::new();
        let missing = "/no/such/file.properties";
        assert!(loader.load(missing, &[]).is_err());

        // a failed load leaves no entry behind, so a later success parses
        let file = write_config("[g]\nk=1\n");
        let path = file.path().to_string_lossy().into_owned();
        assert!(loader.load(&path, &[]).is_ok());
        assert!(loader.load(missing, &[]).is_err());
    }

    #[test]
    fn test_loader_blank_path_always_fails_uncached() {
        let mut loader = ConfigLoader::new();
        assert_eq!(
            loader.load("", &[]).unwrap_err().kind(),
            ErrorKind::InvalidConfigFilePath
        );
        assert_eq!(
            loader.load("", &[]).unwrap_err().kind(),
            ErrorKind::InvalidConfigFilePath
        );
    }

    #[test]
    fn test_loader_default_constructs() {
        let _loader = ConfigLoader::default();
    }
}
