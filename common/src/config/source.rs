//! Resolution of named base configuration sources.
//!
//! A provider only knows the *name* of its base source (e.g. `service`).
//! Turning that name into something the `config` crate can read is the job
//! of a [`SourceResolver`]. The default [`FileResolver`] walks a list of
//! directories looking for `<name>` or `<name>.<ext>`.

use config::{File, Source};
use std::path::{Path, PathBuf};

use crate::utils::env::EnvUtils;

/// Environment variable that prepends an extra directory to the search path.
pub const CONFIG_DIR_ENV: &str = "KEYSTONE_CONFIG_DIR";

/// File extensions the `config` crate can parse, in lookup order.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["toml", "json", "yaml", "yml", "ini", "ron", "json5"];

/// Boxed source as accepted by `config::ConfigBuilder`.
pub type BoxedSource = Box<dyn Source + Send + Sync>;

/// Maps a logical source name onto a loadable configuration source.
///
/// Returning `None` means the source does not exist; the provider then
/// builds from the environment layer alone.
pub trait SourceResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<BoxedSource>;
}

/// Looks up configuration files on a directory search path.
#[derive(Debug, Clone)]
pub struct FileResolver {
    search_dirs: Vec<PathBuf>,
}

impl FileResolver {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Appends a directory searched after the existing ones.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Finds the file backing `name`, if any.
    ///
    /// Absolute names are used as-is. Otherwise each search directory is
    /// tried in order, first for the exact name and then for the name with
    /// every supported extension appended.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_absolute() {
            return direct.is_file().then(|| direct.to_path_buf());
        }

        for dir in &self.search_dirs {
            let exact = dir.join(name);
            if exact.is_file() {
                return Some(exact);
            }
            for ext in SUPPORTED_EXTENSIONS {
                let candidate = dir.join(format!("{name}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl Default for FileResolver {
    /// `$KEYSTONE_CONFIG_DIR`, then the working directory, then the per-user
    /// config directory (`~/.config/keystone` on Linux).
    fn default() -> Self {
        let mut search_dirs = Vec::new();
        if let Some(dir) = EnvUtils::get_optional_var(CONFIG_DIR_ENV) {
            search_dirs.push(PathBuf::from(dir));
        }
        search_dirs.push(PathBuf::from("."));
        if let Some(user_dir) = dirs::config_dir() {
            search_dirs.push(user_dir.join("keystone"));
        }
        Self::new(search_dirs)
    }
}

impl SourceResolver for FileResolver {
    fn resolve(&self, name: &str) -> Option<BoxedSource> {
        let path = self.locate(name)?;
        log::debug!("Resolved configuration source '{name}' to {}", path.display());
        Some(Box::new(File::from(path)))
    }
}
