use crate::collection::{Clippings, ParseMode};
use crate::error::{ClipError, ClipResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name the device gives its clippings export.
pub const DEFAULT_FILE_NAME: &str = "My Clippings.txt";

/// Environment variable naming the clippings file to load.
pub const FILE_ENV_VAR: &str = "CLIPPINGS_FILE";

/// Where to load clippings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub clippings_path: PathBuf,
}

impl Settings {
    /// Resolves the clippings file.
    ///
    /// An explicit path wins (the command line fills it from
    /// [`FILE_ENV_VAR`] too). Otherwise `My Clippings.txt` is looked up in
    /// the working directory and then in the user's documents directory.
    /// When neither exists the working-directory candidate is returned so the
    /// caller can report it as missing.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let clippings_path = explicit.unwrap_or_else(|| Self::default_path(Path::new(".")));
        debug!(path = %clippings_path.display(), "resolved clippings file");
        Self { clippings_path }
    }

    /// Returns `Err(NotFound)` if the resolved file does not exist.
    pub fn ensure_exists(&self) -> ClipResult<&Path> {
        if self.clippings_path.is_file() {
            Ok(&self.clippings_path)
        } else {
            Err(ClipError::NotFound(self.clippings_path.clone()))
        }
    }

    /// Loads the clippings for startup.
    ///
    /// A malformed export is not fatal: the collection comes back empty with
    /// a notice explaining why. Skipped blocks are reported as notices too.
    ///
    /// # Errors
    /// - [`ClipError::NotFound`] if the file does not exist (exit status 1)
    /// - [`ClipError::Io`] if it cannot be read
    pub fn load(&self, mode: ParseMode) -> ClipResult<Loaded> {
        let path = self.ensure_exists()?;

        match Clippings::open(path, mode) {
            Ok(report) => Ok(Loaded {
                clippings: report.clippings,
                notices: report
                    .skipped
                    .iter()
                    .map(|(block, error)| format!("skipped clipping #{block}: {error}"))
                    .collect(),
            }),
            Err(e) if e.is_structural() => {
                warn!(error = %e, "clippings file is malformed, continuing with no clippings");
                Ok(Loaded {
                    clippings: Clippings::empty(),
                    notices: vec![format!(
                        "The clippings file does not have the expected format: {e}"
                    )],
                })
            }
            Err(e) => Err(e),
        }
    }

    fn default_path(working_dir: &Path) -> PathBuf {
        let local = working_dir.join(DEFAULT_FILE_NAME);
        if local.exists() {
            return local;
        }

        dirs::document_dir()
            .map(|docs| docs.join(DEFAULT_FILE_NAME))
            .filter(|candidate| candidate.exists())
            .unwrap_or(local)
    }
}

/// What startup loaded, and anything the user should be told about it.
#[derive(Debug, Default)]
pub struct Loaded {
    pub clippings: Clippings,
    pub notices: Vec<String>,
}
