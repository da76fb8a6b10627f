//! Writing the rendered script to disk.

use super::Script;
use crate::error::{Result, ScriptError};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

impl Script {
    /// Write the rendered script to `<base_path>.sh`, overwriting any
    /// existing file at that path.
    ///
    /// Fails with [`ScriptError::NotConstructed`] (no I/O attempted) if
    /// [`Script::construct`] has not run, and with [`ScriptError::Persist`]
    /// on an I/O failure. Either way the in-memory document is untouched,
    /// so a failed write may simply be retried.
    pub fn persist<P: AsRef<Path>>(&self, base_path: P) -> Result<()> {
        if !self.constructed {
            return Err(ScriptError::NotConstructed);
        }

        let mut with_extension = base_path.as_ref().as_os_str().to_os_string();
        with_extension.push(".sh");
        let path = PathBuf::from(with_extension);

        let mut file = File::create(&path).map_err(|e| ScriptError::Persist {
            path: path.clone(),
            source: e,
        })?;
        file.write_all(self.rendered.as_bytes())
            .map_err(|e| ScriptError::Persist {
                path: path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| ScriptError::Persist {
            path,
            source: e,
        })
    }
}

/// File name under which a script of the given version is conventionally
/// persisted.
///
/// ```
/// assert_eq!(provscript::filename_for_version(3), "run_v3.sh");
/// ```
pub fn filename_for_version(version: u32) -> String {
    format!("run_v{version}.sh")
}
