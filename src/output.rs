//! Output persistence with single-generation backup.
//!
//! A run writes its image to a fixed name and keeps the previous run's image
//! under a backup name. The new bytes are written to a sibling temporary file
//! first; only once that succeeded is the old backup deleted, the current
//! output renamed to the backup name, and the temporary file renamed onto the
//! output name. A failed write leaves the existing files untouched.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::bmp::encode_bmp_to_vec;
use crate::error::{Error, Result};
use crate::rendering_buffer::RenderingBuffer;

/// Output file plus the name its predecessor is rotated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRotation {
    output: PathBuf,
    backup: PathBuf,
}

impl OutputRotation {
    pub fn new(output: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            backup: backup.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// Staging file next to the output, e.g. `out.bmp.tmp`.
    pub fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .output
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("output"));
        name.push(".tmp");
        self.output.with_file_name(name)
    }

    /// Encode `buf` as BMP and write it with rotation.
    pub fn write_bmp(&self, buf: &RenderingBuffer) -> Result<()> {
        let bytes = encode_bmp_to_vec(buf).map_err(|e| Error::io(&self.output, e))?;
        self.write(&bytes)
    }

    /// Write `bytes` to the output name, rotating the previous output.
    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        let tmp = self.temp_path();
        if let Err(e) = write_synced(&tmp, bytes) {
            discard(&tmp);
            return Err(Error::io(&tmp, e));
        }
        debug!("staged {} bytes in {}", bytes.len(), tmp.display());

        if let Err(e) = self.rotate() {
            discard(&tmp);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp, &self.output) {
            discard(&tmp);
            return Err(Error::io(&self.output, e));
        }
        info!("wrote {} ({} bytes)", self.output.display(), bytes.len());
        Ok(())
    }

    /// Delete the backup and move the current output onto the backup name.
    /// Missing files are not an error.
    fn rotate(&self) -> Result<()> {
        match fs::remove_file(&self.backup) {
            Ok(()) => debug!("removed previous backup {}", self.backup.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(&self.backup, e)),
        }
        match fs::rename(&self.output, &self.backup) {
            Ok(()) => info!(
                "rotated {} to {}",
                self.output.display(),
                self.backup.display()
            ),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(&self.output, e)),
        }
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("could not remove {}: {}", path.display(), e);
        }
    }
}
