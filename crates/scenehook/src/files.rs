//! File helpers exposed through the command surface
//!
//! Scripts attached to file events usually need the file the host is about to
//! open or save, and sometimes want to know whether a save actually changed
//! anything on disk.

use std::{
    fmt,
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use crate::error::SceneHookError;

const COMPARE_CHUNK: usize = 16 * 1024;

/// File name a host can report for its pending operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilenameQuery {
    /// File about to be opened
    BeforeOpen,
    /// File about to be imported
    BeforeImport,
    /// File about to be saved
    BeforeSave,
    /// File about to be exported
    BeforeExport,
    /// File about to be referenced
    BeforeReference,
    /// Last temporary file written by the host
    LastTempFile,
}

impl FilenameQuery {
    /// Every query in command-surface order
    pub const ALL: [FilenameQuery; 6] = [
        FilenameQuery::BeforeOpen,
        FilenameQuery::BeforeImport,
        FilenameQuery::BeforeSave,
        FilenameQuery::BeforeExport,
        FilenameQuery::BeforeReference,
        FilenameQuery::LastTempFile,
    ];

    /// Name used on the command surface
    pub fn name(self) -> &'static str {
        match self {
            FilenameQuery::BeforeOpen => "beforeOpenFilename",
            FilenameQuery::BeforeImport => "beforeImportFilename",
            FilenameQuery::BeforeSave => "beforeSaveFilename",
            FilenameQuery::BeforeExport => "beforeExportFilename",
            FilenameQuery::BeforeReference => "beforeReferenceFilename",
            FilenameQuery::LastTempFile => "getLastTempFile",
        }
    }
}

impl fmt::Display for FilenameQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilenameQuery {
    type Err = SceneHookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|query| query.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SceneHookError::UnknownFilenameQuery(s.to_string()))
    }
}

fn read_chunk(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn same_contents(a: &Path, b: &Path) -> std::io::Result<bool> {
    let mut file_a = File::open(a)?;
    let mut file_b = File::open(b)?;

    if file_a.metadata()?.len() != file_b.metadata()?.len() {
        return Ok(false);
    }

    let mut buf_a = vec![0u8; COMPARE_CHUNK];
    let mut buf_b = vec![0u8; COMPARE_CHUNK];
    loop {
        let read_a = read_chunk(&mut file_a, &mut buf_a)?;
        let read_b = read_chunk(&mut file_b, &mut buf_b)?;
        if read_a != read_b || buf_a[..read_a] != buf_b[..read_b] {
            return Ok(false);
        }
        if read_a == 0 {
            return Ok(true);
        }
    }
}

/// Whether two files hold identical bytes
///
/// Files that cannot be opened or read compare unequal.
pub fn compare_files(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    let (a, b) = (a.as_ref(), b.as_ref());
    match same_contents(a, b) {
        Ok(same) => same,
        Err(e) => {
            debug!(first = %a.display(), second = %b.display(), error = %e, "File comparison failed");
            false
        }
    }
}
