//! Candidate file loading and result output.

use std::io::{self, BufReader, Write};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use larder_core::{Candidate, RankingResult};

use crate::{ARG_CANDIDATES, CliError};

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON array of candidates from disk.
///
/// Derived scores are never read from the file, so every loaded candidate
/// starts unscored.
pub(crate) fn load_candidates(path: &Utf8Path) -> Result<Vec<Candidate>, CliError> {
    require_existing(path, ARG_CANDIDATES)?;
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenCandidates {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseCandidates {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `result` as pretty-printed JSON followed by a newline.
pub(crate) fn write_result(writer: &mut dyn Write, result: &RankingResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerialiseResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
