//! Test helpers for writing candidate files into a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use larder_core::Candidate;
use larder_core::test_support::mixed_shelf;
use tempfile::TempDir;

/// Evaluation instant matching `larder_core::test_support::fixed_now`.
pub(super) const FIXED_NOW: &str = "2024-06-01T12:00:00Z";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Scratch directory holding a candidate file.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `candidates` as a JSON array and return the file path.
    pub(super) fn write_candidates(&self, candidates: &[Candidate]) -> Utf8PathBuf {
        let path = self.path("candidates.json");
        let payload = serde_json::to_vec_pretty(candidates).expect("serialise candidates");
        write_utf8(&path, &payload);
        path
    }

    /// Write the shared mixed shelf and return the file path.
    pub(super) fn write_mixed_shelf(&self) -> Utf8PathBuf {
        self.write_candidates(&mixed_shelf())
    }
}

/// Decode printed output and return the candidate identifiers in order.
pub(super) fn printed_ids(output: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(output).expect("output should be JSON");
    value["candidates"]
        .as_array()
        .expect("candidates array")
        .iter()
        .map(|candidate| candidate["id"].as_str().expect("candidate id").to_owned())
        .collect()
}
