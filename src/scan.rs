//! Directory scanning for frame files.

use std::path::{Path, PathBuf};

use crate::foundation::error::{FlipbookError, FlipbookResult};

/// Extension matched by [`scan_frames`].
pub const DEFAULT_FRAME_EXTENSION: &str = "png";

/// Prefix of AppleDouble resource-fork files (`._name.png`) left behind on non-HFS volumes.
const RESOURCE_FORK_PREFIX: &str = "._";

/// List the PNG frames in `dir` in playback order.
pub fn scan_frames(dir: impl AsRef<Path>) -> FlipbookResult<Vec<PathBuf>> {
    scan_frames_with_extension(dir, DEFAULT_FRAME_EXTENSION)
}

/// List regular files in `dir` whose extension equals `ext` (ASCII case-insensitive), skipping
/// resource-fork files.
///
/// Names are sorted by plain byte order, so `frame10.png` sorts before `frame2.png`; zero-pad
/// frame numbers to get numeric order.
pub fn scan_frames_with_extension(
    dir: impl AsRef<Path>,
    ext: &str,
) -> FlipbookResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let ext = ext.trim_start_matches('.');
    let entries = std::fs::read_dir(dir).map_err(|e| FlipbookError::input(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FlipbookError::input(dir, e))?;
        let name = entry.file_name();
        if !is_frame_name(Path::new(&name), ext) {
            continue;
        }
        // Follows symlinks, so a link to a frame counts as a frame. Entries that cannot be
        // stat'ed stay in the list and surface later as frame decode failures.
        match std::fs::metadata(entry.path()) {
            Ok(meta) if !meta.is_file() => {
                tracing::debug!(path = %entry.path().display(), "skipping non-file entry");
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "cannot stat frame entry");
            }
        }
        names.push(name);
    }

    names.sort();
    tracing::debug!(dir = %dir.display(), count = names.len(), "scanned frame directory");
    Ok(names.into_iter().map(|n| dir.join(n)).collect())
}

fn is_frame_name(name: &Path, ext: &str) -> bool {
    let hidden = name
        .as_os_str()
        .as_encoded_bytes()
        .starts_with(RESOURCE_FORK_PREFIX.as_bytes());
    let matches_ext = name
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));
    matches_ext && !hidden
}

#[cfg(test)]
#[path = "../tests/unit/scan.rs"]
mod tests;
