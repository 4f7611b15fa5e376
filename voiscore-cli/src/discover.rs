//! Newest-recording discovery.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use tracing::debug;

/// Find the most recently modified `.wav` directly under `dir`.
///
/// A missing directory or one without recordings yields `Ok(None)`; both
/// just mean there is nothing to score yet.
pub fn newest_recording(dir: &Path) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !is_wav(&path) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .with_context(|| format!("reading mtime of {}", path.display()))?;
        if newest.as_ref().map_or(true, |(at, _)| modified > *at) {
            newest = Some((modified, path));
        }
    }

    let newest = newest.map(|(_, path)| path);
    debug!(?newest, "recording discovery finished");
    Ok(newest)
}

fn is_wav(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("wav"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    fn touch(dir: &Path, name: &str, age: Duration) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
        path
    }

    #[test]
    fn picks_the_most_recently_modified_wav() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "old.wav", Duration::from_secs(600));
        let newest = touch(dir.path(), "new.wav", Duration::from_secs(5));
        touch(dir.path(), "middle.wav", Duration::from_secs(60));

        assert_eq!(newest_recording(dir.path()).unwrap(), Some(newest));
    }

    #[test]
    fn ignores_files_without_a_wav_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt", Duration::from_secs(5));
        touch(dir.path(), "take.mp3", Duration::from_secs(5));
        let wav = touch(dir.path(), "take.WAV", Duration::from_secs(600));

        assert_eq!(newest_recording(dir.path()).unwrap(), Some(wav));
    }

    #[test]
    fn missing_directory_is_none_not_an_error() {
        assert_eq!(
            newest_recording(Path::new("no/such/directory")).unwrap(),
            None
        );
    }

    #[test]
    fn empty_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(newest_recording(dir.path()).unwrap(), None);
    }
}
