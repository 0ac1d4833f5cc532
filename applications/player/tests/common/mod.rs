//! Common test utilities and fixtures
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three-track round with a title and known durations
pub const ROUND_MANIFEST: &str = r#"{
    "title": "Round 12",
    "description": "Everyone covers the same song",
    "tracks": [
        { "id": "a", "source": "https://cdn.example/a.mp3", "title": "A", "artist": "Ana", "duration": 180 },
        { "id": "b", "source": "https://cdn.example/b.mp3", "title": "B", "artist": "Ben", "duration": 200 },
        { "id": "c", "source": "https://cdn.example/c.mp3", "title": "C", "duration": 75 }
    ]
}"#;

/// Write `contents` to `name` inside a fresh temp dir
///
/// The directory is deleted when the returned `TempDir` drops.
pub fn write_temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}
