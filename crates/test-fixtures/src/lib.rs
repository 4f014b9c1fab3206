//! Test fixture loader for FeedGate golden candidate posts.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // Inside a sibling crate (e.g. feedgate-validation), go up to `crates/`.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Relative paths (as accepted by [`load_fixture`]) of every golden case.
pub fn golden_case_paths() -> Vec<String> {
    let root = fixtures_root();
    ["golden/biography", "golden/general"]
        .iter()
        .flat_map(|subdir| list_fixtures(subdir))
        .map(|p| {
            p.strip_prefix(&root)
                .unwrap_or(&p)
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// One golden candidate and the verdict it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    pub input: GoldenInput,
    pub expected: GoldenExpectation,
}

/// Raw inputs exactly as the generation pipeline would send them.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenInput {
    /// Unparsed post; run it through the schema parser first.
    pub post: serde_json::Value,
    pub mode: String,
    pub length: String,
    #[serde(default)]
    pub options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub ok: bool,
    /// Each must appear in at least one diagnostic.
    #[serde(default)]
    pub error_substrings: Vec<String>,
    /// None may appear in any diagnostic.
    #[serde(default)]
    pub absent_substrings: Vec<String>,
}

/// Load a golden case by relative path.
pub fn load_golden_case(relative_path: &str) -> GoldenCase {
    load_fixture(relative_path)
}
