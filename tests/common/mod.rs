use std::path::PathBuf;
use tdprofile::{Month, Profile};
use tempfile::TempDir;

/// Shorthand for a month that is known to be valid.
pub fn ym(year: i32, month: i32) -> Month {
    Month::new(year, month).unwrap()
}

/// Fresh temp directory plus the profile file path inside it.
/// Keep the `TempDir` alive for the duration of the test.
pub fn temp_profiles() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");
    (dir, path)
}

/// The profile most tests start from: password "s3cret" (base64 "czNjcmV0").
pub fn sample_profile() -> Profile {
    Profile::new("prod", "alice", "tdprod.example.com", "s3cret").unwrap()
}
