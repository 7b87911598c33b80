//! On-disk profile list: one JSON document holding every profile.

use crate::profile::Profile;
use crate::util::replace_file_atomic;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Default, Serialize, Deserialize)]
struct ProfileFile {
    profiles: Vec<Profile>,
}

pub struct ProfileStore {
    path: PathBuf,
    profiles: Vec<Profile>, // kept sorted by name
}

impl ProfileStore {
    /// Load the list at `path`. A missing file is an empty store; a present
    /// but unreadable one, or one naming the same profile twice, is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let mut profiles = if path.exists() {
            let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
            let doc: ProfileFile = serde_json::from_reader(BufReader::new(f))
                .with_context(|| format!("parse profile list {}", path.display()))?;
            doc.profiles
        } else {
            tracing::debug!(path = %path.display(), "profile list not found, starting empty");
            Vec::new()
        };
        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = profiles.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(anyhow!("profile list {} has duplicate name {:?}", path.display(), pair[0].name));
        }
        Ok(Self { path: path.to_path_buf(), profiles })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn position(&self, name: &str) -> std::result::Result<usize, usize> {
        self.profiles.binary_search_by(|p| p.name.as_str().cmp(name))
    }

    /// Add a new profile; fails if the name is already taken.
    pub fn add(&mut self, profile: Profile) -> Result<()> {
        match self.position(&profile.name) {
            Ok(_) => Err(anyhow!("profile {:?} already exists", profile.name)),
            Err(i) => {
                self.profiles.insert(i, profile);
                Ok(())
            }
        }
    }

    /// Add or replace. Returns the replaced profile, if any.
    pub fn upsert(&mut self, profile: Profile) -> Option<Profile> {
        match self.position(&profile.name) {
            Ok(i) => Some(std::mem::replace(&mut self.profiles[i], profile)),
            Err(i) => {
                self.profiles.insert(i, profile);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.position(name).ok().map(|i| &self.profiles[i])
    }

    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        self.position(name).ok().map(|i| self.profiles.remove(i))
    }

    /// Profiles sorted by name.
    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn write_tmp(&self, tmp: &Path) -> Result<()> {
        let f = File::create(tmp).with_context(|| format!("create {}", tmp.display()))?;
        let mut w = BufWriter::new(f);
        let doc = ProfileFile { profiles: self.profiles.clone() };
        serde_json::to_writer_pretty(&mut w, &doc)?;
        w.write_all(b"\n")?;
        w.flush().with_context(|| format!("flush {}", tmp.display()))?;
        Ok(())
    }

    /// Write the list to a sibling temp file, then move it over the target.
    /// The temp file is removed again if any step fails.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let written = self.write_tmp(&tmp).and_then(|_| replace_file_atomic(&tmp, &self.path));
        if let Err(e) = written {
            if tmp.is_file() {
                if let Err(rm) = fs::remove_file(&tmp) {
                    tracing::warn!(path = %tmp.display(), error = %rm, "could not remove temp profile list");
                }
            }
            return Err(e);
        }
        tracing::info!(path = %self.path.display(), count = self.profiles.len(), "saved profile list");
        Ok(())
    }
}
