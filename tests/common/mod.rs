use std::collections::HashMap;
use std::fs;
use std::path::Path;
use chrono::{DateTime, TimeZone, Utc};
use nix_google_fonts_gen::{Error, Provenance, Result};

/// Provenance double answering from a fixed table keyed by repository-relative path
#[derive(Default)]
pub struct CannedHistory {
    revisions: HashMap<String, String>,
    timestamps: HashMap<String, i64>,
}

impl CannedHistory {
    pub fn commit(mut self, revision: &str, timestamp: i64, paths: &[&str]) -> Self {
        for path in paths {
            self.revisions.insert(path.to_string(), revision.to_string());
        }
        self.timestamps.insert(revision.to_string(), timestamp);
        self
    }
}

impl Provenance for CannedHistory {
    fn latest_revision(&self, root: &Path, path: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| Error::Provenance(format!("{} is outside the repository", path.display())))?
            .to_string_lossy()
            .replace('\\', "/");
        self.revisions
            .get(&relative)
            .cloned()
            .ok_or_else(|| Error::Provenance(format!("no commit touches {}", relative)))
    }

    fn revision_timestamp(&self, _root: &Path, revision: &str) -> Result<DateTime<Utc>> {
        let seconds = self
            .timestamps
            .get(revision)
            .ok_or_else(|| Error::Provenance(format!("unknown revision {}", revision)))?;
        Ok(Utc.timestamp_opt(*seconds, 0).unwrap())
    }
}

pub fn write(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

pub fn descriptor(name: &str, license: &str, fonts: &[&str]) -> String {
    let mut text = format!("name: \"{}\"\nlicense: \"{}\"\ncategory: \"SANS_SERIF\"\n", name, license);
    for font in fonts {
        text.push_str(&format!(
            "fonts {{\n  name: \"{}\"\n  style: \"normal\"\n  weight: 400\n  filename: \"{}\"\n}}\n",
            name, font
        ));
    }
    text.push_str("subsets: \"latin\"\n");
    text
}
