use std::path::PathBuf;
use chrono::{DateTime, Utc};
use super::{FamilyMetadata, FontMetadata};

/// A single font file together with its provenance
#[derive(Debug, Clone)]
pub struct Font {
    /// Location of the font file (descriptor directory joined with the declared filename)
    pub path: PathBuf,
    /// Metadata declared for this font
    pub meta: FontMetadata,
    /// Most recent commit that touched the file
    pub commit: String,
    /// Commit time of `commit`
    pub changed: DateTime<Utc>,
}

/// A font family described by one descriptor file
#[derive(Debug, Clone)]
pub struct Family {
    /// Location of the descriptor file
    pub path: PathBuf,
    pub meta: FamilyMetadata,
    /// Most recent commit that touched the descriptor
    pub commit: String,
    /// Commit time of `commit`
    pub changed: DateTime<Utc>,
    /// Fonts in declaration order
    pub fonts: Vec<Font>,
}

impl Family {
    /// Time of the latest change affecting this family or any of its fonts
    pub fn latest_change(&self) -> DateTime<Utc> {
        self.fonts
            .iter()
            .map(|font| font.changed)
            .fold(self.changed, |latest, changed| latest.max(changed))
    }
}
