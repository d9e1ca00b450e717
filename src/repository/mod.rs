//! Discovery of font families and their version control provenance

pub mod descriptor;
pub mod provenance;

use std::fs;
use std::path::{Path, PathBuf};
use jwalk::{DirEntryIter, Parallelism, WalkDir};
use log::debug;
use crate::error::{Error, Result};
use crate::models::{Family, Font, FontMetadata};

pub use descriptor::{parse_family_metadata, DescriptorError, DESCRIPTOR_FILE_NAME};
pub use provenance::{Git, Provenance};

/// Lazy sequence of the families found in a repository, in traversal order
pub struct Families<'a, P: Provenance + ?Sized> {
    repository: PathBuf,
    provenance: &'a P,
    entries: DirEntryIter<((), ())>,
}

/// Return iterator over all the font families in `repository`
pub fn families<'a, P: Provenance + ?Sized>(repository: &Path, provenance: &'a P) -> Families<'a, P> {
    let entries = WalkDir::new(repository)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .sort(true)
        .process_read_dir(|_depth, _path, _read_dir_state, children| {
            children.retain(|entry| {
                entry
                    .as_ref()
                    .map(|entry| entry.file_name().to_str() != Some(".git"))
                    .unwrap_or(true)
            });
        })
        .into_iter();

    Families {
        repository: repository.to_path_buf(),
        provenance,
        entries,
    }
}

impl<'a, P: Provenance + ?Sized> Families<'a, P> {
    fn read_family(&self, path: &Path) -> Result<Family> {
        debug!("Reading family descriptor {}", path.display());

        let contents = fs::read_to_string(path)?;
        let meta = parse_family_metadata(&contents).map_err(|source| Error::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        let commit = self.provenance.latest_revision(&self.repository, path)?;
        let changed = self.provenance.revision_timestamp(&self.repository, &commit)?;

        let dir = path.parent().unwrap_or(&self.repository);
        let fonts = meta
            .fonts
            .iter()
            .map(|font_meta| self.read_font(dir, font_meta))
            .collect::<Result<Vec<_>>>()?;

        Ok(Family {
            path: path.to_path_buf(),
            meta,
            commit,
            changed,
            fonts,
        })
    }

    fn read_font(&self, dir: &Path, meta: &FontMetadata) -> Result<Font> {
        let path = dir.join(&meta.filename);
        let commit = self.provenance.latest_revision(&self.repository, &path)?;
        let changed = self.provenance.revision_timestamp(&self.repository, &commit)?;
        debug!("{} last changed in {} at {}", path.display(), commit, changed);

        Ok(Font {
            path,
            meta: meta.clone(),
            commit,
            changed,
        })
    }
}

impl<'a, P: Provenance + ?Sized> Iterator for Families<'a, P> {
    type Item = Result<Family>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::Walk(e.to_string()))),
            };
            if entry.file_type().is_file() && entry.file_name().to_str() == Some(DESCRIPTOR_FILE_NAME) {
                return Some(self.read_family(&entry.path()));
            }
        }
    }
}
