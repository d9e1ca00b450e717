use std::collections::HashSet;
use log::{info, warn};
use crate::error::Result;
use crate::models::Config;
use crate::repository::{families, Provenance};
use crate::utils::{ensure_directory_exists, write_file};
use super::render::{package_derivation, package_index};

/// Directory under the overlay root holding one directory per package
pub const PACKAGES_DIR: &str = "pkgs";

/// File name of every generated Nix expression
pub const EXPRESSION_FILE_NAME: &str = "default.nix";

/// Generate the overlay for `config.repository` into `config.overlay`.
///
/// Returns the number of derivations written. Families whose package name
/// was already taken by an earlier family are skipped with a warning.
pub fn create_overlay<P: Provenance + ?Sized>(config: &Config, provenance: &P) -> Result<usize> {
    ensure_directory_exists(&config.overlay)?;

    let mut packages: HashSet<String> = HashSet::new();
    for family in families(&config.repository, provenance) {
        let family = family?;
        let (name, derivation) = match package_derivation(&config.repository, &family)? {
            Some(package) => package,
            None => continue,
        };

        if packages.contains(&name) {
            warn!("Duplicate font: {}", name);
            continue;
        }

        let dir = config.overlay.join(PACKAGES_DIR).join(&name);
        ensure_directory_exists(&dir)?;
        write_file(&dir.join(EXPRESSION_FILE_NAME), &derivation)?;
        info!("Wrote derivation for {}", family.meta.name);
        packages.insert(name);
    }

    write_file(&config.overlay.join(EXPRESSION_FILE_NAME), &package_index(&packages))?;
    info!("Created {} derivations", packages.len());

    Ok(packages.len())
}
