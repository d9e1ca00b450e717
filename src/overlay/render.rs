//! Nix expressions for font families and the overlay index

use std::collections::BTreeSet;
use std::path::Path;
use log::{error, warn};
use crate::error::Result;
use crate::models::{Family, Font};
use crate::utils::{nix_string, package_name, sha256_hex, shell_quote, store_file_name};

/// Upstream location the font files are fetched from
pub const FONTS_REPO_URL: &str = "https://github.com/google/fonts";

/// Format of the package version, derived from the latest change
pub const VERSION_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// License identifiers used in descriptors and their nixpkgs counterparts
const LICENSES: &[(&str, &str)] = &[
    ("UFL", "licenses.ufl"),
    ("OFL", "licenses.ofl"),
    ("APACHE2", "licenses.asl20"),
];

/// Font file extensions and their subdirectory under `share/fonts`
const FONT_TYPES: &[(&str, &str)] = &[("ttf", "/truetype"), ("otf", "/opentype")];

/// Look up the nixpkgs license for a descriptor license identifier
pub fn license_token(license: &str) -> Option<&'static str> {
    LICENSES
        .iter()
        .find(|(id, _)| *id == license)
        .map(|(_, token)| *token)
}

/// Return nix expression for font family, or `None` if it should be skipped
pub fn package_derivation(repository: &Path, family: &Family) -> Result<Option<(String, String)>> {
    let name = match package_name(&family.meta.name) {
        Some(name) => name,
        None => {
            error!("Cannot derive package name for {}", family.path.display());
            return Ok(None);
        }
    };

    let license = match license_token(&family.meta.license) {
        Some(license) => license,
        None => {
            error!("Unknown license {:?} for {}", family.meta.license, family.meta.name);
            return Ok(None);
        }
    };

    let sources = family
        .fonts
        .iter()
        .map(|font| font_fetcher(repository, font))
        .collect::<Result<Vec<_>>>()?
        .join("\n");
    let install = family
        .fonts
        .iter()
        .map(font_installer)
        .collect::<Vec<_>>()
        .join("\n");
    let version = family.latest_change().format(VERSION_FORMAT).to_string();
    let description = nix_string(&family.meta.name);

    let derivation = format!(
        r#"{{ lib, stdenv, fetchurl }}:

stdenv.mkDerivation rec {{
  name = "{name}-${{version}}";
  version = "{version}";

  phases = [ "unpackPhase" "installPhase" ];

  srcs = [
{sources}
  ];

  unpackPhase = ''
    for font in $srcs; do
      cp "$font" "$(echo "$font" | cut -d- -f2-)"
    done
  '';

  installPhase = ''
{install}
  '';

  meta = with lib; {{
    description = "{description}";
    license = {license};
    platforms = platforms.all;
  }};
}}
"#,
        name = name,
        version = version,
        sources = sources,
        install = install,
        description = description,
        license = license,
    );

    Ok(Some((name, derivation)))
}

/// Return the overlay index referencing every package, sorted by name
pub fn package_index<I, S>(packages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sorted: BTreeSet<String> = packages
        .into_iter()
        .map(|package| package.as_ref().to_string())
        .collect();
    let entries = sorted
        .iter()
        .map(|package| {
            format!(
                "    google-fonts-{package} = super.callPackage ./pkgs/{package} {{}};",
                package = package
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("self: super:\n\n{{\n{}\n}}\n", entries)
}

/// Return URL for a font file
pub fn font_url(repository: &Path, font: &Font) -> String {
    let relative = font.path.strip_prefix(repository).unwrap_or(&font.path);
    let relative = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    format!("{}/blob/{}/{}?raw=true", FONTS_REPO_URL, font.commit, relative)
        .replace('[', "%5B")
        .replace(']', "%5D")
}

fn file_name(font: &Font) -> String {
    font.path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Return fetcher expression for a font file
pub fn font_fetcher(repository: &Path, font: &Font) -> Result<String> {
    let url = font_url(repository, font);
    let name = store_file_name(&file_name(font));
    let hash = sha256_hex(&font.path)?;

    Ok(format!(
        r#"    (fetchurl {{
      url = "{url}";
      name = "{name}";
      sha256 = "{hash}";
    }})"#,
        url = url,
        name = name,
        hash = hash,
    ))
}

/// Return command for installing font file
pub fn font_installer(font: &Font) -> String {
    let file = store_file_name(&file_name(font));
    let extension = font
        .path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let font_type = match FONT_TYPES.iter().find(|(ext, _)| *ext == extension) {
        Some((_, dir)) => *dir,
        None => {
            warn!("Unknown font type: {}", file);
            ""
        }
    };

    let file = shell_quote(&file);
    format!("     install -Dm644 {file} $out/share/fonts{font_type}/{file}", file = file, font_type = font_type)
}
