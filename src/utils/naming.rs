use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref SHELL_UNSAFE: Regex = Regex::new(r"[^A-Za-z0-9_@%+=:,./-]").unwrap();
}

/// Derive a package name from a family's display name.
///
/// Non-ASCII characters are transliterated, the result lowercased and every
/// run of characters outside `[a-z0-9]` collapsed into a single `-`. Returns
/// `None` when nothing alphanumeric survives.
pub fn package_name(display_name: &str) -> Option<String> {
    let ascii = deunicode(display_name).to_lowercase();
    let name = NON_ALPHANUMERIC.replace_all(&ascii, "-").into_owned();

    if name.chars().any(|c| c.is_ascii_alphanumeric()) {
        Some(name)
    } else {
        None
    }
}

/// Escape text for embedding in a double-quoted Nix string
pub fn nix_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("${", "\\${")
}

/// File name usable both in a Nix store path and on the install command line
pub fn store_file_name(file_name: &str) -> String {
    file_name.replace(['[', ']'], "_").replace(',', "-")
}

/// Quote a word for a POSIX shell, leaving it bare when that is safe
pub fn shell_quote(word: &str) -> String {
    if word.is_empty() {
        return "''".to_string();
    }
    if !SHELL_UNSAFE.is_match(word) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', "'\"'\"'"))
}
