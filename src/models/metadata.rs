/// A `fonts { ... }` entry of a family descriptor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontMetadata {
    /// Family name as recorded for this font
    pub name: String,
    /// Style, e.g. "normal" or "italic"
    pub style: String,
    /// Weight class
    pub weight: i32,
    /// File name relative to the descriptor's directory
    pub filename: String,
    pub post_script_name: String,
    pub full_name: String,
    pub copyright: String,
}

/// Contents of a `METADATA.pb` family descriptor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyMetadata {
    /// Human readable family name
    pub name: String,
    pub designer: String,
    /// License identifier, e.g. "OFL"
    pub license: String,
    pub category: Vec<String>,
    pub date_added: String,
    /// Declared fonts, in declaration order
    pub fonts: Vec<FontMetadata>,
    pub subsets: Vec<String>,
}
