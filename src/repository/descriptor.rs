use std::fmt;
use protobuf::text_format;
use crate::fonts_public::{FamilyProto, FontProto};
use crate::models::{FamilyMetadata, FontMetadata};

/// Name of the family descriptor file
pub const DESCRIPTOR_FILE_NAME: &str = "METADATA.pb";

/// A descriptor that does not conform to the family schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorError {
    pub message: String,
}

impl DescriptorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DescriptorError {}

/// Parse the contents of a family descriptor.
///
/// Fields unknown to the schema are errors, as is a font entry without a filename.
pub fn parse_family_metadata(input: &str) -> Result<FamilyMetadata, DescriptorError> {
    let family: FamilyProto =
        text_format::parse_from_str(input).map_err(|e| DescriptorError::new(e.to_string()))?;

    let fonts = family
        .fonts
        .iter()
        .enumerate()
        .map(|(index, font)| {
            if font.filename().is_empty() {
                return Err(DescriptorError::new(format!(
                    "font entry {} declares no filename",
                    index + 1
                )));
            }
            Ok(font_metadata(font))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FamilyMetadata {
        name: family.name().to_string(),
        designer: family.designer().to_string(),
        license: family.license().to_string(),
        category: family.category.clone(),
        date_added: family.date_added().to_string(),
        fonts,
        subsets: family.subsets.clone(),
    })
}

fn font_metadata(font: &FontProto) -> FontMetadata {
    FontMetadata {
        name: font.name().to_string(),
        style: font.style().to_string(),
        weight: font.weight(),
        filename: font.filename().to_string(),
        post_script_name: font.post_script_name().to_string(),
        full_name: font.full_name().to_string(),
        copyright: font.copyright().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABEEZEE: &str = r#"
# Family descriptor
name: "ABeeZee"
designer: "Anja Meiners"
license: "OFL"
category: "SANS_SERIF"
date_added: "2012-09-30"
fonts {
  name: "ABeeZee"
  style: "normal"
  weight: 400
  filename: "ABeeZee-Regular.ttf"
  post_script_name: "ABeeZee-Regular"
  full_name: "ABeeZee Regular"
  copyright: "Copyright (c) 2011 by Anja Meiners. All rights reserved."
}
fonts {
  name: "ABeeZee"
  style: "italic"
  weight: 400
  filename: "ABeeZee-Italic.ttf"
  post_script_name: "ABeeZee-Italic"
  full_name: "ABeeZee Italic"
  copyright: "Copyright (c) 2011 by Anja Meiners. All rights reserved."
}
subsets: "latin"
subsets: "menu"
axes {
  tag: "wght"
  min_value: 400.0
  max_value: 700.0
}
source {
  repository_url: "https://github.com/example/abeezee"
  commit: "0123456789abcdef"
}
"#;

    #[test]
    fn maps_descriptor_fields() {
        let meta = parse_family_metadata(ABEEZEE).unwrap();
        assert_eq!(meta.name, "ABeeZee");
        assert_eq!(meta.designer, "Anja Meiners");
        assert_eq!(meta.license, "OFL");
        assert_eq!(meta.category, ["SANS_SERIF"]);
        assert_eq!(meta.date_added, "2012-09-30");
        assert_eq!(meta.subsets, ["latin", "menu"]);
        assert_eq!(meta.fonts.len(), 2);
        assert_eq!(meta.fonts[1].style, "italic");
        assert_eq!(meta.fonts[1].filename, "ABeeZee-Italic.ttf");
        assert_eq!(meta.fonts[0].weight, 400);
    }

    #[test]
    fn family_without_fonts_is_accepted() {
        let meta = parse_family_metadata("name: \"Empty\"\nlicense: \"OFL\"\n").unwrap();
        assert!(meta.fonts.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let meta = parse_family_metadata("").unwrap();
        assert_eq!(meta, FamilyMetadata::default());
    }

    #[test]
    fn misspelled_family_field_is_rejected() {
        assert!(parse_family_metadata("name: \"X\"\nlicence: \"OFL\"\n").is_err());
    }

    #[test]
    fn misspelled_font_field_is_rejected() {
        let input = "name: \"X\"\nlicense: \"OFL\"\nfonts { filename: \"a.ttf\" fielname: 3 }\n";
        assert!(parse_family_metadata(input).is_err());
    }

    #[test]
    fn font_without_filename_is_rejected() {
        let err = parse_family_metadata("name: \"X\"\nfonts {\n  name: \"X\"\n}\n").unwrap_err();
        assert!(err.message.contains("font entry 1"));
    }

    #[test]
    fn scalar_fonts_entry_is_rejected() {
        assert!(parse_family_metadata("fonts: \"X-Regular.ttf\"").is_err());
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        assert!(parse_family_metadata("fonts { filename: \"a.ttf\" weight: \"bold\" }").is_err());
    }

    #[test]
    fn unterminated_message_is_rejected() {
        assert!(parse_family_metadata("name: \"X\"\nfonts {\n  filename: \"a.ttf\"\n").is_err());
    }
}
