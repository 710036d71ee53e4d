use std::path::PathBuf;

pub const DEFAULT_IMAGE: &str = "default";
pub const IMAGE_ROUTE: &str = "/assets/img";

/// Image identifier for a district name: "San Borja" -> "san-borja".
///
/// Accented vowels are dropped, "ñ" becomes "n", and anything outside
/// `[a-z0-9-]` is removed. Image files are named after this identifier.
pub fn district_slug(district: &str) -> String {
    district
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            'ñ' => Some('n'),
            'á' | 'é' | 'í' | 'ó' | 'ú' => None,
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

/// Resolves district names to image URLs, falling back to the default
/// image when no matching file exists in the assets directory.
#[derive(Debug, Clone)]
pub struct DistrictImages {
    dir: PathBuf,
}

impl DistrictImages {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub fn identifier(&self, district: &str) -> String {
        let slug = district_slug(district);
        if slug.is_empty() || !self.dir.join(format!("{slug}.jpg")).is_file() {
            return DEFAULT_IMAGE.to_string();
        }
        slug
    }

    pub fn url(&self, district: &str) -> String {
        format!("{IMAGE_ROUTE}/{}.jpg", self.identifier(district))
    }

    pub fn default_url() -> String {
        format!("{IMAGE_ROUTE}/{DEFAULT_IMAGE}.jpg")
    }
}
