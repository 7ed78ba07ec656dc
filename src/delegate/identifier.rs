const CANONICAL_BASE: u64 = 100;

/// Length of the hex prefix kept from a resource fingerprint.
const RESOURCE_ID_LEN: usize = 12;

/// Backing resource identifier. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    image_id: String,
    text_id: String,
}

impl Identifier {
    pub fn new(image_id: impl Into<String>, text_id: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            text_id: text_id.into(),
        }
    }

    /// `image_id = base`, `text_id = base + 1` (saturating).
    pub fn sequential(base: u64) -> Self {
        Self::new(base.to_string(), base.saturating_add(1).to_string())
    }

    /// Derive both sub-identifiers from a SHA-1 fingerprint of `key`.
    pub fn from_resource(key: &str) -> Self {
        Self::new(
            resource_fingerprint(key, "image"),
            resource_fingerprint(key, "text"),
        )
    }

    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    pub fn text_id(&self) -> &str {
        &self.text_id
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::sequential(CANONICAL_BASE)
    }
}

/// The canonical identifier: `image_id = "100"`, `text_id = "101"`.
pub fn new_identifier() -> Identifier {
    Identifier::default()
}

fn resource_fingerprint(key: &str, field: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.update(b":");
    hasher.update(field.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(RESOURCE_ID_LEN);
    hex
}
