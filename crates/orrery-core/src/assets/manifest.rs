use serde::{Deserialize, Serialize};

/// Texture manifest describing the images the host page uploaded.
/// Loaded from a JSON string at runtime; entry order is GPU slot order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    pub textures: Vec<TextureEntry>,
}

/// One uploaded texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureEntry {
    /// Catalog name of the body this texture belongs to (e.g. "earth").
    pub body: String,
    /// Relative path to the image file (e.g. "img/earth.jpg").
    pub path: String,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// GPU slot for a body name: the index its texture was uploaded at.
    pub fn slot_for(&self, body: &str) -> Option<u32> {
        self.textures
            .iter()
            .position(|t| t.body == body)
            .map(|i| i as u32)
    }
}
