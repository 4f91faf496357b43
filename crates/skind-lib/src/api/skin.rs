use crate::config::SKIN_MODEL_SLIM;
use serde::{Deserialize, Serialize};

/// A skin or cape texture. An empty URL means the texture is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTexture {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SkinTextureMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTextureMeta {
    #[serde(default)]
    pub model: String,
}

impl SkinTexture {
    /// True when this is the zero value, i.e. no texture of this kind
    pub fn is_empty(&self) -> bool {
        *self == SkinTexture::default()
    }

    pub fn slim(&self) -> bool {
        self.metadata
            .as_ref()
            .map_or(false, |meta| meta.model == SKIN_MODEL_SLIM)
    }
}
