use super::mojang::MojangApi;
use super::skin::SkinTexture;
use crate::config::PROFILE_PROPERTY_TEXTURES;
use crate::error::{ApiError, PropertyDecodeError, Result};
use crate::http::HttpMethod;
use base64::{engine::general_purpose, Engine as _};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public player profile as returned by the session server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

/// Name/value pair attached to a profile. The value is usually base64-encoded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    /// Upstream signature of `value`, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Decoded value of the `textures` property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTexturesData {
    /// Milliseconds since the epoch when the payload was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub textures: ProfileTexturesImages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTexturesImages {
    #[serde(rename = "SKIN", default, skip_serializing_if = "SkinTexture::is_empty")]
    pub skin: SkinTexture,
    #[serde(rename = "CAPE", default, skip_serializing_if = "SkinTexture::is_empty")]
    pub cape: SkinTexture,
}

impl ProfileProperty {
    pub fn is_textures(&self) -> bool {
        self.name == PROFILE_PROPERTY_TEXTURES
    }

    /// Base64-decode the value, then JSON-decode the result into `T`
    pub fn decode_base64_json<T: DeserializeOwned>(&self) -> Result<T> {
        let decoded = general_purpose::STANDARD
            .decode(&self.value)
            .map_err(PropertyDecodeError::from)?;

        let data = serde_json::from_slice(&decoded).map_err(PropertyDecodeError::from)?;
        Ok(data)
    }

    pub fn decode_textures(&self) -> Result<ProfileTexturesData> {
        self.decode_base64_json()
    }

    /// Build an unsigned property whose value is `data` as base64-encoded JSON
    pub fn encode_base64_json<T: Serialize>(name: impl Into<String>, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data).map_err(ApiError::PropertyEncode)?;

        Ok(Self {
            name: name.into(),
            value: general_purpose::STANDARD.encode(json),
            signature: None,
        })
    }
}

impl Profile {
    pub fn textures_property(&self) -> Option<&ProfileProperty> {
        self.properties.iter().find(|prop| prop.is_textures())
    }

    /// Decode the textures property, if the profile has one
    pub fn decode_textures(&self) -> Result<Option<ProfileTexturesData>> {
        self.textures_property()
            .map(ProfileProperty::decode_textures)
            .transpose()
    }
}

impl MojangApi {
    /// Fetch a player's public profile by UUID.
    ///
    /// The session server answers 204 or 404 for unknown UUIDs; both map to `NotFound`.
    pub async fn get_profile(&self, uuid: Uuid) -> Result<Profile> {
        // The path segment only accepts the undashed form
        let url = format!(
            "{}/session/minecraft/profile/{}",
            self.session_server,
            uuid.simple()
        );

        log::debug!("API call: get_profile for UUID: {}", uuid);
        let response = self.client.request_json(HttpMethod::Get, &url, None).await?;

        match response.status {
            200 => serde_json::from_slice(&response.body).map_err(ApiError::ResponseParse),
            204 | 404 => Err(ApiError::NotFound(uuid.to_string())),
            400 => Err(ApiError::BadRequest),
            status => Err(ApiError::UnexpectedStatus(status)),
        }
    }
}
