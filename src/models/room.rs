use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Room visibility on the provider side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Private,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Private => "private",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Privacy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Privacy::Public),
            "private" => Ok(Privacy::Private),
            other => Err(other.to_string()),
        }
    }
}

/// What the caller wants provisioned
#[derive(Debug, Clone)]
pub struct RoomRequest {
    pub duration_minutes: f64,
    pub privacy: Privacy,
    /// Requested room name; a random one is generated when absent.
    pub name: Option<String>,
}

/// Room as created by the provider. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionedRoom {
    pub name: String,
    pub expires_at: i64,
    pub privacy: Privacy,
    pub url: Option<String>,
}

/// Body of `POST /rooms` on the provider API
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoomPayload {
    pub name: String,
    pub privacy: Privacy,
    pub properties: RoomProperties,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomProperties {
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    pub enable_prejoin_ui: bool,
    pub eject_at_room_exp: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_ui: Option<bool>,
}

/// Subset of the provider's room object we read back
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRoom {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub config: Option<ProviderRoomConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderRoomConfig {
    #[serde(default)]
    pub exp: Option<i64>,
}

impl ProviderRoom {
    /// Provider-reported expiration: `config.exp` first, then top-level `exp`.
    pub fn reported_expiration(&self) -> Option<i64> {
        self.config
            .as_ref()
            .and_then(|c| c.exp)
            .or(self.exp)
    }
}
