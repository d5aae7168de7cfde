//! Room provisioning on the video provider.

pub mod daily;

use chrono::Utc;
use rand::Rng;

use crate::config::Config;
use crate::error::Result;
use crate::models::{CreateRoomPayload, ProvisionedRoom, RoomProperties, RoomRequest};

/// Rooms never expire sooner than this after creation.
pub const MIN_LEAD_SECONDS: i64 = 5;
/// `nbf` is backdated by this much to absorb clock skew.
pub const NOT_BEFORE_SKEW_SECONDS: i64 = 10;

pub const ROOM_NAME_PREFIX: &str = "room_";
const ROOM_NAME_SUFFIX_LEN: usize = 12;

/// Expiration for a room created at `now` lasting `duration_minutes`.
pub fn compute_expiration(now: i64, duration_minutes: f64) -> i64 {
    let requested = now + (duration_minutes * 60.0).floor() as i64;
    requested.max(now + MIN_LEAD_SECONDS)
}

/// Random room name like `room_k3v9x0q2mz7a`. Not cryptographically unique.
pub fn generate_room_name() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();

    let suffix: String = (0..ROOM_NAME_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}{}", ROOM_NAME_PREFIX, suffix)
}

/// Creates expiring rooms (currently backed by Daily)
#[derive(Clone)]
pub struct RoomProvisioner {
    inner: daily::DailyClient,
}

impl RoomProvisioner {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            inner: daily::DailyClient::new(config)?,
        })
    }

    pub async fn provision(&self, request: RoomRequest) -> Result<ProvisionedRoom> {
        self.provision_at(request, Utc::now().timestamp()).await
    }

    async fn provision_at(&self, request: RoomRequest, now: i64) -> Result<ProvisionedRoom> {
        let expires_at = compute_expiration(now, request.duration_minutes);
        let payload = CreateRoomPayload {
            name: request.name.unwrap_or_else(generate_room_name),
            privacy: request.privacy,
            properties: RoomProperties {
                exp: expires_at,
                nbf: Some(now - NOT_BEFORE_SKEW_SECONDS),
                enable_prejoin_ui: true,
                eject_at_room_exp: true,
                enable_chat: Some(true),
                enable_network_ui: Some(true),
            },
        };

        let room = match self.inner.create_room(&payload).await {
            Ok(room) => room,
            Err(e) => {
                tracing::error!(room = %payload.name, error = %e, "Room creation failed");
                return Err(e);
            }
        };

        let provisioned = ProvisionedRoom {
            expires_at: room.reported_expiration().unwrap_or(expires_at),
            privacy: room
                .privacy
                .as_deref()
                .and_then(|p| p.parse().ok())
                .unwrap_or(payload.privacy),
            url: room.url,
            name: room.name,
        };

        tracing::info!(
            room = %provisioned.name,
            exp = provisioned.expires_at,
            privacy = %provisioned.privacy,
            url = provisioned.url.as_deref().unwrap_or("-"),
            "Room provisioned"
        );

        Ok(provisioned)
    }
}
