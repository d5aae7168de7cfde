//! Participant join links.
//!
//! Every link is `https://<domain>/<room>` plus role-specific query parameters.
//! Display names are percent-encoded and otherwise reflected as given.

use std::fmt;
use std::str::FromStr;

use crate::models::ParticipantLinks;

pub const MANAGER_DISPLAY_NAME: &str = "Manager";

/// Participant role encoded in a join link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Model,
    Client,
    Manager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Model => "model",
            Role::Client => "client",
            Role::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the manager link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerLinkMode {
    /// Joins as "Manager" with the manager pass attached.
    Named,
    /// Joins with a stealth marker and the manager pass, no display name.
    Stealth,
}

impl FromStr for ManagerLinkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "named" => Ok(ManagerLinkMode::Named),
            "stealth" => Ok(ManagerLinkMode::Stealth),
            other => Err(other.to_string()),
        }
    }
}

/// Builds join links for rooms on a single provider domain
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    domain: String,
    manager_pass: String,
    manager_mode: ManagerLinkMode,
}

impl LinkBuilder {
    pub fn new(
        domain: impl Into<String>,
        manager_pass: impl Into<String>,
        manager_mode: ManagerLinkMode,
    ) -> Self {
        Self {
            domain: domain.into(),
            manager_pass: manager_pass.into(),
            manager_mode,
        }
    }

    pub fn room_url(&self, room_name: &str) -> String {
        format!("https://{}/{}", self.domain, room_name)
    }

    /// Link for a named participant in `role`
    pub fn participant_link(&self, room_name: &str, display_name: &str, role: Role) -> String {
        format!(
            "{}?userName={}&role={}",
            self.room_url(room_name),
            urlencoding::encode(display_name),
            role
        )
    }

    pub fn manager_link(&self, room_name: &str) -> String {
        let pass = urlencoding::encode(&self.manager_pass);
        match self.manager_mode {
            ManagerLinkMode::Named => format!(
                "{}&pass={}",
                self.participant_link(room_name, MANAGER_DISPLAY_NAME, Role::Manager),
                pass
            ),
            ManagerLinkMode::Stealth => {
                format!("{}?stealth=1&pass={}", self.room_url(room_name), pass)
            }
        }
    }

    pub fn build(&self, room_name: &str, model_name: &str, client_name: &str) -> ParticipantLinks {
        ParticipantLinks {
            model: self.participant_link(room_name, model_name, Role::Model),
            client: self.participant_link(room_name, client_name, Role::Client),
            manager: self.manager_link(room_name),
        }
    }
}
