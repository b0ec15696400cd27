use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    #[serde(default)]
    pub netid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn from_netid(netid: impl Into<String>) -> Self {
        Self {
            netid: Some(netid.into()),
            ..Default::default()
        }
    }

    /// The identifier shown to the user, empty when unknown.
    pub fn display_netid(&self) -> &str {
        self.netid.as_deref().unwrap_or_default()
    }
}
