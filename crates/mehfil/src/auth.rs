use serde::{Deserialize, Serialize};

/// Staff roles known to the marketplace back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Moderator,
    Support,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "owner" => Some(Self::Owner),
            "moderator" => Some(Self::Moderator),
            "support" => Some(Self::Support),
            _ => None,
        }
    }
}

/// Discrete back-office capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ReviewSubmissions,
    EditContent,
    ManageUsers,
}

impl Capability {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "review_submissions" => Some(Self::ReviewSubmissions),
            "edit_content" => Some(Self::EditContent),
            "manage_users" => Some(Self::ManageUsers),
            _ => None,
        }
    }
}

/// Static role defaults. Support staff hold no capabilities by default
/// and rely on explicit grants.
const fn default_capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Owner => &[
            Capability::ReviewSubmissions,
            Capability::EditContent,
            Capability::ManageUsers,
        ],
        Role::Moderator => &[Capability::ReviewSubmissions, Capability::EditContent],
        Role::Support => &[],
    }
}

/// Caller identity resolved by the upstream session layer. The
/// onboarding service never creates these; it only checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub role: Role,
    pub grants: Vec<Capability>,
}

impl Session {
    pub fn new(user: impl Into<String>, role: Role) -> Self {
        Self {
            user: user.into(),
            role,
            grants: Vec::new(),
        }
    }

    pub fn with_grants(mut self, grants: Vec<Capability>) -> Self {
        self.grants = grants;
        self
    }

    /// Union of the role's default set and the per-user grant list.
    pub fn has_capability(&self, capability: Capability) -> bool {
        default_capabilities(self.role).contains(&capability) || self.grants.contains(&capability)
    }
}

/// Authorization gate for the admin review surface. The public
/// onboarding wizard never consults this.
pub fn can_access_admin(session: &Session) -> bool {
    session.has_capability(Capability::ReviewSubmissions)
}
