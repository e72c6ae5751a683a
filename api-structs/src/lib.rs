pub mod time_conversion;
pub mod ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    StandardUser,
    Merchant,
    Admin,
}

impl Role {
    /// Where a freshly signed in user of this role lands.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::StandardUser => "/user-landing",
            Role::Merchant => "/merchant-landing",
            Role::Admin => "/admin-dashboard",
        }
    }
}
