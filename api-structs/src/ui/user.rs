use crate::Role;
use serde::{Deserialize, Serialize};

/// Body of `GET /user/me`, resolved by the API from the auth cookie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}
