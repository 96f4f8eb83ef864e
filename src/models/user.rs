use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
    pub avatar: String,
}

impl User {
    /// Marks the identity as checked. There is no way back to unverified.
    ///
    /// Returns `true` when the flag actually changed.
    pub fn verify(&mut self) -> bool {
        let changed = !self.is_verified;
        self.is_verified = true;
        changed
    }
}
