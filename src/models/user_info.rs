use serde::{Deserialize, Serialize};

/// Applicant data printed in the header of the request form (free text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birthdate: String,
}

impl UserInfo {
    pub fn is_empty(&self) -> bool {
        self.department.is_empty()
            && self.rank.is_empty()
            && self.name.is_empty()
            && self.birthdate.is_empty()
    }
}
