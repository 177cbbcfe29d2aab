use serde::{Deserialize, Serialize};

/// The administrator account shown on the dashboard header. Edits live only
/// for the process lifetime; there is no backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl AdminProfile {
    pub fn standard() -> Self {
        Self {
            name: "Emily Johnson".to_string(),
            email: "johnson@pmscheme.gov.in".to_string(),
            role: "Administrator".to_string(),
            department: "Ministry of Corporate Affairs".to_string(),
        }
    }

    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
    }
}

/// Fields editable through the profile dialog. Department is fixed by the
/// programme and stays read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
