use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "token")]
    pub access_token: String,
    #[serde(alias = "adminInfo")]
    pub admin: AdminInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    #[serde(alias = "superadmin", alias = "super-admin")]
    SuperAdmin,
    Admin,
    Staff,
}

/// Signed-in administrator as returned by the login and `me` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: crate::shared::EntityId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: AdminRole,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl AdminInfo {
    /// Super admins bypass the permission list.
    pub fn can(&self, permission: &str) -> bool {
        self.role == AdminRole::SuperAdmin || self.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(role: AdminRole, permissions: &[&str]) -> AdminInfo {
        AdminInfo {
            id: "1".into(),
            name: "Ops".to_string(),
            email: None,
            role,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn super_admin_can_everything() {
        assert!(admin(AdminRole::SuperAdmin, &[]).can("banners"));
    }

    #[test]
    fn staff_limited_to_granted_permissions() {
        let a = admin(AdminRole::Staff, &["packages"]);
        assert!(a.can("packages"));
        assert!(!a.can("payments"));
    }

    #[test]
    fn reads_login_response_with_admin_info_key() {
        let r: LoginResponse = serde_json::from_str(
            r#"{"token":"t","adminInfo":{"id":3,"name":"A","role":"superadmin"}}"#,
        )
        .unwrap();
        assert_eq!(r.access_token, "t");
        assert_eq!(r.admin.role, AdminRole::SuperAdmin);
    }
}
