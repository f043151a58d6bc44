use serde::{Deserialize, Serialize};

/// A tip container installed at one of the employer's properties
/// (QR stand, counter box, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: i64,
    pub name: String,
    /// Property the container is installed at.
    #[serde(default)]
    pub property: Option<String>,
    pub active: bool,
}

/// Technician account that services containers on site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_deserialization() {
        let json = r#"{ "id": 9, "name": "Lobby stand", "active": true }"#;
        let container: Container = serde_json::from_str(json).unwrap();

        assert_eq!(container.id, 9);
        assert_eq!(container.name, "Lobby stand");
        assert!(container.property.is_none());
        assert!(container.active);
    }

    #[test]
    fn test_tech_user_equality() {
        let user1 = TechUser {
            id: 1,
            name: "Sam".to_string(),
            email: None,
        };
        let user2 = user1.clone();

        assert_eq!(user1, user2);
    }
}
