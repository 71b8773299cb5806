use serde::{Deserialize, Serialize};

use crate::users::repo_types::User;

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Public shape of a user returned to the client.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_out_projects_persisted_fields() {
        let user = User {
            id: 7,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let out = UserOut::from(user);
        assert_eq!(out.id, 7);
        assert_eq!(out.name, "alice");
        assert_eq!(out.email, "alice@example.com");
    }

    #[test]
    fn user_out_serializes_all_fields() {
        let out = UserOut {
            id: 1,
            name: "bob".to_string(),
            email: "bob@example.com".to_string(),
        };

        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("bob@example.com"));
        assert!(json.contains("name"));
    }

    #[test]
    fn sequence_projection_keeps_every_row() {
        let rows = vec![
            User {
                id: 1,
                name: "a".to_string(),
                email: "a@example.com".to_string(),
            },
            User {
                id: 2,
                name: "b".to_string(),
                email: "b@example.com".to_string(),
            },
        ];

        let out: Vec<UserOut> = rows.into_iter().map(UserOut::from).collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 1);
        assert_eq!(out[1].email, "b@example.com");
    }

    #[test]
    fn missing_email_is_rejected() {
        let result = serde_json::from_str::<UserCreate>(r#"{"name": "alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = serde_json::from_str::<UserCreate>(r#"{"email": "alice@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_string_name_is_rejected() {
        let result =
            serde_json::from_str::<UserCreate>(r#"{"name": 42, "email": "alice@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_emails_pass_schema_validation() {
        // Nothing constrains email uniqueness here or in the table; two
        // submissions with the same email become two rows.
        let first: UserCreate =
            serde_json::from_str(r#"{"name": "a", "email": "same@example.com"}"#).unwrap();
        let second: UserCreate =
            serde_json::from_str(r#"{"name": "b", "email": "same@example.com"}"#).unwrap();
        assert_eq!(first.email, second.email);
    }
}
