use serde::{Deserialize, Serialize};

/// A user record as served by the users endpoint.
///
/// Extra fields in the payload (address, company, website) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl User {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_and_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(
            user,
            User::new(
                1,
                "Leanne Graham",
                "Bret",
                "Sincere@april.biz",
                "1-770-736-8031 x56442"
            )
        );
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{ "id": 1, "name": "Leanne Graham" }"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
