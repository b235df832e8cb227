//! # User and address records
//!
//! [`User`] is the row from the `users` table. It derives [`sqlx::FromRow`] on the server
//! so it can be loaded directly from queries, and `Serialize + Deserialize` so the same
//! type is what the web client decodes.
//!
//! The `addresses` field is not a column. It is filled only by the joined listing
//! (`/users?includeAddresses=true`, `/users/with-addresses`) and omitted from the JSON
//! otherwise, so clients can tell "not loaded" apart from "has no addresses".
//!
//! [`Address`] belongs to exactly one user through `user_id`.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", sqlx(skip))]
    pub addresses: Option<Vec<Address>>,
}

impl User {
    /// First address on file, if addresses were loaded and there is one.
    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.as_ref().and_then(|addresses| addresses.first())
    }
}

/// A mailing address owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}

/// Response body of `GET /users/count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UsersCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(addresses: Option<Vec<Address>>) -> User {
        User {
            id: "u1".into(),
            name: "Leanne Graham".into(),
            username: "Bret".into(),
            email: "Sincere@april.biz".into(),
            phone: "1-770-736-8031".into(),
            addresses,
        }
    }

    #[test]
    fn test_addresses_omitted_when_not_loaded() {
        let json = serde_json::to_value(user(None)).unwrap();
        assert!(json.get("addresses").is_none());

        let json = serde_json::to_value(user(Some(vec![]))).unwrap();
        assert_eq!(json["addresses"], serde_json::json!([]));
    }

    #[test]
    fn test_primary_address() {
        assert!(user(None).primary_address().is_none());
        assert!(user(Some(vec![])).primary_address().is_none());

        let address = Address {
            id: "a1".into(),
            user_id: "u1".into(),
            street: "Kulas Light".into(),
            city: "Gwenborough".into(),
            state: "CA".into(),
            zipcode: "92998-3874".into(),
        };
        let u = user(Some(vec![address.clone()]));
        assert_eq!(u.primary_address(), Some(&address));
    }
}
