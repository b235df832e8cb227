//! Links between pages and display formatting of user data.

use std::fmt;

use api::{Address, User};
use url::form_urlencoded;

/// Query of the posts page: which user's posts to show, plus the name and email
/// shown in the header so the page does not need to load the user again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostsQuery {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

impl PostsQuery {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: Some(user.id.clone()),
            user_name: Some(user.name.clone()),
            user_email: Some(user.email.clone()),
        }
    }

    /// The selected user id, if one was given and is not blank.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

impl From<&str> for PostsQuery {
    fn from(query: &str) -> Self {
        let mut parsed = PostsQuery::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "userId" => parsed.user_id = value,
                "userName" => parsed.user_name = value,
                "userEmail" => parsed.user_email = value,
                _ => {}
            }
        }
        parsed
    }
}

impl fmt::Display for PostsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let pairs = [
            ("userId", &self.user_id),
            ("userName", &self.user_name),
            ("userEmail", &self.user_email),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        f.write_str(&serializer.finish())
    }
}

/// Link to the posts page of `user`.
pub fn posts_href(user: &User) -> String {
    format!("/posts?{}", PostsQuery::for_user(user))
}

/// `street, state, city, zipcode`, or "No address".
pub fn format_address(address: Option<&Address>) -> String {
    match address {
        Some(a) => format!("{}, {}, {}, {}", a.street, a.state, a.city, a.zipcode),
        None => "No address".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".into(),
            name: "Jane Doe".into(),
            username: "jane".into(),
            email: "Jane@Example.com".into(),
            phone: "555".into(),
            addresses: None,
        }
    }

    #[test]
    fn test_posts_href_encodes_values() {
        assert_eq!(
            posts_href(&user()),
            "/posts?userId=u-1&userName=Jane+Doe&userEmail=Jane%40Example.com"
        );
    }

    #[test]
    fn test_query_parses_back() {
        let query = PostsQuery::from("userId=u-1&userName=Jane+Doe&userEmail=Jane%40Example.com");
        assert_eq!(query, PostsQuery::for_user(&user()));

        let with_mark = PostsQuery::from("?userId=u-2&other=1");
        assert_eq!(with_mark.user_id(), Some("u-2"));
        assert_eq!(with_mark.user_name, None);
    }

    #[test]
    fn test_blank_user_id_means_no_user() {
        assert_eq!(PostsQuery::from("").user_id(), None);
        assert_eq!(PostsQuery::from("userId=").user_id(), None);
        assert_eq!(PostsQuery::default().to_string(), "");
    }

    #[test]
    fn test_format_address() {
        let address = Address {
            id: "a1".into(),
            user_id: "u-1".into(),
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zipcode: "62701".into(),
        };
        assert_eq!(
            format_address(Some(&address)),
            "1 Main St, IL, Springfield, 62701"
        );
        assert_eq!(format_address(None), "No address");
    }
}
