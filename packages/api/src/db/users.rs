//! User and address queries.
//!
//! Page numbers are 0-based here: page `n` of size `s` skips `n * s` rows.

use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use crate::models::{Address, User};

const SELECT_USERS: &str = "
SELECT *
FROM users
ORDER BY name
LIMIT ? OFFSET ?";

const SELECT_COUNT_OF_USERS: &str = "
SELECT COUNT(*) AS count
FROM users";

const SELECT_USER_BY_ID: &str = "
SELECT *
FROM users
WHERE id = ?
LIMIT 1";

const SELECT_USERS_WITH_ADDRESSES: &str = "
SELECT
    u.id AS user_id,
    u.name,
    u.username,
    u.email,
    u.phone,
    a.id AS address_id,
    a.street,
    a.state,
    a.city,
    a.zipcode
FROM users u
LEFT JOIN addresses a ON u.id = a.user_id
ORDER BY u.name, a.id
LIMIT ? OFFSET ?";

const SELECT_ADDRESSES_BY_USER_ID: &str = "
SELECT *
FROM addresses
WHERE user_id = ?
ORDER BY id";

const INSERT_USER: &str = "
INSERT INTO users (id, name, username, email, phone)
VALUES (?, ?, ?, ?, ?)";

const INSERT_ADDRESS: &str = "
INSERT INTO addresses (id, user_id, street, city, state, zipcode)
VALUES (?, ?, ?, ?, ?, ?)";

/// A user to insert. The caller picks the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

/// One row of the users/addresses left join. Address columns are null for users
/// without any address.
#[derive(Debug, Clone, FromRow)]
pub struct UserAddressRow {
    pub user_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address_id: Option<String>,
    pub street: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
}

/// Saturates so that huge page numbers land past the last row.
fn offset(page_number: i64, page_size: i64) -> i64 {
    page_number.saturating_mul(page_size)
}

pub async fn list_users(
    pool: &SqlitePool,
    page_number: i64,
    page_size: i64,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(SELECT_USERS)
        .bind(page_size)
        .bind(offset(page_number, page_size))
        .fetch_all(pool)
        .await
}

/// Page through the joined rows and nest each address under its user.
///
/// The limit applies to joined rows, so a user with several addresses takes several
/// slots of the page.
pub async fn list_users_with_addresses(
    pool: &SqlitePool,
    page_number: i64,
    page_size: i64,
) -> Result<Vec<User>, sqlx::Error> {
    let rows: Vec<UserAddressRow> = sqlx::query_as(SELECT_USERS_WITH_ADDRESSES)
        .bind(page_size)
        .bind(offset(page_number, page_size))
        .fetch_all(pool)
        .await?;
    Ok(group_user_rows(rows))
}

/// Group joined rows by user id, keeping the order in which users first appear.
pub fn group_user_rows(rows: Vec<UserAddressRow>) -> Vec<User> {
    let mut users: Vec<User> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let index = match positions.get(&row.user_id) {
            Some(&index) => index,
            None => {
                positions.insert(row.user_id.clone(), users.len());
                users.push(User {
                    id: row.user_id.clone(),
                    name: row.name,
                    username: row.username,
                    email: row.email,
                    phone: row.phone,
                    addresses: Some(Vec::new()),
                });
                users.len() - 1
            }
        };

        if let Some(address_id) = row.address_id {
            users[index]
                .addresses
                .get_or_insert_with(Vec::new)
                .push(Address {
                    id: address_id,
                    user_id: row.user_id,
                    street: row.street.unwrap_or_default(),
                    city: row.city.unwrap_or_default(),
                    state: row.state.unwrap_or_default(),
                    zipcode: row.zipcode.unwrap_or_default(),
                });
        }
    }

    users
}

pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(SELECT_COUNT_OF_USERS)
        .fetch_one(pool)
        .await
}

pub async fn get_user_by_id(pool: &SqlitePool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(SELECT_USER_BY_ID)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_addresses_by_user_id(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Address>, sqlx::Error> {
    sqlx::query_as(SELECT_ADDRESSES_BY_USER_ID)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<(), sqlx::Error> {
    sqlx::query(INSERT_USER)
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn create_address(pool: &SqlitePool, address: &Address) -> Result<(), sqlx::Error> {
    sqlx::query(INSERT_ADDRESS)
        .bind(&address.id)
        .bind(&address.user_id)
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zipcode)
        .execute(pool)
        .await?;
    Ok(())
}

/// All fields filled in (ignoring surrounding whitespace) and an `@` in the email.
pub fn validate_user(user: &NewUser) -> bool {
    [&user.name, &user.username, &user.email, &user.phone]
        .iter()
        .all(|field| !field.trim().is_empty())
        && user.email.contains('@')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::{connect_in_memory, init_schema};

    pub(crate) fn new_user(id: &str, name: &str) -> NewUser {
        NewUser {
            id: id.into(),
            name: name.into(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".into(),
        }
    }

    pub(crate) fn address(id: &str, user_id: &str, street: &str) -> Address {
        Address {
            id: id.into(),
            user_id: user_id.into(),
            street: street.into(),
            city: "Gwenborough".into(),
            state: "CA".into(),
            zipcode: "92998".into(),
        }
    }

    /// Three users, Alice with two addresses, Bob with none, Carol with one.
    pub(crate) async fn seeded_pool() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        init_schema(&pool).await.unwrap();

        create_user(&pool, &new_user("u-carol", "Carol")).await.unwrap();
        create_user(&pool, &new_user("u-alice", "Alice")).await.unwrap();
        create_user(&pool, &new_user("u-bob", "Bob")).await.unwrap();

        create_address(&pool, &address("a1", "u-alice", "1 Main St")).await.unwrap();
        create_address(&pool, &address("a2", "u-alice", "2 Side St")).await.unwrap();
        create_address(&pool, &address("a3", "u-carol", "3 High St")).await.unwrap();

        pool
    }

    fn row(user_id: &str, address_id: Option<&str>) -> UserAddressRow {
        UserAddressRow {
            user_id: user_id.into(),
            name: user_id.to_uppercase(),
            username: user_id.into(),
            email: format!("{user_id}@example.com"),
            phone: "555".into(),
            address_id: address_id.map(Into::into),
            street: address_id.map(|_| "street".into()),
            state: address_id.map(|_| "state".into()),
            city: address_id.map(|_| "city".into()),
            zipcode: address_id.map(|_| "zip".into()),
        }
    }

    #[test]
    fn test_group_user_rows() {
        let users = group_user_rows(vec![
            row("a", Some("a1")),
            row("a", Some("a2")),
            row("b", None),
            row("c", Some("c1")),
        ]);

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].id, "a");
        let a_addresses = users[0].addresses.as_ref().unwrap();
        assert_eq!(a_addresses.len(), 2);
        assert_eq!(a_addresses[1].id, "a2");
        assert_eq!(a_addresses[1].user_id, "a");
        assert_eq!(users[1].addresses, Some(vec![]));
        assert_eq!(users[2].addresses.as_ref().unwrap()[0].street, "street");
    }

    #[test]
    fn test_group_user_rows_interleaved() {
        let users = group_user_rows(vec![
            row("a", Some("a1")),
            row("b", Some("b1")),
            row("a", Some("a2")),
        ]);

        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(users[0].addresses.as_ref().unwrap().len(), 2);
        assert_eq!(users[1].addresses.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_group_user_rows_empty() {
        assert!(group_user_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_validate_user() {
        assert!(validate_user(&new_user("u1", "Alice")));

        let mut user = new_user("u1", "Alice");
        user.email = "alice.example.com".into();
        assert!(!validate_user(&user));

        let mut user = new_user("u1", "Alice");
        user.phone = "   ".into();
        assert!(!validate_user(&user));
    }

    #[tokio::test]
    async fn test_list_users_is_ordered_and_paged() {
        let pool = seeded_pool().await;

        let first = list_users(&pool, 0, 2).await.unwrap();
        let names: Vec<_> = first.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(first.iter().all(|u| u.addresses.is_none()));

        let second = list_users(&pool, 1, 2).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "Carol");

        assert!(list_users(&pool, 5, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_huge_page_number_is_past_the_end() {
        let pool = seeded_pool().await;

        assert_eq!(offset(i64::MAX, 100), i64::MAX);
        assert!(list_users(&pool, i64::MAX, 100).await.unwrap().is_empty());
        assert!(list_users_with_addresses(&pool, i64::MAX, 100)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_list_users_with_addresses() {
        let pool = seeded_pool().await;

        let users = list_users_with_addresses(&pool, 0, 100).await.unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "Alice");
        let streets: Vec<_> = users[0]
            .addresses
            .as_ref()
            .unwrap()
            .iter()
            .map(|a| a.street.as_str())
            .collect();
        assert_eq!(streets, vec!["1 Main St", "2 Side St"]);
        assert_eq!(users[1].name, "Bob");
        assert_eq!(users[1].addresses, Some(vec![]));
        assert_eq!(users[2].addresses.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_joined_page_counts_rows_not_users() {
        let pool = seeded_pool().await;

        // Alice's two address rows fill the whole page.
        let users = list_users_with_addresses(&pool, 0, 2).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].addresses.as_ref().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_count_and_lookup() {
        let pool = seeded_pool().await;

        assert_eq!(count_users(&pool).await.unwrap(), 3);

        let bob = get_user_by_id(&pool, "u-bob").await.unwrap().unwrap();
        assert_eq!(bob.username, "bob");
        assert!(get_user_by_id(&pool, "missing").await.unwrap().is_none());

        let addresses = get_addresses_by_user_id(&pool, "u-alice").await.unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[0].id, "a1");
        assert!(get_addresses_by_user_id(&pool, "u-bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let pool = connect_in_memory().await.unwrap();
        // No tables yet.
        assert!(count_users(&pool).await.is_err());
    }
}
