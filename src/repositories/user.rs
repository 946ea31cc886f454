use chrono::Utc;
use tokio_postgres::{Row, error::SqlState};
use crate::{
    db::Store,
    error::{AppError, Result},
    models::user::UserRecord,
};

/// A helper function to map a `tokio_postgres::Row` to a `UserRecord`.
fn row_to_user(row: &Row) -> Result<UserRecord> {
    Ok(UserRecord {
        id: row.try_get("id").map_err(|_| AppError::MissingData("id".to_string()))?,
        email: row.try_get("email").map_err(|_| AppError::MissingData("email".to_string()))?,
        first_name: row.try_get("first_name").map_err(|_| AppError::MissingData("first_name".to_string()))?,
        last_name: row.try_get("last_name").map_err(|_| AppError::MissingData("last_name".to_string()))?,
        password: row.try_get("password").map_err(|_| AppError::MissingData("password".to_string()))?,
        admin: row.try_get("admin").map_err(|_| AppError::MissingData("admin".to_string()))?,
        created_at: row.try_get("created_at").map_err(|_| AppError::MissingData("created_at".to_string()))?,
        updated_at: row.try_get("updated_at").map_err(|_| AppError::MissingData("updated_at".to_string()))?,
    })
}

/// Maps a unique-email violation to the same error as the pre-insert check.
fn insert_error(err: tokio_postgres::Error) -> AppError {
    if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
        AppError::email_taken()
    } else {
        AppError::Database(err)
    }
}

/// Inserts a new user.
///
/// Fails with `BadRequest` when the email is already registered, including
/// when a concurrent insert wins the race.
pub async fn create_user(
    store: &Store,
    email: &str,
    first_name: &str,
    last_name: &str,
    password_hash: &str,
    admin: bool,
) -> Result<UserRecord> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let row = client
                .query_one(
                    r#"
                    INSERT INTO users (email, first_name, last_name, password, admin)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                    &[&email, &first_name, &last_name, &password_hash, &admin],
                )
                .await
                .map_err(insert_error)?;
            row_to_user(&row)
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            if db.users.values().any(|user| user.email == email) {
                return Err(AppError::email_taken());
            }
            let now = Utc::now();
            let user = UserRecord {
                id: db.next_id("users"),
                email: email.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                password: password_hash.to_string(),
                admin,
                created_at: now,
                updated_at: now,
            };
            db.users.insert(user.id, user.clone());
            Ok(user)
        }
    }
}

/// Finds a user by their email address.
pub async fn find_by_email(store: &Store, email: &str) -> Result<Option<UserRecord>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let row = client
                .query_opt("SELECT * FROM users WHERE email = $1", &[&email])
                .await?;
            row.map(|r| row_to_user(&r)).transpose()
        }
        Store::Memory(db) => {
            let db = db.read().await;
            Ok(db.users.values().find(|user| user.email == email).cloned())
        }
    }
}

/// Finds a user by their ID.
pub async fn find_by_id(store: &Store, user_id: i64) -> Result<Option<UserRecord>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let row = client
                .query_opt("SELECT * FROM users WHERE id = $1", &[&user_id])
                .await?;
            row.map(|r| row_to_user(&r)).transpose()
        }
        Store::Memory(db) => {
            let db = db.read().await;
            Ok(db.users.get(&user_id).cloned())
        }
    }
}

/// Deletes a user and their participations. Returns whether a row was removed.
pub async fn delete_user(store: &Store, user_id: i64) -> Result<bool> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let deleted = client
                .execute("DELETE FROM users WHERE id = $1", &[&user_id])
                .await?;
            Ok(deleted > 0)
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            let removed = db.users.remove(&user_id).is_some();
            if removed {
                for session in db.sessions.values_mut() {
                    session.users.remove(&user_id);
                }
            }
            Ok(removed)
        }
    }
}
