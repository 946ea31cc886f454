use chrono::Utc;
use tokio_postgres::Row;
use crate::{
    db::Store,
    error::{AppError, Result},
    models::yoga_session::{ClassSession, SessionFields},
};

/// Sessions joined with their participant ids.
const SELECT_WITH_USERS: &str = r#"
    SELECT s.id, s.name, s.description, s.date, s.teacher_id, s.created_at, s.updated_at,
           COALESCE(array_agg(p.user_id) FILTER (WHERE p.user_id IS NOT NULL), '{}'::BIGINT[]) AS users
    FROM sessions s
    LEFT JOIN participate p ON p.session_id = s.id
"#;

fn row_to_session(row: &Row) -> Result<ClassSession> {
    let users: Vec<i64> = row.try_get("users").map_err(|_| AppError::MissingData("users".to_string()))?;
    Ok(ClassSession {
        id: row.try_get("id").map_err(|_| AppError::MissingData("id".to_string()))?,
        name: row.try_get("name").map_err(|_| AppError::MissingData("name".to_string()))?,
        description: row.try_get("description").map_err(|_| AppError::MissingData("description".to_string()))?,
        date: row.try_get("date").map_err(|_| AppError::MissingData("date".to_string()))?,
        teacher_id: row.try_get("teacher_id").map_err(|_| AppError::MissingData("teacher_id".to_string()))?,
        users: users.into_iter().collect(),
        created_at: row.try_get("created_at").map_err(|_| AppError::MissingData("created_at".to_string()))?,
        updated_at: row.try_get("updated_at").map_err(|_| AppError::MissingData("updated_at".to_string()))?,
    })
}

/// Lists every session with its participants, ordered by id.
pub async fn list(store: &Store) -> Result<Vec<ClassSession>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let query = format!("{SELECT_WITH_USERS} GROUP BY s.id ORDER BY s.id ASC");
            let rows = client.query(query.as_str(), &[]).await?;
            rows.iter().map(row_to_session).collect()
        }
        Store::Memory(db) => Ok(db.read().await.sessions.values().cloned().collect()),
    }
}

/// Finds a session with its participants.
pub async fn find_by_id(store: &Store, session_id: i64) -> Result<Option<ClassSession>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let query = format!("{SELECT_WITH_USERS} WHERE s.id = $1 GROUP BY s.id");
            let row = client.query_opt(query.as_str(), &[&session_id]).await?;
            row.map(|r| row_to_session(&r)).transpose()
        }
        Store::Memory(db) => Ok(db.read().await.sessions.get(&session_id).cloned()),
    }
}

/// Inserts a session with no participants.
pub async fn create(store: &Store, fields: &SessionFields) -> Result<ClassSession> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let row = client
                .query_one(
                    r#"
                    INSERT INTO sessions (name, description, date, teacher_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                    &[&fields.name, &fields.description, &fields.date, &fields.teacher_id],
                )
                .await?;
            let id: i64 = row.try_get("id").map_err(|_| AppError::MissingData("id".to_string()))?;
            find_by_id(store, id).await?.ok_or(AppError::NotFound)
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            let now = Utc::now();
            let session = ClassSession {
                id: db.next_id("sessions"),
                name: fields.name.clone(),
                description: fields.description.clone(),
                date: fields.date,
                teacher_id: fields.teacher_id,
                users: Default::default(),
                created_at: now,
                updated_at: now,
            };
            db.sessions.insert(session.id, session.clone());
            Ok(session)
        }
    }
}

/// Replaces a session's fields, keeping its participants. `None` when it does not exist.
pub async fn update(store: &Store, session_id: i64, fields: &SessionFields) -> Result<Option<ClassSession>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let updated = client
                .execute(
                    r#"
                    UPDATE sessions
                    SET name = $1, description = $2, date = $3, teacher_id = $4, updated_at = NOW()
                    WHERE id = $5
                    "#,
                    &[&fields.name, &fields.description, &fields.date, &fields.teacher_id, &session_id],
                )
                .await?;
            if updated == 0 {
                return Ok(None);
            }
            find_by_id(store, session_id).await
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            Ok(db.sessions.get_mut(&session_id).map(|session| {
                session.name = fields.name.clone();
                session.description = fields.description.clone();
                session.date = fields.date;
                session.teacher_id = fields.teacher_id;
                session.updated_at = Utc::now();
                session.clone()
            }))
        }
    }
}

/// Deletes a session. Returns whether a row was removed.
pub async fn delete(store: &Store, session_id: i64) -> Result<bool> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let deleted = client
                .execute("DELETE FROM sessions WHERE id = $1", &[&session_id])
                .await?;
            Ok(deleted > 0)
        }
        Store::Memory(db) => Ok(db.write().await.sessions.remove(&session_id).is_some()),
    }
}

/// Records `user_id` as a participant of `session_id`.
pub async fn add_participant(store: &Store, session_id: i64, user_id: i64) -> Result<()> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            client
                .execute(
                    "INSERT INTO participate (user_id, session_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
                    &[&user_id, &session_id],
                )
                .await?;
            Ok(())
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            let session = db.sessions.get_mut(&session_id).ok_or(AppError::NotFound)?;
            session.users.insert(user_id);
            Ok(())
        }
    }
}

/// Removes `user_id` from the participants of `session_id`.
pub async fn remove_participant(store: &Store, session_id: i64, user_id: i64) -> Result<()> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            client
                .execute(
                    "DELETE FROM participate WHERE user_id = $1 AND session_id = $2",
                    &[&user_id, &session_id],
                )
                .await?;
            Ok(())
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            let session = db.sessions.get_mut(&session_id).ok_or(AppError::NotFound)?;
            session.users.remove(&user_id);
            Ok(())
        }
    }
}
