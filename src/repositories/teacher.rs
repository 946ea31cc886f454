use chrono::Utc;
use tokio_postgres::Row;
use crate::{
    db::Store,
    error::{AppError, Result},
    models::teacher::Teacher,
};

fn row_to_teacher(row: &Row) -> Result<Teacher> {
    Ok(Teacher {
        id: row.try_get("id").map_err(|_| AppError::MissingData("id".to_string()))?,
        first_name: row.try_get("first_name").map_err(|_| AppError::MissingData("first_name".to_string()))?,
        last_name: row.try_get("last_name").map_err(|_| AppError::MissingData("last_name".to_string()))?,
        created_at: row.try_get("created_at").map_err(|_| AppError::MissingData("created_at".to_string()))?,
        updated_at: row.try_get("updated_at").map_err(|_| AppError::MissingData("updated_at".to_string()))?,
    })
}

/// Lists every teacher, ordered by id.
pub async fn list(store: &Store) -> Result<Vec<Teacher>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let rows = client
                .query("SELECT * FROM teachers ORDER BY id ASC", &[])
                .await?;
            rows.iter().map(row_to_teacher).collect()
        }
        Store::Memory(db) => Ok(db.read().await.teachers.values().cloned().collect()),
    }
}

/// Finds a teacher by id.
pub async fn find_by_id(store: &Store, teacher_id: i64) -> Result<Option<Teacher>> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let row = client
                .query_opt("SELECT * FROM teachers WHERE id = $1", &[&teacher_id])
                .await?;
            row.map(|r| row_to_teacher(&r)).transpose()
        }
        Store::Memory(db) => Ok(db.read().await.teachers.get(&teacher_id).cloned()),
    }
}

/// Inserts a teacher. Only used for seeding; the API exposes teachers read-only.
pub async fn create(store: &Store, first_name: &str, last_name: &str) -> Result<Teacher> {
    match store {
        Store::Postgres(pool) => {
            let client = pool.get().await?;
            let row = client
                .query_one(
                    "INSERT INTO teachers (first_name, last_name) VALUES ($1, $2) RETURNING *",
                    &[&first_name, &last_name],
                )
                .await?;
            row_to_teacher(&row)
        }
        Store::Memory(db) => {
            let mut db = db.write().await;
            let now = Utc::now();
            let teacher = Teacher {
                id: db.next_id("teachers"),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                created_at: now,
                updated_at: now,
            };
            db.teachers.insert(teacher.id, teacher.clone());
            Ok(teacher)
        }
    }
}
