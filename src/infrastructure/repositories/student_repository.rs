//! Student Repository Implementation
//!
//! SQLite implementation of the StudentRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::{Student, StudentFilter, StudentRepository};
use crate::shared::error::AppError;

/// Database row representation matching the students table schema.
#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    birth_date: Option<NaiveDate>,
}

impl StudentRow {
    fn into_student(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
        }
    }
}

/// SQLite student repository implementation.
#[derive(Clone)]
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new SqliteStudentRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, birth_date
            FROM students
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_student()))
    }

    async fn find_all(&self, filter: &StudentFilter) -> Result<Vec<Student>, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, name, birth_date FROM students");

        let mut prefix = " WHERE ";
        if let Some(id) = filter.id {
            builder.push(prefix).push("id = ").push_bind(id);
            prefix = " AND ";
        }
        if let Some(name) = &filter.name {
            builder.push(prefix).push("name = ").push_bind(name.clone());
        }
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<StudentRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_student()).collect())
    }

    async fn create(&self, name: &str, birth_date: Option<NaiveDate>) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (name, birth_date)
            VALUES (?1, ?2)
            RETURNING id, name, birth_date
            "#,
        )
        .bind(name)
        .bind(birth_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_student())
    }

    async fn update(&self, student: &Student) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            UPDATE students
            SET name = ?2,
                birth_date = ?3
            WHERE id = ?1
            RETURNING id, name, birth_date
            "#,
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(student.birth_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", student.id)))?;

        Ok(row.into_student())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student with id {} not found", id)));
        }

        Ok(())
    }
}
