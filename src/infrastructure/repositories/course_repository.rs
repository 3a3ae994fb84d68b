//! Course Repository Implementation
//!
//! SQLite implementation of the CourseRepository trait.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::{Course, CourseFilter, CourseRepository};
use crate::shared::error::AppError;

/// Database row representation matching the courses table schema.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            id: self.id,
            name: self.name,
        }
    }
}

/// SQLite course repository implementation.
#[derive(Clone)]
pub struct SqliteCourseRepository {
    pool: SqlitePool,
}

impl SqliteCourseRepository {
    /// Create a new SqliteCourseRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    /// Find a course by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name
            FROM courses
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_course()))
    }

    /// List courses matching the filter.
    ///
    /// Ordered by id, which equals insertion order for store-assigned ids.
    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT id, name FROM courses");

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
            .build_query_as::<CourseRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_course()).collect())
    }

    /// Insert a new course, letting the store assign the identifier.
    async fn create(&self, name: &str) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (name)
            VALUES (?1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_course())
    }

    /// Update an existing course.
    async fn update(&self, course: &Course) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses
            SET name = ?2
            WHERE id = ?1
            RETURNING id, name
            "#,
        )
        .bind(course.id)
        .bind(&course.name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course with id {} not found", course.id)))?;

        Ok(row.into_course())
    }

    /// Delete a course (hard delete).
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Course with id {} not found", id)));
        }

        Ok(())
    }

    /// Count stored courses.
    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
