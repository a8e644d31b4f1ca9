//! Department Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate};

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all departments ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Department>> {
        let departments: Vec<Department> = self
            .base
            .db()
            .query("SELECT * FROM department ORDER BY name")
            .await?
            .take(0)?;
        Ok(departments)
    }

    /// Find department by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Department>> {
        let thing = self.base.parse_id(id, "department")?;
        let dept: Option<Department> = self.base.db().select(thing).await?;
        Ok(dept)
    }

    /// Find department by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Department>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM department WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let departments: Vec<Department> = result.take(0)?;
        Ok(departments.into_iter().next())
    }

    /// Create a new department
    pub async fn create(&self, data: DepartmentCreate) -> RepoResult<Department> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Department '{}' already exists",
                data.name
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE department SET
                    name = $name,
                    description = $description
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("description", data.description))
            .await?;

        let created: Option<Department> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create department".to_string()))
    }

    /// Update a department
    pub async fn update(&self, id: &str, data: DepartmentUpdate) -> RepoResult<Department> {
        let thing = self.base.parse_id(id, "department")?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Department '{}' already exists",
                new_name
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    description = $description OR description
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("description", data.description))
            .await?;

        result
            .take::<Option<Department>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))
    }

    /// Hard delete a department
    ///
    /// Refused while job listings still reference it.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "department")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))?;

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS n FROM job WHERE department = $thing GROUP ALL")
            .bind(("thing", thing.clone()))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let in_use = counts
            .first()
            .and_then(|v| v["n"].as_u64())
            .unwrap_or(0)
            > 0;
        if in_use {
            return Err(RepoError::Validation(
                "Department still has job listings".to_string(),
            ));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
