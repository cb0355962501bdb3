//! Task board operations for the Desk.

use jiff::Timestamp;
use tokio::task;

use super::Desk;
use crate::{
    db::Database,
    error::{DeskError, Result},
    models::{Task, TaskFilter},
    params::{CreateTask, Id, UpdateTaskStatus},
};

impl Desk {
    /// Creates a standalone task on the board.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        let (due_at, priority, recurrence) = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_task(&params, due_at, priority, recurrence)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let db_path = self.db_path.clone();
        let task_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_task(task_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists tasks matching the filter, ordered by due date.
    pub async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_tasks(&filter)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Moves a task to a new board status.
    ///
    /// Any status may follow any other; the board never advances the
    /// journey in return.
    pub async fn update_task_status(&self, params: &UpdateTaskStatus) -> Result<Task> {
        let status = params.validate()?;
        let db_path = self.db_path.clone();
        let task_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_task_status(task_id, status)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a task. This operation cannot be undone.
    pub async fn delete_task(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let task_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_task(task_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Spawns the next occurrence of every recurring task that has come
    /// due, returning the freshly created occurrences.
    pub async fn generate_recurring_tasks(&self) -> Result<Vec<Task>> {
        let db_path = self.db_path.clone();
        let now = Timestamp::now();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.generate_recurring_tasks(now)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
