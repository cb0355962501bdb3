//! Task handler operations that return formatted wrapper types for the Desk.

use jiff::{Timestamp, ToSpan, tz::TimeZone};

use super::Desk;
use crate::{
    display::{CreateResult, DeleteResult, Tasks, UpdateResult},
    error::{Result, ResultExt},
    models::Task,
    params::{CreateTask, Id, ListTasks, UpdateTaskStatus},
};

impl Desk {
    /// Handle creating a standalone task on the board.
    pub async fn create_task_result(&self, params: &CreateTask) -> Result<CreateResult<Task>> {
        let task = self.create_task(params).await?;
        Ok(CreateResult::new(task))
    }

    /// Handle showing a single task.
    pub async fn show_task(&self, params: &Id) -> Result<Option<Task>> {
        self.get_task(params).await
    }

    /// Handle listing the task board with optional filtering.
    ///
    /// The `today` flag narrows the board to tasks due between the start
    /// and end of the current day in the system timezone.
    pub async fn list_tasks_board(&self, params: &ListTasks) -> Result<Tasks> {
        let mut filter = params.validate()?;

        if params.today {
            let now = Timestamp::now().to_zoned(TimeZone::system());
            let start = now
                .start_of_day()
                .with_context("Failed to compute start of day")?;
            let end = start
                .checked_add(1.day())
                .with_context("Failed to compute end of day")?;
            filter.due_after = Some(start.timestamp());
            filter.due_before = Some(end.timestamp());
        }

        let tasks = self.list_tasks(filter).await?;
        Ok(Tasks(tasks))
    }

    /// Handle moving a task to a new board status with change tracking.
    pub async fn update_task_status_result(
        &self,
        params: &UpdateTaskStatus,
    ) -> Result<UpdateResult<Task>> {
        let task = self.update_task_status(params).await?;
        let changes = vec![format!("Changed status to {}", task.status)];
        Ok(UpdateResult::with_changes(task, changes))
    }

    /// Handle permanently deleting a task.
    ///
    /// Uses get-before-delete so the deleted task's details can be shown
    /// for confirmation. Returns `None` if the task doesn't exist.
    pub async fn delete_task_result(&self, params: &Id) -> Result<Option<DeleteResult<Task>>> {
        let Some(task) = self.get_task(params).await? else {
            return Ok(None);
        };

        self.delete_task(params).await?;
        Ok(Some(DeleteResult::new(task)))
    }

    /// Handle generating due recurring-task occurrences.
    ///
    /// Returns the freshly spawned occurrences for display; an empty
    /// collection means nothing was due.
    pub async fn generate_recurring_result(&self) -> Result<Tasks> {
        let spawned = self.generate_recurring_tasks().await?;
        Ok(Tasks(spawned))
    }
}
