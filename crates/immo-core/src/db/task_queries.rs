//! Task board CRUD operations and recurring-task generation.

use jiff::{Span, Timestamp, ToSpan, tz::TimeZone};
use rusqlite::{OptionalExtension, params};

use super::{invalid_column, parse_optional_timestamp, parse_timestamp_column};
use crate::{
    error::{DatabaseResultExt, DeskError, Result, ResultExt},
    models::{RecurrenceKind, RecurrenceRule, Task, TaskFilter, TaskPriority, TaskStatus},
    params::CreateTask,
};

// Shared with the lead queries: journey step completion mirrors a task
// onto the board inside the lead transaction.
pub(super) const INSERT_TASK_SQL: &str = "INSERT INTO tasks (lead_id, property_interest, title, description, due_at, status, priority, created_at, recurrence, recur_every_months, recur_day_of_week, last_generated, journey_step_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";

const TASK_COLUMNS: &str = "id, lead_id, property_interest, title, description, due_at, status, priority, created_at, recurrence, recur_every_months, recur_day_of_week, last_generated, journey_step_id";
const SELECT_TASK_SQL: &str = "SELECT id, lead_id, property_interest, title, description, due_at, status, priority, created_at, recurrence, recur_every_months, recur_day_of_week, last_generated, journey_step_id FROM tasks WHERE id = ?1";
const UPDATE_TASK_STATUS_SQL: &str = "UPDATE tasks SET status = ?1 WHERE id = ?2";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const STAMP_LAST_GENERATED_SQL: &str = "UPDATE tasks SET last_generated = ?1 WHERE id = ?2";
const CHECK_LEAD_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM leads WHERE id = ?1)";

fn task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    let status_str: String = row.get(6)?;
    let status = status_str
        .parse::<TaskStatus>()
        .map_err(|_| invalid_column(6, format!("Invalid task status: {status_str}")))?;
    let priority_str: String = row.get(7)?;
    let priority = priority_str
        .parse::<TaskPriority>()
        .map_err(|_| invalid_column(7, format!("Invalid task priority: {priority_str}")))?;

    let recurrence = match row.get::<_, Option<String>>(9)? {
        Some(kind_str) => {
            let kind = kind_str
                .parse::<RecurrenceKind>()
                .map_err(|_| invalid_column(9, format!("Invalid recurrence kind: {kind_str}")))?;
            Some(RecurrenceRule {
                kind,
                every: row.get::<_, Option<i64>>(10)?.unwrap_or(1) as u32,
                day_of_week: row.get::<_, Option<i64>>(11)?.map(|v| v as u8),
            })
        }
        None => None,
    };

    Ok(Task {
        id: row.get::<_, i64>(0)? as u64,
        lead_id: row.get::<_, Option<i64>>(1)?.map(|v| v as u64),
        property_interest: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        due_at: parse_timestamp_column(5, row.get(5)?)?,
        status,
        priority,
        created_at: parse_timestamp_column(8, row.get(8)?)?,
        recurrence,
        last_generated: parse_optional_timestamp(12, row.get(12)?)?,
        journey_step_id: row.get::<_, Option<i64>>(13)?.map(|v| v as u32),
    })
}

/// Shifts a due date forward by a number of months, using civil month
/// arithmetic in UTC.
fn add_months(ts: Timestamp, months: u32) -> Result<Timestamp> {
    let zoned = ts.to_zoned(TimeZone::UTC);
    let shifted = zoned
        .checked_add(Span::new().months(i64::from(months)))
        .with_context("Failed to shift due date by months")?;
    Ok(shifted.timestamp())
}

/// Rolls a due date forward to the next matching day of week (0 = Sunday).
fn align_day_of_week(ts: Timestamp, day_of_week: u8) -> Result<Timestamp> {
    let mut zoned = ts.to_zoned(TimeZone::UTC);
    for _ in 0..7 {
        if zoned.weekday().to_sunday_zero_offset() == day_of_week as i8 {
            break;
        }
        zoned = zoned
            .checked_add(1.day())
            .with_context("Failed to align recurrence day of week")?;
    }
    Ok(zoned.timestamp())
}

impl super::Database {
    /// Creates a standalone task on the board.
    ///
    /// When no due date is given the task defaults to 24 hours out. A
    /// `lead_id`, if present, must name an existing lead.
    pub fn create_task(
        &mut self,
        params: &CreateTask,
        due_at: Option<Timestamp>,
        priority: TaskPriority,
        recurrence: Option<RecurrenceRule>,
    ) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let due = due_at.unwrap_or_else(|| {
            now.saturating_add(24.hours())
                .expect("adding hours to a timestamp cannot fail")
        });
        let description = params.description.clone().unwrap_or_default();
        let property_interest = params.property_interest.clone().unwrap_or_default();

        if let Some(lead_id) = params.lead_id {
            let exists: bool = tx
                .query_row(CHECK_LEAD_EXISTS_SQL, params![lead_id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to check lead existence")?;
            if !exists {
                return Err(DeskError::LeadNotFound { id: lead_id });
            }
        }

        tx.execute(
            INSERT_TASK_SQL,
            params![
                params.lead_id.map(|v| v as i64),
                &property_interest,
                &params.title,
                &description,
                due.to_string(),
                TaskStatus::NotStarted.as_str(),
                priority.as_str(),
                now.to_string(),
                recurrence.map(|r| r.kind.as_str().to_string()),
                recurrence.map(|r| i64::from(r.every)),
                recurrence.and_then(|r| r.day_of_week).map(i64::from),
                Option::<String>::None,
                Option::<i64>::None,
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            lead_id: params.lead_id,
            property_interest,
            title: params.title.clone(),
            description,
            due_at: due,
            status: TaskStatus::NotStarted,
            priority,
            created_at: now,
            recurrence,
            last_generated: None,
            journey_step_id: None,
        })
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], task_from_row)
            .optional()
            .db_context("Failed to query task")
    }

    /// Lists tasks with optional filtering, ordered by due date.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = format!("SELECT {TASK_COLUMNS} FROM tasks");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }

        if let Some(priority) = filter.priority {
            conditions.push("priority = ?");
            params_vec.push(Box::new(priority.as_str().to_string()));
        }

        if let Some(after) = filter.due_after {
            conditions.push("due_at >= ?");
            params_vec.push(Box::new(after.to_string()));
        }

        if let Some(before) = filter.due_before {
            conditions.push("due_at <= ?");
            params_vec.push(Box::new(before.to_string()));
        }

        if filter.journey_only {
            conditions.push("journey_step_id IS NOT NULL");
        }

        if let Some(lead_id) = filter.lead_id {
            conditions.push("lead_id = ?");
            params_vec.push(Box::new(lead_id as i64));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY due_at ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks");
        tasks
    }

    /// Moves a task to a new board status and returns the updated task.
    ///
    /// Any status can follow any other; the board permits arbitrary moves
    /// and never advances the journey in return.
    pub fn update_task_status(&mut self, id: u64, status: TaskStatus) -> Result<Task> {
        let rows_affected = self
            .connection
            .execute(UPDATE_TASK_STATUS_SQL, params![status.as_str(), id as i64])
            .db_context("Failed to update task status")?;

        if rows_affected == 0 {
            return Err(DeskError::TaskNotFound { id });
        }

        self.get_task(id)?.ok_or(DeskError::TaskNotFound { id })
    }

    /// Permanently deletes a task. This operation cannot be undone.
    pub fn delete_task(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task")?;

        if rows_affected == 0 {
            return Err(DeskError::TaskNotFound { id });
        }

        Ok(())
    }

    /// Spawns the next occurrence of every recurring task that has come
    /// due.
    ///
    /// For each task with a monthly rule, the next occurrence is due
    /// `every` months after the last generated occurrence (or the original
    /// due date), rolled forward to the preferred day of week when one is
    /// set. Occurrences still in the future are skipped. The source task
    /// is stamped with `last_generated` in the same transaction, so a
    /// repeated invocation never duplicates an occurrence.
    pub fn generate_recurring_tasks(&mut self, now: Timestamp) -> Result<Vec<Task>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let recurring: Vec<Task> = {
            let mut stmt = tx
                .prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks WHERE recurrence IS NOT NULL"
                ))
                .db_context("Failed to prepare recurring query")?;
            let tasks = stmt
                .query_map([], task_from_row)
                .db_context("Failed to query recurring tasks")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch recurring tasks")?;
            tasks
        };

        let mut spawned = Vec::new();

        for task in recurring {
            let Some(rule) = task.recurrence else {
                continue;
            };

            let base = task.last_generated.unwrap_or(task.due_at);
            let mut next_due = add_months(base, rule.every)?;
            if let Some(dow) = rule.day_of_week {
                next_due = align_day_of_week(next_due, dow)?;
            }

            if next_due > now {
                continue;
            }

            // The occurrence does not recur itself; the source task keeps
            // driving the schedule
            tx.execute(
                INSERT_TASK_SQL,
                params![
                    task.lead_id.map(|v| v as i64),
                    &task.property_interest,
                    &task.title,
                    &task.description,
                    next_due.to_string(),
                    TaskStatus::NotStarted.as_str(),
                    task.priority.as_str(),
                    now.to_string(),
                    Option::<String>::None,
                    Option::<i64>::None,
                    Option::<i64>::None,
                    Option::<String>::None,
                    Option::<i64>::None,
                ],
            )
            .db_context("Failed to insert recurring occurrence")?;

            let id = tx.last_insert_rowid() as u64;

            tx.execute(
                STAMP_LAST_GENERATED_SQL,
                params![next_due.to_string(), task.id as i64],
            )
            .db_context("Failed to stamp last generated")?;

            spawned.push(Task {
                id,
                lead_id: task.lead_id,
                property_interest: task.property_interest.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                due_at: next_due,
                status: TaskStatus::NotStarted,
                priority: task.priority,
                created_at: now,
                recurrence: None,
                last_generated: None,
                journey_step_id: None,
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(spawned)
    }
}
