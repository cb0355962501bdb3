//! Lead CRUD operations, journey persistence, and pipeline metrics.

use std::collections::HashMap;

use jiff::Timestamp;
use rusqlite::{Connection, OptionalExtension, params};

use super::{invalid_column, parse_optional_timestamp, parse_timestamp_column};
use crate::{
    error::{DatabaseResultExt, DeskError, Result},
    journey,
    models::{
        JourneyStep, Lead, LeadFilter, LeadMetrics, LeadRating, LeadStatus, LeadSummary,
        StepIcon, StepStatus, TaskPriority, TaskStatus, UpdateLeadRequest,
    },
    params::CreateLead,
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_LEAD_SQL: &str = "INSERT INTO leads (first_name, last_name, email, phone, property_interest, status, rating, notes, score, formula, favorite, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const SELECT_LEAD_SQL: &str = "SELECT id, first_name, last_name, email, phone, property_interest, status, rating, notes, score, formula, favorite, created_at, updated_at, last_contact_at, next_follow_up FROM leads WHERE id = ?1";
const CHECK_LEAD_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM leads WHERE id = ?1)";
const DELETE_LEAD_SQL: &str = "DELETE FROM leads WHERE id = ?1";
const TOGGLE_FAVORITE_SQL: &str =
    "UPDATE leads SET favorite = 1 - favorite, updated_at = ?1 WHERE id = ?2";
const TOUCH_LEAD_SQL: &str = "UPDATE leads SET updated_at = ?1 WHERE id = ?2";

const INSERT_STEP_SQL: &str = "INSERT INTO journey_steps (lead_id, step_id, title, description, icon, status, completed_at, due_at, task_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_STEPS_SQL: &str = "SELECT step_id, title, description, icon, status, completed_at, due_at, task_id FROM journey_steps WHERE lead_id = ?1 ORDER BY step_id";
const UPDATE_STEP_SQL: &str = "UPDATE journey_steps SET status = ?1, completed_at = ?2, task_id = ?3 WHERE lead_id = ?4 AND step_id = ?5";

const LEAD_SUMMARY_COLUMNS: &str = "id, first_name, last_name, email, phone, property_interest, status, rating, score, favorite, created_at, updated_at, total_steps, completed_steps";
const LEAD_SUMMARIES_VIEW: &str = "lead_summaries";

fn lead_from_row(row: &rusqlite::Row) -> rusqlite::Result<Lead> {
    let status_str: String = row.get(6)?;
    let status = status_str
        .parse::<LeadStatus>()
        .map_err(|_| invalid_column(6, format!("Invalid lead status: {status_str}")))?;
    let rating_str: String = row.get(7)?;
    let rating = rating_str
        .parse::<LeadRating>()
        .map_err(|_| invalid_column(7, format!("Invalid lead rating: {rating_str}")))?;

    Ok(Lead {
        id: row.get::<_, i64>(0)? as u64,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        property_interest: row.get(5)?,
        status,
        rating,
        notes: row.get(8)?,
        score: row.get(9)?,
        formula: row.get(10)?,
        favorite: row.get::<_, i64>(11)? != 0,
        created_at: parse_timestamp_column(12, row.get(12)?)?,
        updated_at: parse_timestamp_column(13, row.get(13)?)?,
        last_contact_at: parse_optional_timestamp(14, row.get(14)?)?,
        next_follow_up: parse_optional_timestamp(15, row.get(15)?)?,
        journey: Vec::new(),
    })
}

fn step_from_row(row: &rusqlite::Row) -> rusqlite::Result<JourneyStep> {
    let icon_str: String = row.get(3)?;
    let icon = icon_str
        .parse::<StepIcon>()
        .map_err(|_| invalid_column(3, format!("Invalid step icon: {icon_str}")))?;
    let status_str: String = row.get(4)?;
    let status = status_str
        .parse::<StepStatus>()
        .map_err(|_| invalid_column(4, format!("Invalid step status: {status_str}")))?;

    Ok(JourneyStep {
        id: row.get::<_, i64>(0)? as u32,
        title: row.get(1)?,
        description: row.get(2)?,
        icon,
        status,
        completed_at: parse_optional_timestamp(5, row.get(5)?)?,
        due_at: parse_optional_timestamp(6, row.get(6)?)?,
        task_id: row.get::<_, Option<i64>>(7)?.map(|v| v as u64),
    })
}

fn summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<LeadSummary> {
    let status_str: String = row.get(6)?;
    let status = status_str
        .parse::<LeadStatus>()
        .map_err(|_| invalid_column(6, format!("Invalid lead status: {status_str}")))?;
    let rating_str: String = row.get(7)?;
    let rating = rating_str
        .parse::<LeadRating>()
        .map_err(|_| invalid_column(7, format!("Invalid lead rating: {rating_str}")))?;

    Ok(LeadSummary {
        id: row.get::<_, i64>(0)? as u64,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        property_interest: row.get(5)?,
        status,
        rating,
        score: row.get(8)?,
        favorite: row.get::<_, i64>(9)? != 0,
        created_at: parse_timestamp_column(10, row.get(10)?)?,
        updated_at: parse_timestamp_column(11, row.get(11)?)?,
        total_steps: row.get::<_, i64>(12)? as u32,
        completed_steps: row.get::<_, i64>(13)? as u32,
    })
}

/// Loads the full journey for a lead, ordered by step id.
fn load_journey(conn: &Connection, lead_id: u64) -> Result<Vec<JourneyStep>> {
    let mut stmt = conn
        .prepare(SELECT_STEPS_SQL)
        .db_context("Failed to prepare journey query")?;

    let steps = stmt
        .query_map(params![lead_id as i64], step_from_row)
        .db_context("Failed to query journey steps")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch journey steps");
    steps
}

/// Inserts the mirrored board task for a freshly activated step.
///
/// Must run on the same transaction as the journey update so the two
/// commit together.
fn insert_step_task(
    conn: &Connection,
    lead_id: u64,
    property_interest: &str,
    full_name: &str,
    step: &JourneyStep,
    now: Timestamp,
) -> Result<u64> {
    let due = step.due_at.unwrap_or(now);
    conn.execute(
        super::task_queries::INSERT_TASK_SQL,
        params![
            lead_id as i64,
            property_interest,
            &step.title,
            format!("{} for {}", step.description, full_name),
            due.to_string(),
            TaskStatus::NotStarted.as_str(),
            TaskPriority::Normal.as_str(),
            now.to_string(),
            Option::<String>::None,
            Option::<i64>::None,
            Option::<i64>::None,
            Option::<String>::None,
            step.id as i64,
        ],
    )
    .db_context("Failed to insert mirrored task")?;

    Ok(conn.last_insert_rowid() as u64)
}

impl super::Database {
    /// Creates a new lead together with its materialized 6-step journey.
    ///
    /// Step 1 starts in progress and its mirrored board task is created in
    /// the same transaction; a failure anywhere rolls the whole creation
    /// back.
    pub fn create_lead(
        &mut self,
        params: &CreateLead,
        status: LeadStatus,
        rating: LeadRating,
    ) -> Result<Lead> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let property_interest = params.property_interest.clone().unwrap_or_default();
        let notes = params.notes.clone().unwrap_or_default();
        let score = params.score.unwrap_or(0.0);
        let formula = params.formula.clone().unwrap_or_default();

        tx.execute(
            INSERT_LEAD_SQL,
            params![
                &params.first_name,
                &params.last_name,
                &params.email,
                &params.phone,
                &property_interest,
                status.as_str(),
                rating.as_str(),
                &notes,
                score,
                &formula,
                0i64,
                &now_str,
                &now_str,
            ],
        )
        .db_context("Failed to insert lead")?;

        let id = tx.last_insert_rowid() as u64;
        let full_name = format!("{} {}", params.first_name, params.last_name);

        let mut journey = journey::initialize_journey(now);
        for step in &journey {
            tx.execute(
                INSERT_STEP_SQL,
                params![
                    id as i64,
                    step.id as i64,
                    &step.title,
                    &step.description,
                    step.icon.as_str(),
                    step.status.as_str(),
                    step.completed_at.map(|t| t.to_string()),
                    step.due_at.map(|t| t.to_string()),
                    step.task_id.map(|v| v as i64),
                ],
            )
            .db_context("Failed to insert journey step")?;
        }

        // Mirror the pre-activated first step onto the task board
        let task_id = insert_step_task(&tx, id, &property_interest, &full_name, &journey[0], now)?;
        tx.execute(
            UPDATE_STEP_SQL,
            params![
                journey[0].status.as_str(),
                Option::<String>::None,
                task_id as i64,
                id as i64,
                1i64
            ],
        )
        .db_context("Failed to link first step task")?;
        journey[0].task_id = Some(task_id);

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Lead {
            id,
            first_name: params.first_name.clone(),
            last_name: params.last_name.clone(),
            email: params.email.clone(),
            phone: params.phone.clone(),
            property_interest,
            status,
            rating,
            notes,
            score,
            formula,
            favorite: false,
            created_at: now,
            updated_at: now,
            last_contact_at: None,
            next_follow_up: None,
            journey,
        })
    }

    /// Retrieves a lead by its ID with the journey eagerly loaded.
    pub fn get_lead(&self, id: u64) -> Result<Option<Lead>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LEAD_SQL)
            .db_context("Failed to prepare query")?;

        let mut lead = stmt
            .query_row(params![id as i64], lead_from_row)
            .optional()
            .db_context("Failed to query lead")?;

        if let Some(ref mut lead) = lead {
            lead.journey = load_journey(&self.connection, lead.id)?;
        }

        Ok(lead)
    }

    /// Lists lead summaries with optional filtering.
    pub fn list_lead_summaries(&self, filter: &LeadFilter) -> Result<Vec<LeadSummary>> {
        let mut query = format!("SELECT {LEAD_SUMMARY_COLUMNS} FROM {LEAD_SUMMARIES_VIEW}");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref name) = filter.name_contains {
            conditions.push("(first_name LIKE ? OR last_name LIKE ?)");
            params_vec.push(Box::new(format!("%{name}%")));
            params_vec.push(Box::new(format!("%{name}%")));
        }

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }

        if let Some(rating) = filter.rating {
            conditions.push("rating = ?");
            params_vec.push(Box::new(rating.as_str().to_string()));
        }

        if filter.favorites_only {
            conditions.push("favorite = 1");
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let leads = stmt
            .query_map(&params_refs[..], summary_from_row)
            .db_context("Failed to query leads")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch leads");
        leads
    }

    /// Applies a validated partial update to a lead's profile fields.
    ///
    /// Always bumps `updated_at`. The journey is untouched; it only moves
    /// through `complete_step`.
    pub fn update_lead(&mut self, id: u64, request: &UpdateLeadRequest) -> Result<Lead> {
        let now = Timestamp::now();

        let mut sets = vec!["updated_at = ?"];
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(now.to_string())];

        if let Some(ref v) = request.first_name {
            sets.push("first_name = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(ref v) = request.last_name {
            sets.push("last_name = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(ref v) = request.email {
            sets.push("email = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(ref v) = request.phone {
            sets.push("phone = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(ref v) = request.property_interest {
            sets.push("property_interest = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(ref v) = request.notes {
            sets.push("notes = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(v) = request.score {
            sets.push("score = ?");
            params_vec.push(Box::new(v));
        }
        if let Some(ref v) = request.formula {
            sets.push("formula = ?");
            params_vec.push(Box::new(v.clone()));
        }
        if let Some(v) = request.status {
            sets.push("status = ?");
            params_vec.push(Box::new(v.as_str().to_string()));
        }
        if let Some(v) = request.rating {
            sets.push("rating = ?");
            params_vec.push(Box::new(v.as_str().to_string()));
        }
        if let Some(v) = request.last_contact_at {
            sets.push("last_contact_at = ?");
            params_vec.push(Box::new(v.to_string()));
        }
        if let Some(v) = request.next_follow_up {
            sets.push("next_follow_up = ?");
            params_vec.push(Box::new(v.to_string()));
        }

        params_vec.push(Box::new(id as i64));
        let query = format!("UPDATE leads SET {} WHERE id = ?", sets.join(", "));

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();
        let rows_affected = self
            .connection
            .execute(&query, &params_refs[..])
            .db_context("Failed to update lead")?;

        if rows_affected == 0 {
            return Err(DeskError::LeadNotFound { id });
        }

        self.get_lead(id)?.ok_or(DeskError::LeadNotFound { id })
    }

    /// Flips the favorite flag on a lead and returns the updated lead.
    pub fn toggle_favorite(&mut self, id: u64) -> Result<Lead> {
        let now = Timestamp::now().to_string();
        let rows_affected = self
            .connection
            .execute(TOGGLE_FAVORITE_SQL, params![&now, id as i64])
            .db_context("Failed to toggle favorite")?;

        if rows_affected == 0 {
            return Err(DeskError::LeadNotFound { id });
        }

        self.get_lead(id)?.ok_or(DeskError::LeadNotFound { id })
    }

    /// Completes a journey step and activates its successor atomically.
    ///
    /// The step transition, the mirrored task for the newly active step,
    /// and the lead's `updated_at` bump all ride the same transaction; on
    /// any error nothing is committed and the stored journey is unchanged.
    pub fn complete_step(&mut self, lead_id: u64, step_id: u32) -> Result<Lead> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        let mut lead = tx
            .query_row(SELECT_LEAD_SQL, params![lead_id as i64], lead_from_row)
            .optional()
            .db_context("Failed to query lead")?
            .ok_or(DeskError::LeadNotFound { id: lead_id })?;

        let journey = load_journey(&tx, lead_id)?;
        let full_name = lead.full_name();

        let next = journey::complete_step(&journey, step_id, now, |successor| {
            insert_step_task(&tx, lead_id, &lead.property_interest, &full_name, successor, now)
        })?;

        for step in &next {
            tx.execute(
                UPDATE_STEP_SQL,
                params![
                    step.status.as_str(),
                    step.completed_at.map(|t| t.to_string()),
                    step.task_id.map(|v| v as i64),
                    lead_id as i64,
                    step.id as i64,
                ],
            )
            .db_context("Failed to update journey step")?;
        }

        tx.execute(TOUCH_LEAD_SQL, params![now.to_string(), lead_id as i64])
            .db_context("Failed to touch lead")?;

        tx.commit().db_context("Failed to commit transaction")?;

        lead.updated_at = now;
        lead.journey = next;
        Ok(lead)
    }

    /// Permanently deletes a lead.
    ///
    /// The journey rows cascade away with it; board tasks that reference
    /// the lead survive as historical records with their lead reference
    /// cleared. This operation cannot be undone.
    pub fn delete_lead(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_LEAD_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check lead existence")?;

        if !exists {
            return Err(DeskError::LeadNotFound { id });
        }

        tx.execute(DELETE_LEAD_SQL, params![id as i64])
            .db_context("Failed to delete lead")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Computes aggregate pipeline metrics across all leads.
    pub fn lead_metrics(&self) -> Result<LeadMetrics> {
        let (total, average_score): (i64, f64) = self
            .connection
            .query_row(
                "SELECT COUNT(*), COALESCE(AVG(score), 0) FROM leads",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .db_context("Failed to query lead totals")?;

        let status_counts = self.count_by_column("status")?;
        let rating_counts = self.count_by_column("rating")?;

        let status_distribution: Vec<(LeadStatus, u32)> = LeadStatus::ALL
            .iter()
            .map(|s| (*s, status_counts.get(s.as_str()).copied().unwrap_or(0)))
            .collect();
        let rating_distribution: Vec<(LeadRating, u32)> = LeadRating::ALL
            .iter()
            .map(|r| (*r, rating_counts.get(r.as_str()).copied().unwrap_or(0)))
            .collect();

        let closed_leads = status_counts
            .get(LeadStatus::Closed.as_str())
            .copied()
            .unwrap_or(0);
        let conversion_rate = if total > 0 {
            f64::from(closed_leads) / total as f64 * 100.0
        } else {
            0.0
        };

        Ok(LeadMetrics {
            total: total as u32,
            new_leads: status_counts
                .get(LeadStatus::New.as_str())
                .copied()
                .unwrap_or(0),
            qualified_leads: status_counts
                .get(LeadStatus::Qualified.as_str())
                .copied()
                .unwrap_or(0),
            closed_leads,
            conversion_rate,
            average_score,
            status_distribution,
            rating_distribution,
        })
    }

    /// Counts leads grouped by a text column holding enum values.
    fn count_by_column(&self, column: &str) -> Result<HashMap<String, u32>> {
        let query = format!("SELECT {column}, COUNT(*) FROM leads GROUP BY {column}");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare metrics query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u32))
            })
            .db_context("Failed to query metrics")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch metrics")?;

        Ok(rows.into_iter().collect())
    }
}
