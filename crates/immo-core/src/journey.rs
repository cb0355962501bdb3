//! The lead journey engine.
//!
//! Every lead carries a fixed 6-stage relationship journey, materialized
//! from [`JOURNEY_TEMPLATE`] when the lead is created. The journey obeys a
//! strict prefix-completion order: completed steps are always exactly
//! `{1..k}`, at most one step is in progress (step `k+1` while `k < 6`),
//! and everything after it is pending. Steps are never skipped, reordered,
//! or resized.
//!
//! The functions here are pure: they take the current journey plus a
//! timestamp and produce a fresh step vector, leaving the input untouched.
//! Task creation is injected as a capability so the transition can be
//! exercised with a fake in tests and composed with a database transaction
//! in production.

use jiff::{Timestamp, ToSpan};

use crate::{
    error::{DeskError, Result},
    models::{JourneyStep, StepIcon, StepStatus},
};

/// Number of steps in every journey.
pub const JOURNEY_LEN: u32 = 6;

/// Static template for one journey step.
#[derive(Debug, Clone, Copy)]
pub struct StepTemplate {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StepIcon,
}

/// The fixed business sequence every lead goes through, in order.
pub const JOURNEY_TEMPLATE: [StepTemplate; JOURNEY_LEN as usize] = [
    StepTemplate {
        id: 1,
        title: "First contact",
        description: "Initial contact by message",
        icon: StepIcon::MessageSquare,
    },
    StepTemplate {
        id: 2,
        title: "Phone contact",
        description: "Follow-up contact by phone",
        icon: StepIcon::Phone,
    },
    StepTemplate {
        id: 3,
        title: "In-person meeting",
        description: "Meet the prospect in person",
        icon: StepIcon::Users,
    },
    StepTemplate {
        id: 4,
        title: "Contract preparation",
        description: "Prepare and send the contract",
        icon: StepIcon::FileText,
    },
    StepTemplate {
        id: 5,
        title: "Photographer",
        description: "Schedule the photographer",
        icon: StepIcon::Camera,
    },
    StepTemplate {
        id: 6,
        title: "Client form",
        description: "Send the form to the client",
        icon: StepIcon::ClipboardCheck,
    },
];

/// Builds the initial journey for a lead created at `created_at`.
///
/// Step 1 starts `in_progress`, the rest `pending`. Each step is due
/// `id × 24h` after creation: a simple linear schedule, not calendar-aware
/// and not skipping weekends. The result is a pure function of
/// `created_at`, so two calls with the same timestamp produce structurally
/// identical journeys.
pub fn initialize_journey(created_at: Timestamp) -> Vec<JourneyStep> {
    JOURNEY_TEMPLATE
        .iter()
        .map(|template| JourneyStep {
            id: template.id,
            title: template.title.to_string(),
            description: template.description.to_string(),
            icon: template.icon,
            status: if template.id == 1 {
                StepStatus::InProgress
            } else {
                StepStatus::Pending
            },
            completed_at: None,
            due_at: Some(
                created_at
                    .saturating_add((24 * i64::from(template.id)).hours())
                    .expect("adding hours to a timestamp cannot fail"),
            ),
            task_id: None,
        })
        .collect()
}

/// Completes the step with `step_id` and activates its successor.
///
/// Returns a new journey vector; the input slice is never mutated, so a
/// failed transition is observable as no change at all.
///
/// When a successor step exists it transitions to `in_progress` and
/// `spawn_task` is invoked exactly once with it; the returned task id is
/// stored on the successor. Completing step 6 activates nothing and spawns
/// nothing — the journey stays terminal. The capability is only called
/// after validation passes.
///
/// # Errors
///
/// * `DeskError::StepNotFound` - `step_id` does not name a step of this
///   journey
/// * `DeskError::InvalidTransition` - the step is `pending` or already
///   `completed`; only the active step can be completed
pub fn complete_step<F>(
    journey: &[JourneyStep],
    step_id: u32,
    now: Timestamp,
    spawn_task: F,
) -> Result<Vec<JourneyStep>>
where
    F: FnOnce(&JourneyStep) -> Result<u64>,
{
    let index = journey
        .iter()
        .position(|step| step.id == step_id)
        .ok_or(DeskError::StepNotFound { step_id })?;

    if journey[index].status != StepStatus::InProgress {
        return Err(DeskError::InvalidTransition {
            step_id,
            status: journey[index].status,
        });
    }

    let mut next = journey.to_vec();
    next[index].status = StepStatus::Completed;
    next[index].completed_at = Some(now);

    if let Some(successor) = next.get_mut(index + 1) {
        successor.status = StepStatus::InProgress;
        let task_id = spawn_task(successor)?;
        successor.task_id = Some(task_id);
    }

    Ok(next)
}

/// Checks the prefix-completion invariant over a journey slice.
///
/// Used by tests and debug assertions: completed steps must be a prefix
/// `{1..k}`, at most one step in progress directly after it, the rest
/// pending.
pub fn is_well_formed(journey: &[JourneyStep]) -> bool {
    if journey.len() != JOURNEY_LEN as usize {
        return false;
    }

    let ids_dense = journey
        .iter()
        .enumerate()
        .all(|(i, step)| step.id == i as u32 + 1);
    if !ids_dense {
        return false;
    }

    let completed = journey
        .iter()
        .take_while(|step| step.status == StepStatus::Completed)
        .count();
    let active = journey
        .iter()
        .filter(|step| step.status == StepStatus::InProgress)
        .count();

    if active > 1 {
        return false;
    }

    journey.iter().enumerate().all(|(i, step)| {
        if i < completed {
            step.status == StepStatus::Completed
        } else if i == completed && active == 1 {
            step.status == StepStatus::InProgress
        } else {
            step.status == StepStatus::Pending
        }
    })
}
