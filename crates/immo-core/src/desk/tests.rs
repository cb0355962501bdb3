//! Tests for the desk module.

use tempfile::TempDir;

use super::*;
use crate::{
    error::DeskError,
    models::{LeadRating, LeadStatus, StepStatus, TaskStatus},
    params::{CompleteStep, CreateLead, CreateTask, Id, ListLeads, ListTasks, UpdateLead, UpdateTaskStatus},
};

/// Helper function to create a test desk
async fn create_test_desk() -> (TempDir, Desk) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let desk = DeskBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create desk");
    (temp_dir, desk)
}

fn sample_lead_params() -> CreateLead {
    CreateLead {
        first_name: "Marie".to_string(),
        last_name: "Durand".to_string(),
        email: "marie@example.com".to_string(),
        phone: "0612345678".to_string(),
        property_interest: Some("3-room apartment, Lyon 6e".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_lead_materializes_journey() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    assert_eq!(lead.full_name(), "Marie Durand");
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.rating, LeadRating::Neutral);
    assert_eq!(lead.journey.len(), 6);
    assert_eq!(lead.journey[0].status, StepStatus::InProgress);
    assert!(lead.journey[0].task_id.is_some());
    for step in &lead.journey[1..] {
        assert_eq!(step.status, StepStatus::Pending);
        assert!(step.task_id.is_none());
    }
}

#[tokio::test]
async fn test_create_lead_mirrors_first_step_task() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    let task_id = lead.journey[0].task_id.expect("Step 1 should own a task");
    let task = desk
        .get_task(&Id { id: task_id })
        .await
        .expect("Failed to get task")
        .expect("Task should exist");

    assert_eq!(task.title, "First contact");
    assert_eq!(task.description, "Initial contact by message for Marie Durand");
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.lead_id, Some(lead.id));
    assert_eq!(task.journey_step_id, Some(1));
    assert_eq!(Some(task.due_at), lead.journey[0].due_at);
}

#[tokio::test]
async fn test_complete_step_advances_and_spawns_task() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    let lead = desk
        .complete_step(&CompleteStep {
            lead_id: lead.id,
            step_id: 1,
        })
        .await
        .expect("Failed to complete step");

    assert_eq!(lead.journey[0].status, StepStatus::Completed);
    assert!(lead.journey[0].completed_at.is_some());
    assert_eq!(lead.journey[1].status, StepStatus::InProgress);

    let task_id = lead.journey[1].task_id.expect("Step 2 should own a task");
    let task = desk
        .get_task(&Id { id: task_id })
        .await
        .expect("Failed to get task")
        .expect("Task should exist");
    assert_eq!(task.title, "Phone contact");
    assert_eq!(task.journey_step_id, Some(2));
}

#[tokio::test]
async fn test_complete_step_rejects_pending_step() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    // Step 3 is pending; the journey must not skip ahead
    let err = desk
        .complete_step(&CompleteStep {
            lead_id: lead.id,
            step_id: 3,
        })
        .await
        .expect_err("Completing a pending step should fail");
    assert!(matches!(err, DeskError::InvalidTransition { step_id: 3, .. }));

    // Nothing moved and no extra task appeared
    let lead = desk
        .get_lead(&Id { id: lead.id })
        .await
        .expect("Failed to get lead")
        .expect("Lead should exist");
    assert_eq!(lead.journey[0].status, StepStatus::InProgress);
    assert_eq!(lead.journey[2].status, StepStatus::Pending);
    assert!(lead.journey[2].task_id.is_none());

    let tasks = desk
        .list_tasks(crate::models::TaskFilter::default())
        .await
        .expect("Failed to list tasks");
    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn test_full_journey_to_terminal_state() {
    let (_temp_dir, desk) = create_test_desk().await;

    let mut lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    for step_id in 1..=6 {
        lead = desk
            .complete_step(&CompleteStep {
                lead_id: lead.id,
                step_id,
            })
            .await
            .expect("Failed to complete step");
    }

    assert!(lead
        .journey
        .iter()
        .all(|step| step.status == StepStatus::Completed));
    assert!(lead.active_step().is_none());

    // One task per step, never a seventh
    let tasks = desk
        .list_tasks(crate::models::TaskFilter {
            journey_only: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(tasks.len(), 6);

    // Completing past the end reports an invalid transition
    let err = desk
        .complete_step(&CompleteStep {
            lead_id: lead.id,
            step_id: 6,
        })
        .await
        .expect_err("Re-completing step 6 should fail");
    assert!(matches!(err, DeskError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_complete_step_unknown_lead() {
    let (_temp_dir, desk) = create_test_desk().await;

    let err = desk
        .complete_step(&CompleteStep {
            lead_id: 999,
            step_id: 1,
        })
        .await
        .expect_err("Unknown lead should fail");
    assert!(matches!(err, DeskError::LeadNotFound { id: 999 }));
}

#[tokio::test]
async fn test_update_lead_partial_fields() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    let updated = desk
        .update_lead(&UpdateLead {
            id: lead.id,
            status: Some("qualified".to_string()),
            rating: Some("hot".to_string()),
            notes: Some("Visited twice, very motivated".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update lead");

    assert_eq!(updated.status, LeadStatus::Qualified);
    assert_eq!(updated.rating, LeadRating::Hot);
    assert_eq!(updated.notes, "Visited twice, very motivated");
    // Untouched fields stay put
    assert_eq!(updated.email, "marie@example.com");
    assert!(updated.updated_at >= lead.updated_at);
}

#[tokio::test]
async fn test_update_lead_rejects_empty_update() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");

    let err = desk
        .update_lead(&UpdateLead {
            id: lead.id,
            ..Default::default()
        })
        .await
        .expect_err("Empty update should fail");
    assert!(matches!(err, DeskError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_toggle_favorite_round_trip() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");
    assert!(!lead.favorite);

    let lead = desk
        .toggle_favorite(&Id { id: lead.id })
        .await
        .expect("Failed to toggle favorite");
    assert!(lead.favorite);

    let lead = desk
        .toggle_favorite(&Id { id: lead.id })
        .await
        .expect("Failed to toggle favorite");
    assert!(!lead.favorite);
}

#[tokio::test]
async fn test_list_leads_filters() {
    let (_temp_dir, desk) = create_test_desk().await;

    desk.create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");
    let other = desk
        .create_lead(&CreateLead {
            first_name: "Paul".to_string(),
            last_name: "Martin".to_string(),
            email: "paul@example.com".to_string(),
            phone: "0698765432".to_string(),
            status: Some("qualified".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create lead");
    desk.toggle_favorite(&Id { id: other.id })
        .await
        .expect("Failed to toggle favorite");

    let all = desk
        .list_leads_summary(&ListLeads::default())
        .await
        .expect("Failed to list leads");
    assert_eq!(all.len(), 2);

    let by_name = desk
        .list_leads_summary(&ListLeads {
            name: Some("mart".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list leads");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].last_name, "Martin");

    let qualified = desk
        .list_leads_summary(&ListLeads {
            status: Some("qualified".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list leads");
    assert_eq!(qualified.len(), 1);

    let favorites = desk
        .list_leads_summary(&ListLeads {
            favorites: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list leads");
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].first_name, "Paul");
}

#[tokio::test]
async fn test_delete_lead_keeps_tasks_as_history() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");
    let task_id = lead.journey[0].task_id.expect("Step 1 should own a task");

    desk.delete_lead(&Id { id: lead.id })
        .await
        .expect("Failed to delete lead");

    assert!(desk
        .get_lead(&Id { id: lead.id })
        .await
        .expect("Failed to get lead")
        .is_none());

    // The mirrored task survives with its lead reference cleared
    let task = desk
        .get_task(&Id { id: task_id })
        .await
        .expect("Failed to get task")
        .expect("Task should survive lead deletion");
    assert_eq!(task.lead_id, None);
}

#[tokio::test]
async fn test_lead_metrics() {
    let (_temp_dir, desk) = create_test_desk().await;

    desk.create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");
    desk.create_lead(&CreateLead {
        first_name: "Paul".to_string(),
        last_name: "Martin".to_string(),
        email: "paul@example.com".to_string(),
        phone: "0698765432".to_string(),
        status: Some("closed".to_string()),
        score: Some(80.0),
        ..Default::default()
    })
    .await
    .expect("Failed to create lead");

    let metrics = desk.lead_metrics().await.expect("Failed to compute metrics");

    assert_eq!(metrics.total, 2);
    assert_eq!(metrics.new_leads, 1);
    assert_eq!(metrics.closed_leads, 1);
    assert!((metrics.conversion_rate - 50.0).abs() < f64::EPSILON);
    assert!((metrics.average_score - 40.0).abs() < f64::EPSILON);
    assert_eq!(metrics.status_distribution.len(), 7);
}

#[tokio::test]
async fn test_task_board_status_moves_are_permissive() {
    let (_temp_dir, desk) = create_test_desk().await;

    let task = desk
        .create_task(&CreateTask {
            title: "Call the notary".to_string(),
            priority: Some("urgent".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    assert_eq!(task.status, TaskStatus::NotStarted);

    // Jump straight to completed, then back to blocked
    let task = desk
        .update_task_status(&UpdateTaskStatus {
            id: task.id,
            status: "completed".to_string(),
        })
        .await
        .expect("Failed to update status");
    assert_eq!(task.status, TaskStatus::Completed);

    let task = desk
        .update_task_status(&UpdateTaskStatus {
            id: task.id,
            status: "blocked".to_string(),
        })
        .await
        .expect("Failed to update status");
    assert_eq!(task.status, TaskStatus::Blocked);
}

#[tokio::test]
async fn test_board_status_never_advances_journey() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");
    let task_id = lead.journey[0].task_id.expect("Step 1 should own a task");

    desk.update_task_status(&UpdateTaskStatus {
        id: task_id,
        status: "completed".to_string(),
    })
    .await
    .expect("Failed to update status");

    // The journey still waits on an explicit step completion
    let lead = desk
        .get_lead(&Id { id: lead.id })
        .await
        .expect("Failed to get lead")
        .expect("Lead should exist");
    assert_eq!(lead.journey[0].status, StepStatus::InProgress);
}

#[tokio::test]
async fn test_list_tasks_filters() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&sample_lead_params())
        .await
        .expect("Failed to create lead");
    desk.create_task(&CreateTask {
        title: "Standalone chore".to_string(),
        priority: Some("medium".to_string()),
        ..Default::default()
    })
    .await
    .expect("Failed to create task");

    let board = desk
        .list_tasks_board(&ListTasks::default())
        .await
        .expect("Failed to list tasks");
    assert_eq!(board.len(), 2);

    let journey_only = desk
        .list_tasks_board(&ListTasks {
            journey_only: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(journey_only.len(), 1);
    assert_eq!(journey_only[0].lead_id, Some(lead.id));

    let medium = desk
        .list_tasks_board(&ListTasks {
            priority: Some("medium".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(medium.len(), 1);
    assert_eq!(medium[0].title, "Standalone chore");
}

#[tokio::test]
async fn test_delete_task() {
    let (_temp_dir, desk) = create_test_desk().await;

    let task = desk
        .create_task(&CreateTask {
            title: "Throwaway".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    desk.delete_task(&Id { id: task.id })
        .await
        .expect("Failed to delete task");

    assert!(desk
        .get_task(&Id { id: task.id })
        .await
        .expect("Failed to get task")
        .is_none());

    let err = desk
        .delete_task(&Id { id: task.id })
        .await
        .expect_err("Deleting twice should fail");
    assert!(matches!(err, DeskError::TaskNotFound { .. }));
}

#[tokio::test]
async fn test_generate_recurring_tasks() {
    let (_temp_dir, desk) = create_test_desk().await;

    // A month and a half overdue: exactly one occurrence has come around
    let past_due = jiff::Timestamp::now()
        .to_zoned(jiff::tz::TimeZone::UTC)
        .checked_sub(jiff::Span::new().days(45))
        .expect("Failed to compute past due date")
        .timestamp();

    desk.create_task(&CreateTask {
        title: "Portfolio review".to_string(),
        due_at: Some(past_due.to_string()),
        recur_every_months: Some(1),
        ..Default::default()
    })
    .await
    .expect("Failed to create recurring task");

    let spawned = desk
        .generate_recurring_result()
        .await
        .expect("Failed to generate recurring tasks");
    assert_eq!(spawned.len(), 1);
    assert_eq!(spawned[0].title, "Portfolio review");
    assert_eq!(spawned[0].status, TaskStatus::NotStarted);
    assert!(spawned[0].recurrence.is_none());

    // A second run in the same month spawns nothing new
    let again = desk
        .generate_recurring_result()
        .await
        .expect("Failed to re-run generation");
    assert!(again.is_empty());
}
