//! End-to-end tests exercising the public desk API.

mod common;

use common::create_test_desk;
use immo_core::{
    CompleteStep, CreateLead, CreateTask, DeskError, Id, ListLeads, ListTasks, StepStatus,
    TaskStatus, UpdateLead, UpdateTaskStatus,
};

fn lead_params(first: &str, last: &str) -> CreateLead {
    CreateLead {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "0612345678".to_string(),
        property_interest: Some("House with garden, Bordeaux".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_lead_lifecycle() {
    let (_temp_dir, desk) = create_test_desk().await;

    // Capture a lead; the journey materializes immediately
    let lead = desk
        .create_lead(&lead_params("Marie", "Durand"))
        .await
        .expect("Failed to create lead");
    assert_eq!(lead.journey.len(), 6);
    assert_eq!(lead.active_step().map(|s| s.id), Some(1));

    // Update the profile
    let lead = desk
        .update_lead(&UpdateLead {
            id: lead.id,
            status: Some("contacted".to_string()),
            last_contact_at: Some("2026-08-20T09:30:00Z".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update lead");
    assert!(lead.last_contact_at.is_some());

    // Pin it and list favorites
    desk.toggle_favorite(&Id { id: lead.id })
        .await
        .expect("Failed to toggle favorite");
    let favorites = desk
        .list_leads_summary(&ListLeads {
            favorites: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list leads");
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, lead.id);

    // Delete and confirm
    desk.delete_lead(&Id { id: lead.id })
        .await
        .expect("Failed to delete lead");
    assert!(desk
        .get_lead(&Id { id: lead.id })
        .await
        .expect("Failed to get lead")
        .is_none());
}

#[tokio::test]
async fn test_journey_drives_the_task_board() {
    let (_temp_dir, desk) = create_test_desk().await;

    let lead = desk
        .create_lead(&lead_params("Paul", "Martin"))
        .await
        .expect("Failed to create lead");

    // Step 1 is mirrored at creation
    let board = desk
        .list_tasks_board(&ListTasks {
            journey_only: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].journey_step_id, Some(1));

    // Skipping ahead is rejected without side effects
    let err = desk
        .complete_step(&CompleteStep {
            lead_id: lead.id,
            step_id: 4,
        })
        .await
        .expect_err("Pending step must not complete");
    assert!(matches!(err, DeskError::InvalidTransition { step_id: 4, .. }));

    // Walk the journey to the end
    let mut lead = lead;
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

    // Six mirrored tasks, one per step, each due a day later than the last
    let board = desk
        .list_tasks_board(&ListTasks {
            journey_only: true,
            lead_id: Some(lead.id),
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(board.len(), 6);
    for pair in board.0.windows(2) {
        assert!(pair[0].due_at <= pair[1].due_at);
    }
}

#[tokio::test]
async fn test_standalone_tasks_and_board_moves() {
    let (_temp_dir, desk) = create_test_desk().await;

    let task = desk
        .create_task(&CreateTask {
            title: "Order diagnostics report".to_string(),
            description: Some("DPE and asbestos for the Foch listing".to_string()),
            priority: Some("urgent".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert!(task.journey_step_id.is_none());

    let task = desk
        .update_task_status(&UpdateTaskStatus {
            id: task.id,
            status: "in_progress".to_string(),
        })
        .await
        .expect("Failed to update status");
    assert_eq!(task.status, TaskStatus::InProgress);

    let in_progress = desk
        .list_tasks_board(&ListTasks {
            status: Some("in_progress".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(in_progress.len(), 1);

    desk.delete_task(&Id { id: task.id })
        .await
        .expect("Failed to delete task");
    assert!(desk
        .get_task(&Id { id: task.id })
        .await
        .expect("Failed to get task")
        .is_none());
}

#[tokio::test]
async fn test_attaching_task_to_unknown_lead_fails() {
    let (_temp_dir, desk) = create_test_desk().await;

    let err = desk
        .create_task(&CreateTask {
            title: "Orphaned".to_string(),
            lead_id: Some(42),
            ..Default::default()
        })
        .await
        .expect_err("Unknown lead should be rejected");
    assert!(matches!(err, DeskError::LeadNotFound { id: 42 }));
}

#[tokio::test]
async fn test_today_board_view() {
    let (_temp_dir, desk) = create_test_desk().await;

    // Due now, so inside today's window
    desk.create_task(&CreateTask {
        title: "Morning call round".to_string(),
        due_at: Some(jiff::Timestamp::now().to_string()),
        ..Default::default()
    })
    .await
    .expect("Failed to create task");

    // Due next week, so outside of it
    let next_week = jiff::Timestamp::now()
        .checked_add(jiff::Span::new().hours(24 * 7))
        .expect("Failed to compute due date");
    desk.create_task(&CreateTask {
        title: "Prepare open house".to_string(),
        due_at: Some(next_week.to_string()),
        ..Default::default()
    })
    .await
    .expect("Failed to create task");

    let today = desk
        .list_tasks_board(&ListTasks {
            today: true,
            ..Default::default()
        })
        .await
        .expect("Failed to list tasks");
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].title, "Morning call round");
}

#[tokio::test]
async fn test_recurring_task_generation() {
    let (_temp_dir, desk) = create_test_desk().await;

    // Overdue by a quarter and change: exactly one occurrence is due
    let last_quarter = jiff::Timestamp::now()
        .to_zoned(jiff::tz::TimeZone::UTC)
        .checked_sub(jiff::Span::new().days(100))
        .expect("Failed to compute due date")
        .timestamp();

    desk.create_task(&CreateTask {
        title: "Quarterly portfolio review".to_string(),
        due_at: Some(last_quarter.to_string()),
        recur_every_months: Some(3),
        ..Default::default()
    })
    .await
    .expect("Failed to create recurring task");

    let spawned = desk
        .generate_recurring_result()
        .await
        .expect("Failed to generate recurring tasks");
    assert_eq!(spawned.len(), 1);
    assert!(spawned[0].recurrence.is_none());

    // Idempotent until the next interval elapses
    let again = desk
        .generate_recurring_result()
        .await
        .expect("Failed to re-run generation");
    assert!(again.is_empty());
}

#[tokio::test]
async fn test_metrics_over_a_small_pipeline() {
    let (_temp_dir, desk) = create_test_desk().await;

    desk.create_lead(&lead_params("Marie", "Durand"))
        .await
        .expect("Failed to create lead");
    desk.create_lead(&CreateLead {
        status: Some("closed".to_string()),
        score: Some(90.0),
        ..lead_params("Paul", "Martin")
    })
    .await
    .expect("Failed to create lead");
    desk.create_lead(&CreateLead {
        status: Some("lost".to_string()),
        ..lead_params("Anna", "Schmidt")
    })
    .await
    .expect("Failed to create lead");

    let metrics = desk.metrics_summary().await.expect("Failed to compute metrics");
    assert_eq!(metrics.total, 3);
    assert_eq!(metrics.new_leads, 1);
    assert_eq!(metrics.closed_leads, 1);
    assert!((metrics.conversion_rate - 100.0 / 3.0).abs() < 0.01);
    assert!((metrics.average_score - 30.0).abs() < f64::EPSILON);

    let closed = metrics
        .status_distribution
        .iter()
        .find(|(status, _)| status.as_str() == "closed")
        .map(|(_, count)| *count);
    assert_eq!(closed, Some(1));
}
