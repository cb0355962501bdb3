//! Unit tests for model types.

use std::str::FromStr;

use jiff::Timestamp;

use super::*;

fn sample_lead() -> Lead {
    let now = Timestamp::from_second(1_700_000_000).unwrap();
    Lead {
        id: 1,
        first_name: "Marie".to_string(),
        last_name: "Durand".to_string(),
        email: "marie@example.com".to_string(),
        phone: "+33 6 12 34 56 78".to_string(),
        property_interest: "3-room apartment, Lyon 6e".to_string(),
        status: LeadStatus::New,
        rating: LeadRating::Neutral,
        notes: String::new(),
        score: 42.0,
        formula: "standard".to_string(),
        favorite: false,
        created_at: now,
        updated_at: now,
        last_contact_at: None,
        next_follow_up: None,
        journey: crate::journey::initialize_journey(now),
    }
}

#[test]
fn test_lead_status_round_trip() {
    for status in LeadStatus::ALL {
        assert_eq!(LeadStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_lead_status_parse_is_case_insensitive() {
    assert_eq!(LeadStatus::from_str("Qualified").unwrap(), LeadStatus::Qualified);
    assert_eq!(LeadStatus::from_str("CLOSED").unwrap(), LeadStatus::Closed);
    assert!(LeadStatus::from_str("bogus").is_err());
}

#[test]
fn test_lead_rating_round_trip() {
    for rating in LeadRating::ALL {
        assert_eq!(LeadRating::from_str(rating.as_str()).unwrap(), rating);
    }
    assert_eq!(LeadRating::default(), LeadRating::Neutral);
}

#[test]
fn test_step_status_parsing() {
    assert_eq!(StepStatus::from_str("in_progress").unwrap(), StepStatus::InProgress);
    assert_eq!(StepStatus::from_str("inprogress").unwrap(), StepStatus::InProgress);
    assert_eq!(StepStatus::from_str("completed").unwrap(), StepStatus::Completed);
    assert!(StepStatus::from_str("done").is_err());
}

#[test]
fn test_step_status_icons() {
    assert_eq!(StepStatus::Completed.with_icon(), "✓ Completed");
    assert_eq!(StepStatus::InProgress.with_icon(), "➤ In progress");
    assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
}

#[test]
fn test_task_status_parsing_and_icons() {
    assert_eq!(TaskStatus::from_str("not_started").unwrap(), TaskStatus::NotStarted);
    assert_eq!(TaskStatus::from_str("blocked").unwrap(), TaskStatus::Blocked);
    assert_eq!(TaskStatus::default(), TaskStatus::NotStarted);
    assert_eq!(TaskStatus::Blocked.with_icon(), "⊘ Blocked");
}

#[test]
fn test_task_priority_default_is_normal() {
    assert_eq!(TaskPriority::default(), TaskPriority::Normal);
    assert_eq!(TaskPriority::from_str("urgent").unwrap(), TaskPriority::Urgent);
    assert!(TaskPriority::from_str("low").is_err());
}

#[test]
fn test_step_icon_round_trip() {
    let icons = [
        StepIcon::MessageSquare,
        StepIcon::Phone,
        StepIcon::Users,
        StepIcon::FileText,
        StepIcon::Camera,
        StepIcon::ClipboardCheck,
    ];
    for icon in icons {
        assert_eq!(StepIcon::from_str(icon.as_str()).unwrap(), icon);
    }
    assert_eq!(StepIcon::from_str("message-square").unwrap(), StepIcon::MessageSquare);
}

#[test]
fn test_lead_full_name() {
    let lead = sample_lead();
    assert_eq!(lead.full_name(), "Marie Durand");
}

#[test]
fn test_lead_active_step_tracks_progress() {
    let mut lead = sample_lead();
    assert_eq!(lead.active_step().map(|s| s.id), Some(1));
    assert_eq!(lead.completed_steps(), 0);

    lead.journey[0].status = StepStatus::Completed;
    lead.journey[1].status = StepStatus::InProgress;
    assert_eq!(lead.active_step().map(|s| s.id), Some(2));
    assert_eq!(lead.completed_steps(), 1);

    for step in &mut lead.journey {
        step.status = StepStatus::Completed;
    }
    assert!(lead.active_step().is_none());
    assert_eq!(lead.completed_steps(), 6);
}

#[test]
fn test_lead_summary_from_lead() {
    let mut lead = sample_lead();
    lead.journey[0].status = StepStatus::Completed;
    lead.journey[1].status = StepStatus::Completed;
    lead.journey[2].status = StepStatus::InProgress;

    let summary = LeadSummary::from(&lead);
    assert_eq!(summary.id, lead.id);
    assert_eq!(summary.full_name(), "Marie Durand");
    assert_eq!(summary.total_steps, 6);
    assert_eq!(summary.completed_steps, 2);
}

#[test]
fn test_update_lead_request_is_empty() {
    let request = UpdateLeadRequest::default();
    assert!(request.is_empty());

    let request = UpdateLeadRequest {
        notes: Some("called twice".to_string()),
        ..Default::default()
    };
    assert!(!request.is_empty());
}

#[test]
fn test_task_filter_due_between() {
    let start = Timestamp::from_second(1_700_000_000).unwrap();
    let end = Timestamp::from_second(1_700_086_400).unwrap();

    let filter = TaskFilter::due_between(start, end);
    assert_eq!(filter.due_after, Some(start));
    assert_eq!(filter.due_before, Some(end));
    assert!(filter.status.is_none());
    assert!(!filter.journey_only);
}

#[test]
fn test_recurrence_kind_round_trip() {
    assert_eq!(RecurrenceKind::from_str("monthly").unwrap(), RecurrenceKind::Monthly);
    assert_eq!(RecurrenceKind::Monthly.as_str(), "monthly");
    assert!(RecurrenceKind::from_str("weekly").is_err());
}

#[test]
fn test_lead_serialization_round_trip() {
    let lead = sample_lead();
    let json = serde_json::to_string(&lead).unwrap();
    let back: Lead = serde_json::from_str(&json).unwrap();
    assert_eq!(back, lead);
}

#[test]
fn test_status_serde_uses_wire_names() {
    let json = serde_json::to_string(&TaskStatus::NotStarted).unwrap();
    assert_eq!(json, "\"not_started\"");
    let json = serde_json::to_string(&StepIcon::ClipboardCheck).unwrap();
    assert_eq!(json, "\"clipboard-check\"");
}
