//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{LeadSummary, Task};

/// Newtype wrapper for displaying collections of lead summaries.
///
/// Provides clean Display formatting for lead collections without title
/// handling, allowing consumers to handle titles separately. Handles
/// empty collections gracefully.
pub struct LeadSummaries(pub Vec<LeadSummary>);

impl LeadSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of lead summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the lead summary at the given index.
    pub fn get(&self, index: usize) -> Option<&LeadSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the lead summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, LeadSummary> {
        self.0.iter()
    }
}

impl Index<usize> for LeadSummaries {
    type Output = LeadSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for LeadSummaries {
    type Item = LeadSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LeadSummaries {
    type Item = &'a LeadSummary;
    type IntoIter = std::slice::Iter<'a, LeadSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LeadSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No leads found.")
        } else {
            for lead in &self.0 {
                write!(f, "{lead}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of board tasks.
///
/// Handles empty collections gracefully and formats each task using the
/// existing Task Display trait.
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Tasks {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{LeadRating, LeadStatus, TaskPriority, TaskStatus};

    fn create_test_summary() -> LeadSummary {
        LeadSummary {
            id: 1,
            first_name: "Marie".to_string(),
            last_name: "Durand".to_string(),
            email: "marie@example.com".to_string(),
            phone: "0612345678".to_string(),
            property_interest: "3-room apartment".to_string(),
            status: LeadStatus::Qualified,
            rating: LeadRating::Hot,
            score: 72.0,
            favorite: false,
            created_at: Timestamp::from_second(1_700_000_000).unwrap(),
            updated_at: Timestamp::from_second(1_700_000_000).unwrap(),
            total_steps: 6,
            completed_steps: 2,
        }
    }

    fn create_test_task() -> Task {
        Task {
            id: 1,
            lead_id: Some(1),
            property_interest: "3-room apartment".to_string(),
            title: "Phone contact".to_string(),
            description: "Follow-up contact by phone for Marie Durand".to_string(),
            due_at: Timestamp::from_second(1_700_086_400).unwrap(),
            status: TaskStatus::NotStarted,
            priority: TaskPriority::Normal,
            created_at: Timestamp::from_second(1_700_000_000).unwrap(),
            recurrence: None,
            last_generated: None,
            journey_step_id: Some(2),
        }
    }

    #[test]
    fn test_lead_summaries_display() {
        let summaries = LeadSummaries(vec![create_test_summary()]);
        let output = format!("{summaries}");
        assert!(output.contains("Marie Durand"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("(2/6)"));
        assert!(output.contains("qualified"));

        let empty = LeadSummaries(vec![]);
        assert_eq!(format!("{empty}"), "No leads found.\n");
    }

    #[test]
    fn test_lead_summaries_favorite_star() {
        let mut summary = create_test_summary();
        summary.favorite = true;
        let output = format!("{}", LeadSummaries(vec![summary]));
        assert!(output.contains("★ Marie Durand"));
    }

    #[test]
    fn test_tasks_display() {
        let tasks = Tasks(vec![create_test_task()]);
        let output = format!("{tasks}");
        assert!(output.contains("Phone contact"));
        assert!(output.contains("○ Not started"));
        assert!(output.contains("Journey step: 2"));

        let empty = Tasks(vec![]);
        assert_eq!(format!("{empty}"), "No tasks found.\n");
    }

    #[test]
    fn test_tasks_display_multiple() {
        let task1 = create_test_task();
        let mut task2 = create_test_task();
        task2.id = 2;
        task2.title = "In-person meeting".to_string();
        task2.status = TaskStatus::Completed;

        let output = format!("{}", Tasks(vec![task1, task2]));
        assert!(output.contains("Phone contact"));
        assert!(output.contains("In-person meeting"));
        assert!(output.contains("✓ Completed"));
    }
}
