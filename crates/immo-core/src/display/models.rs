//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live
//! here, separated from the model definitions to keep data structures and
//! presentation apart. Output is markdown for rich terminal rendering.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    JourneyStep, Lead, LeadMetrics, LeadRating, LeadStatus, LeadSummary, StepStatus, Task,
    TaskPriority, TaskStatus,
};

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LeadRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.full_name())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Rating: {}", self.rating)?;
        writeln!(f, "- Email: {}", self.email)?;
        writeln!(f, "- Phone: {}", self.phone)?;
        if !self.property_interest.is_empty() {
            writeln!(f, "- Property interest: {}", self.property_interest)?;
        }
        if self.formula.is_empty() {
            writeln!(f, "- Score: {}", self.score)?;
        } else {
            writeln!(f, "- Score: {} ({})", self.score, self.formula)?;
        }
        if self.favorite {
            writeln!(f, "- Favorite: yes")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        if let Some(ref last_contact) = self.last_contact_at {
            writeln!(f, "- Last contact: {}", LocalDateTime(last_contact))?;
        }
        if let Some(ref follow_up) = self.next_follow_up {
            writeln!(f, "- Next follow-up: {}", LocalDateTime(follow_up))?;
        }

        // Notes as a paragraph
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        if !self.journey.is_empty() {
            writeln!(f, "\n## Journey")?;
            writeln!(f)?;
            for step in &self.journey {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl JourneyStep {
    /// Format the step using the compact checklist format.
    ///
    /// The same format is used standalone and within a lead context.
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if let Some(ref due) = self.due_at {
            writeln!(f, "- Due: {}", LocalDateTime(due))?;
        }
        if let Some(ref completed) = self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        if let Some(task_id) = self.task_id {
            writeln!(f, "- Task ID: {task_id}")?;
        }
        if self.due_at.is_some() || self.completed_at.is_some() || self.task_id.is_some() {
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for JourneyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Due: {}", LocalDateTime(&self.due_at))?;
        if let Some(lead_id) = self.lead_id {
            writeln!(f, "- Lead ID: {lead_id}")?;
        }
        if !self.property_interest.is_empty() {
            writeln!(f, "- Property interest: {}", self.property_interest)?;
        }
        if let Some(step_id) = self.journey_step_id {
            writeln!(f, "- Journey step: {step_id}")?;
        }
        if let Some(rule) = self.recurrence {
            if rule.every == 1 {
                writeln!(f, "- Recurs: monthly")?;
            } else {
                writeln!(f, "- Recurs: every {} months", rule.every)?;
            }
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for LeadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_steps > 0 {
            format!(" ({}/{})", self.completed_steps, self.total_steps)
        } else {
            String::new()
        };
        let star = if self.favorite { "★ " } else { "" };

        writeln!(f, "## {}{} (ID: {}){}", star, self.full_name(), self.id, progress)?;
        writeln!(f)?;

        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Rating**: {}", self.rating)?;
        if !self.property_interest.is_empty() {
            writeln!(f, "- **Property interest**: {}", self.property_interest)?;
        }
        writeln!(f, "- **Score**: {}", self.score)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each lead

        Ok(())
    }
}

impl fmt::Display for LeadMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Pipeline Metrics")?;
        writeln!(f)?;

        writeln!(f, "- Total leads: {}", self.total)?;
        writeln!(f, "- New: {}", self.new_leads)?;
        writeln!(f, "- Qualified: {}", self.qualified_leads)?;
        writeln!(f, "- Closed: {}", self.closed_leads)?;
        writeln!(f, "- Conversion rate: {:.1}%", self.conversion_rate)?;
        writeln!(f, "- Average score: {:.1}", self.average_score)?;

        writeln!(f)?;
        writeln!(f, "## Status distribution")?;
        writeln!(f)?;
        for (status, count) in &self.status_distribution {
            writeln!(f, "- {status}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Rating distribution")?;
        writeln!(f)?;
        for (rating, count) in &self.rating_distribution {
            writeln!(f, "- {rating}: {count}")?;
        }

        Ok(())
    }
}
