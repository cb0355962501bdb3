//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument struct with clap derives
//! and a `From` conversion into the matching `immo_core::params` type, so
//! core parameter types stay free of clap attributes and the mapping
//! between the two layers is verified at compile time.

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use immo_core::{params::*, Desk};

use crate::renderer::TerminalRenderer;

/// Create a new lead
///
/// CLI wrapper for CreateLead that adds clap-specific argument handling.
/// Creating a lead materializes its six-step journey and puts the first
/// step on the task board immediately.
#[derive(Args)]
pub struct CreateLeadArgs {
    /// First name of the lead
    pub first_name: String,
    /// Last name of the lead
    pub last_name: String,
    /// Contact email address
    #[arg(short, long)]
    pub email: String,
    /// Contact phone number
    #[arg(short, long)]
    pub phone: String,
    /// Property the lead is interested in
    #[arg(long, help = "Property the lead is interested in")]
    pub property: Option<String>,
    /// Free-form notes about the lead
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Initial lead score
    #[arg(long)]
    pub score: Option<f64>,
    /// Label of the scoring formula used
    #[arg(long)]
    pub formula: Option<String>,
    /// Initial pipeline status
    #[arg(long, help = "Initial pipeline status (new, contacted, qualified, proposal, negotiation, closed, lost)")]
    pub status: Option<String>,
    /// Initial rating
    #[arg(long, help = "Initial rating (hot, warm, cold, neutral, blocked)")]
    pub rating: Option<String>,
}

impl From<CreateLeadArgs> for CreateLead {
    fn from(val: CreateLeadArgs) -> Self {
        CreateLead {
            first_name: val.first_name,
            last_name: val.last_name,
            email: val.email,
            phone: val.phone,
            property_interest: val.property,
            notes: val.notes,
            score: val.score,
            formula: val.formula,
            status: val.status,
            rating: val.rating,
        }
    }
}

/// List leads
///
/// Display lead summaries with journey progress, newest first. Filters
/// can be combined; `--favorites` narrows the list to pinned leads.
#[derive(Args)]
pub struct ListLeadsArgs {
    /// Filter by name fragment (matches first or last name)
    #[arg(long, help = "Case-insensitive name fragment to match")]
    pub name: Option<String>,
    /// Filter by pipeline status
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by rating
    #[arg(long)]
    pub rating: Option<String>,
    /// Only show favorite leads
    #[arg(long)]
    pub favorites: bool,
}

impl From<ListLeadsArgs> for ListLeads {
    fn from(val: ListLeadsArgs) -> Self {
        ListLeads {
            name: val.name,
            status: val.status,
            rating: val.rating,
            favorites: val.favorites,
        }
    }
}

/// Show details of a specific lead
///
/// Display the full profile and the journey checklist with each step's
/// status, due date, and mirrored task ID.
#[derive(Args)]
pub struct ShowLeadArgs {
    /// ID of the lead to display
    #[arg(help = "Unique identifier of the lead to show details for")]
    pub id: u64,
}

impl From<ShowLeadArgs> for Id {
    fn from(val: ShowLeadArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a lead's profile
///
/// Modify contact details, status, rating, score, notes, or follow-up
/// dates. Only the provided fields change; the journey cannot be edited
/// through this command.
#[derive(Args)]
pub struct UpdateLeadArgs {
    #[arg(help = "Unique identifier of the lead to update")]
    pub id: u64,
    /// Updated first name
    #[arg(long)]
    pub first_name: Option<String>,
    /// Updated last name
    #[arg(long)]
    pub last_name: Option<String>,
    /// Updated contact email
    #[arg(short, long)]
    pub email: Option<String>,
    /// Updated contact phone
    #[arg(short, long)]
    pub phone: Option<String>,
    /// Updated property interest
    #[arg(long)]
    pub property: Option<String>,
    /// Updated notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Updated lead score
    #[arg(long)]
    pub score: Option<f64>,
    /// Updated scoring formula label
    #[arg(long)]
    pub formula: Option<String>,
    /// New pipeline status
    #[arg(long, help = "New pipeline status (new, contacted, qualified, proposal, negotiation, closed, lost)")]
    pub status: Option<String>,
    /// New rating
    #[arg(long, help = "New rating (hot, warm, cold, neutral, blocked)")]
    pub rating: Option<String>,
    /// When the lead was last contacted (RFC 3339 timestamp)
    #[arg(long)]
    pub last_contact: Option<String>,
    /// When the next follow-up is scheduled (RFC 3339 timestamp)
    #[arg(long)]
    pub follow_up: Option<String>,
}

impl From<UpdateLeadArgs> for UpdateLead {
    fn from(val: UpdateLeadArgs) -> Self {
        UpdateLead {
            id: val.id,
            first_name: val.first_name,
            last_name: val.last_name,
            email: val.email,
            phone: val.phone,
            property_interest: val.property,
            notes: val.notes,
            score: val.score,
            formula: val.formula,
            status: val.status,
            rating: val.rating,
            last_contact_at: val.last_contact,
            next_follow_up: val.follow_up,
        }
    }
}

/// Toggle the favorite flag on a lead
#[derive(Args)]
pub struct FavoriteLeadArgs {
    /// ID of the lead to pin or unpin
    #[arg(help = "Unique identifier of the lead to pin or unpin")]
    pub id: u64,
}

impl From<FavoriteLeadArgs> for Id {
    fn from(val: FavoriteLeadArgs) -> Self {
        Id { id: val.id }
    }
}

/// Complete a journey step
///
/// Mark the step currently in progress as completed. The next step is
/// activated and mirrored onto the task board in the same transaction.
/// Only the in-progress step can be completed; steps never skip.
#[derive(Args)]
pub struct CompleteStepArgs {
    #[arg(help = "Unique identifier of the lead whose journey advances")]
    pub lead_id: u64,
    #[arg(help = "Step to complete (1 through 6)")]
    pub step_id: u32,
}

impl From<CompleteStepArgs> for CompleteStep {
    fn from(val: CompleteStepArgs) -> Self {
        CompleteStep {
            lead_id: val.lead_id,
            step_id: val.step_id,
        }
    }
}

/// Delete a lead permanently
///
/// Removes the lead and its journey steps. Board tasks spawned by the
/// journey are kept as history with their lead reference cleared.
#[derive(Args)]
pub struct DeleteLeadArgs {
    /// ID of the lead to delete
    #[arg(help = "Unique identifier of the lead to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum LeadCommands {
    /// Create a new lead
    #[command(alias = "c")]
    Create(CreateLeadArgs),
    /// List leads
    #[command(aliases = ["l", "ls"])]
    List(ListLeadsArgs),
    /// Show details of a specific lead
    #[command(alias = "s")]
    Show(ShowLeadArgs),
    /// Update a lead's profile
    #[command(alias = "u")]
    Update(UpdateLeadArgs),
    /// Toggle the favorite flag on a lead
    #[command(alias = "fav")]
    Favorite(FavoriteLeadArgs),
    /// Complete a journey step
    #[command(alias = "done")]
    Complete(CompleteStepArgs),
    /// Delete a lead permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteLeadArgs),
    /// Show aggregate pipeline metrics
    #[command(alias = "m")]
    Metrics,
}

/// Create a standalone task on the board
#[derive(Args)]
pub struct CreateTaskArgs {
    /// Title of the task
    pub title: String,
    /// Optional description of what needs to be done
    #[arg(short, long)]
    pub description: Option<String>,
    /// Property or listing the task relates to
    #[arg(long)]
    pub property: Option<String>,
    /// When the task is due (RFC 3339 timestamp, defaults to 24h from now)
    #[arg(long)]
    pub due: Option<String>,
    /// Priority bucket
    #[arg(long, help = "Priority bucket (urgent, medium, normal)")]
    pub priority: Option<String>,
    /// Lead to attach the task to
    #[arg(long)]
    pub lead_id: Option<u64>,
    /// Repeat the task every N months
    #[arg(long)]
    pub recur_months: Option<u32>,
    /// Preferred day of week for recurrences (0 = Sunday)
    #[arg(long)]
    pub recur_day: Option<u8>,
}

impl From<CreateTaskArgs> for CreateTask {
    fn from(val: CreateTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            description: val.description,
            property_interest: val.property,
            due_at: val.due,
            priority: val.priority,
            lead_id: val.lead_id,
            recur_every_months: val.recur_months,
            recur_day_of_week: val.recur_day,
        }
    }
}

/// List tasks on the board
#[derive(Args)]
pub struct ListTasksArgs {
    /// Only show tasks due today
    #[arg(long)]
    pub today: bool,
    /// Filter by board status
    #[arg(long, help = "Filter by board status (not_started, in_progress, blocked, completed)")]
    pub status: Option<String>,
    /// Filter by priority bucket
    #[arg(long, help = "Filter by priority bucket (urgent, medium, normal)")]
    pub priority: Option<String>,
    /// Only show tasks spawned by a journey step
    #[arg(long)]
    pub journey: bool,
    /// Only show tasks attached to this lead
    #[arg(long)]
    pub lead_id: Option<u64>,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            today: val.today,
            status: val.status,
            priority: val.priority,
            journey_only: val.journey,
            lead_id: val.lead_id,
        }
    }
}

/// Show details of a specific task
#[derive(Args)]
pub struct ShowTaskArgs {
    #[arg(help = "Unique identifier of the task to show details for")]
    pub id: u64,
}

impl From<ShowTaskArgs> for Id {
    fn from(val: ShowTaskArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move a task to a new board status
///
/// Board moves are free-form: any status can follow any other, and moving
/// a journey-mirrored task never advances the journey itself. Use
/// `lead complete` for that.
#[derive(Args)]
pub struct TaskStatusArgs {
    #[arg(help = "Unique identifier of the task to move")]
    pub id: u64,
    /// New board status for the task
    pub status: TaskStatusArg,
}

impl From<TaskStatusArgs> for UpdateTaskStatus {
    fn from(val: TaskStatusArgs) -> Self {
        UpdateTaskStatus {
            id: val.id,
            status: val.status.to_string(),
        }
    }
}

/// Delete a task permanently
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// ID of the task to delete
    #[arg(help = "Unique identifier of the task to permanently delete")]
    pub id: u64,
}

impl From<DeleteTaskArgs> for Id {
    fn from(val: DeleteTaskArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a standalone task on the board
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// List tasks on the board
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a specific task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Move a task to a new board status
    #[command(alias = "st")]
    Status(TaskStatusArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Generate due occurrences of recurring tasks
    #[command(alias = "g")]
    Generate,
}

/// Command-line argument representation of board status values
///
/// Converts between user-friendly command arguments and the status
/// strings the core expects. Used with the `task status` command.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskStatusArg {
    /// Mark task as not started
    NotStarted,
    /// Mark task as in progress
    InProgress,
    /// Mark task as blocked
    Blocked,
    /// Mark task as completed
    Completed,
}

impl std::fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatusArg::NotStarted => write!(f, "not_started"),
            TaskStatusArg::InProgress => write!(f, "in_progress"),
            TaskStatusArg::Blocked => write!(f, "blocked"),
            TaskStatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Command dispatcher tying the desk to the terminal renderer.
///
/// Each handler converts the CLI arguments into core parameters, invokes
/// the matching desk handler, and renders the returned display wrapper.
/// Missing resources exit with a failure so scripts can rely on the exit
/// code.
pub struct Cli {
    desk: Desk,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(desk: Desk, renderer: TerminalRenderer) -> Self {
        Self { desk, renderer }
    }

    /// Dispatch a `lead` subcommand.
    pub async fn handle_lead_command(&self, command: LeadCommands) -> Result<()> {
        match command {
            LeadCommands::Create(args) => {
                let result = self.desk.create_lead_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            LeadCommands::List(args) => self.list_leads(&args.into()).await,
            LeadCommands::Show(args) => {
                let params: Id = args.into();
                match self.desk.show_lead(&params).await? {
                    Some(lead) => self.renderer.render(&lead.to_string()),
                    None => bail!("Lead not found: {}", params.id),
                }
            }
            LeadCommands::Update(args) => {
                let result = self.desk.update_lead_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            LeadCommands::Favorite(args) => {
                let status = self.desk.toggle_favorite_result(&args.into()).await?;
                self.renderer.render(&status.to_string())
            }
            LeadCommands::Complete(args) => {
                let lead = self.desk.complete_step_result(&args.into()).await?;
                let output = format!("Completed journey step\n\n{lead}");
                self.renderer.render(&output)
            }
            LeadCommands::Delete(args) => {
                if !args.confirm {
                    bail!("Deleting a lead is permanent. Pass --confirm to proceed.");
                }
                let params = Id { id: args.id };
                match self.desk.delete_lead_result(&params).await? {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => bail!("Lead not found: {}", params.id),
                }
            }
            LeadCommands::Metrics => {
                let metrics = self.desk.metrics_summary().await?;
                self.renderer.render(&metrics.to_string())
            }
        }
    }

    /// Dispatch a `task` subcommand.
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Create(args) => {
                let result = self.desk.create_task_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::List(args) => {
                let params: ListTasks = args.into();
                let tasks = self.desk.list_tasks_board(&params).await?;
                let title = if params.today {
                    "# Today's Tasks\n\n"
                } else {
                    "# Task Board\n\n"
                };
                let output = format!("{title}{tasks}");
                self.renderer.render(&output)
            }
            TaskCommands::Show(args) => {
                let params: Id = args.into();
                match self.desk.show_task(&params).await? {
                    Some(task) => self.renderer.render(&task.to_string()),
                    None => bail!("Task not found: {}", params.id),
                }
            }
            TaskCommands::Status(args) => {
                let result = self.desk.update_task_status_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Delete(args) => {
                let params: Id = args.into();
                match self.desk.delete_task_result(&params).await? {
                    Some(result) => self.renderer.render(&result.to_string()),
                    None => bail!("Task not found: {}", params.id),
                }
            }
            TaskCommands::Generate => {
                let spawned = self.desk.generate_recurring_result().await?;
                if spawned.is_empty() {
                    self.renderer.render("No recurring tasks were due.\n")
                } else {
                    let output = format!("# Generated Tasks\n\n{spawned}");
                    self.renderer.render(&output)
                }
            }
        }
    }

    /// List leads with an appropriate title. Also serves as the default
    /// command when the CLI is invoked bare.
    pub async fn list_leads(&self, params: &ListLeads) -> Result<()> {
        let leads = self.desk.list_leads_summary(params).await?;
        let title = if params.favorites {
            "# Favorite Leads\n\n"
        } else {
            "# Leads\n\n"
        };
        let output = format!("{title}{leads}");
        self.renderer.render(&output)
    }
}
