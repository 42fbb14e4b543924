// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Taskdeck - terminal client for the remote task-management API.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taskdeck_core::{TodoPriority, TodoStatus};

mod commands;
mod context;
mod render;
mod term;

use context::AppContext;

/// Taskdeck - manage tasks and projects from the terminal.
#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about, long_about = None)]
struct Cli {
    /// Answer yes to every confirmation prompt.
    #[arg(long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and store the session locally.
    Login {
        username: String,
        /// Password; prompted for interactively when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and log in.
    Signup {
        username: String,
        email: String,
        #[arg(long)]
        password: Option<String>,
    },
    /// Clear the stored session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// List tasks.
    List {
        #[arg(long)]
        keyword: Option<String>,
        /// Filter by status (open, in-progress, done).
        #[arg(long)]
        status: Option<TodoStatus>,
        /// Filter by priority (high, medium, low).
        #[arg(long)]
        priority: Option<TodoPriority>,
        /// Filter by project id.
        #[arg(long)]
        project: Option<i64>,
        /// Page number, 0-based.
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one task in detail.
    Show { id: i64 },
    /// Create a task.
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TodoPriority>,
        /// Due date, YYYY-MM-DD or RFC 3339.
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        project: Option<i64>,
    },
    /// Edit fields of a task.
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<TodoPriority>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        project: Option<i64>,
    },
    /// Change the status of a task.
    Status { id: i64, status: TodoStatus },
    /// Mark one or more tasks done.
    Done {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Delete one or more tasks (several ids use one bulk request).
    Rm {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Show aggregate task counters.
    Stats,
    /// Show the dashboard summary.
    Dashboard,
    /// Manage projects.
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage saved task templates.
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ProjectCommands {
    /// List projects, default first.
    List,
    /// Create a project.
    Add {
        name: String,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        position: Option<i32>,
        /// Make this the default project.
        #[arg(long)]
        default: bool,
    },
    /// Edit fields of a project.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        position: Option<i32>,
    },
    /// Delete a project.
    Rm { id: i64 },
    /// Show the default project, or make the given project the default.
    Default { id: Option<i64> },
}

#[derive(Subcommand, Debug)]
enum TemplateCommands {
    /// List saved templates.
    List,
    /// Save a task as a reusable template.
    Save { todo_id: i64, name: String },
    /// Delete a template.
    Rm { id: i64 },
    /// Create a new task from a template.
    Apply { id: i64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match taskdeck_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            taskdeck_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.client.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = match AppContext::build(config, cli.yes) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let ok = run(&ctx, cli.command).await;
    if !ok {
        std::process::exit(1);
    }
}

async fn run(ctx: &AppContext, command: Commands) -> bool {
    match command {
        Commands::Login { username, password } => commands::login(ctx, username, password).await,
        Commands::Signup {
            username,
            email,
            password,
        } => commands::signup(ctx, username, email, password).await,
        Commands::Logout => commands::logout(ctx),
        Commands::Whoami => commands::whoami(ctx),
        Commands::List {
            keyword,
            status,
            priority,
            project,
            page,
        } => commands::list(ctx, keyword, status, priority, project, page).await,
        Commands::Show { id } => commands::show(ctx, id).await,
        Commands::Add {
            title,
            description,
            priority,
            due,
            project,
        } => commands::add(ctx, title, description, priority, due, project).await,
        Commands::Edit {
            id,
            title,
            description,
            priority,
            due,
            project,
        } => commands::edit(ctx, id, title, description, priority, due, project).await,
        Commands::Status { id, status } => commands::set_status(ctx, id, status).await,
        Commands::Done { ids } => commands::done(ctx, ids).await,
        Commands::Rm { ids } => commands::remove(ctx, ids).await,
        Commands::Stats => commands::stats(ctx).await,
        Commands::Dashboard => commands::dashboard(ctx).await,
        Commands::Project { command } => match command {
            ProjectCommands::List => commands::project_list(ctx).await,
            ProjectCommands::Add {
                name,
                color,
                position,
                default,
            } => commands::project_add(ctx, name, color, position, default).await,
            ProjectCommands::Edit {
                id,
                name,
                color,
                position,
            } => commands::project_edit(ctx, id, name, color, position).await,
            ProjectCommands::Rm { id } => commands::project_remove(ctx, id).await,
            ProjectCommands::Default { id } => commands::project_default(ctx, id).await,
        },
        Commands::Template { command } => match command {
            TemplateCommands::List => commands::template_list(ctx),
            TemplateCommands::Save { todo_id, name } => {
                commands::template_save(ctx, todo_id, name).await
            }
            TemplateCommands::Rm { id } => commands::template_remove(ctx, id),
            TemplateCommands::Apply { id } => commands::template_apply(ctx, id).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rm_accepts_multiple_ids() {
        let cli = Cli::parse_from(["taskdeck", "rm", "1", "2", "3", "--yes"]);
        assert!(cli.yes);
        match cli.command {
            Commands::Rm { ids } => assert_eq!(ids, vec![1, 2, 3]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn status_parses_kebab_case() {
        let cli = Cli::parse_from(["taskdeck", "status", "5", "in-progress"]);
        match cli.command {
            Commands::Status { id, status } => {
                assert_eq!(id, 5);
                assert_eq!(status, taskdeck_core::TodoStatus::InProgress);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
