//! Minimal CLI collaborator for the taskpad core.
//!
//! # Responsibility
//! - Stand in for the excluded browser UI: drive the credential and task
//!   stores through their public interfaces only.
//! - Render field-level validation errors and redirect on missing sessions.
//!
//! Database path comes from `TASKPAD_DB` (default `taskpad.sqlite3` in the
//! working directory); file logging activates when `TASKPAD_LOG_DIR` is set
//! to an absolute directory.

use std::process::ExitCode;

use taskpad_core::db::open_db;
use taskpad_core::{
    format_date, AuthError, CredentialService, KvCredentialRepository, KvTaskRepository,
    TaskError, TaskService, ValidationError,
};

const USAGE: &str = "usage: taskpad <command> [args]

commands:
  register <name> <email> <password>   create an account and sign in
  login <email> <password>             sign in
  logout                               sign out
  whoami                               show the signed-in account
  add <text> <date YYYY-MM-DD>         add a task
  rm <id>                              remove a task
  list                                 show all tasks
  find <query>                         filter tasks by text
  version                              print core version";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(CliError::Unauthenticated) => {
            eprintln!("not signed in; run `taskpad login <email> <password>` first");
            ExitCode::from(3)
        }
        Err(CliError::Field { field, message }) => {
            eprintln!("invalid {field}: {message}");
            ExitCode::FAILURE
        }
        Err(CliError::Other(message)) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

enum CliError {
    Usage(String),
    Unauthenticated,
    Field {
        field: &'static str,
        message: String,
    },
    Other(String),
}

impl From<AuthError> for CliError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::Validation(err) => Self::Field {
                field: err.field(),
                message: err.to_string(),
            },
            AuthError::Unauthenticated => Self::Unauthenticated,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<TaskError> for CliError {
    fn from(value: TaskError) -> Self {
        match value {
            TaskError::Unauthenticated => Self::Unauthenticated,
            TaskError::Storage(err) => Self::Other(err.to_string()),
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };

    if command == "version" {
        println!("taskpad_core {}", taskpad_core::core_version());
        return Ok(());
    }

    if let Ok(log_dir) = std::env::var("TASKPAD_LOG_DIR") {
        taskpad_core::init_logging(taskpad_core::default_log_level(), &log_dir)
            .map_err(CliError::Other)?;
    }

    let db_path =
        std::env::var("TASKPAD_DB").unwrap_or_else(|_| "taskpad.sqlite3".to_string());
    let conn = open_db(&db_path).map_err(|err| CliError::Other(err.to_string()))?;
    let auth = CredentialService::new(KvCredentialRepository::new(&conn));

    match (command.as_str(), &args[1..]) {
        ("register", [name, email, password]) => {
            let user = auth.register(name, email, password)?;
            println!("registered and signed in as {} <{}>", user.name, user.email);
        }
        ("login", [email, password]) => {
            let user = auth.authenticate(email, password)?;
            println!("signed in as {} <{}>", user.name, user.email);
        }
        ("logout", []) => {
            auth.end_session()?;
            println!("signed out");
        }
        ("whoami", []) => {
            let user = auth.require_session()?;
            println!("{} <{}>", user.name, user.email);
        }
        ("add", [text, date]) => {
            let credentials = KvCredentialRepository::new(&conn);
            let mut tasks =
                TaskService::for_current_session(&credentials, KvTaskRepository::new(&conn))?;
            if !taskpad_core::is_non_empty(text) {
                return Err(CliError::Field {
                    field: "text",
                    message: "task text must not be blank".to_string(),
                });
            }
            let task = tasks.add(text.trim(), format_date(date))?;
            println!("added #{} {} ({})", task.id, task.text, task.date);
        }
        ("rm", [id]) => {
            let id: u64 = id
                .parse()
                .map_err(|_| CliError::Usage(format!("`{id}` is not a task id")))?;
            let credentials = KvCredentialRepository::new(&conn);
            let mut tasks =
                TaskService::for_current_session(&credentials, KvTaskRepository::new(&conn))?;
            tasks.remove(id)?;
            println!("removed #{id} (if it existed)");
        }
        ("list", []) => {
            let credentials = KvCredentialRepository::new(&conn);
            let tasks =
                TaskService::for_current_session(&credentials, KvTaskRepository::new(&conn))?;
            print_tasks(tasks.list().iter());
        }
        ("find", [query]) => {
            let credentials = KvCredentialRepository::new(&conn);
            let tasks =
                TaskService::for_current_session(&credentials, KvTaskRepository::new(&conn))?;
            print_tasks(tasks.filter(query).into_iter());
        }
        _ => {
            return Err(CliError::Usage(format!(
                "unknown command or wrong arguments: `{command}`"
            )));
        }
    }

    Ok(())
}

fn print_tasks<'a>(tasks: impl Iterator<Item = &'a taskpad_core::Task>) {
    let mut empty = true;
    for task in tasks {
        empty = false;
        println!("#{}\t{}\t{}", task.id, task.date, task.text);
    }
    if empty {
        println!("(no tasks)");
    }
}
