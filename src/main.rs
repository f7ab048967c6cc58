// ABOUTME: Entry point for the uniapp binary, a command-line front-end to the enrolment portal.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the record store, and dispatches commands.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use uniapp_core::Student;
use uniapp_portal::{Controller, PortalConfig, admin, open_store};
use uniapp_store::RecordStore;

#[derive(Debug, Parser)]
#[command(name = "uniapp", version, about = "Student enrolment portal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Args)]
struct Credentials {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new student.
    Register {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        name: String,
    },
    /// Check credentials and print the student's details.
    Login {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Enrol in a randomly assigned subject.
    Enrol {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Drop an enrolled subject.
    RemoveSubject {
        #[command(flatten)]
        credentials: Credentials,
        subject_id: String,
    },
    /// List enrolled subjects.
    Subjects {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Change the logged-in student's password.
    ChangePassword {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirm: String,
    },
    /// List every registered student.
    Students,
    /// Group students by overall grade.
    Grades,
    /// Split students into passing and failing.
    PassFail,
    /// Remove a student by id.
    RemoveStudent { student_id: String },
    /// Remove every student.
    Clear,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "uniapp=info,uniapp_store=info,uniapp_portal=info",
                )
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = PortalConfig::from_env()?;
    tracing::debug!("using record file {}", config.data_file.display());

    let mut store = open_store(&config)
        .with_context(|| format!("opening {}", config.data_file.display()))?;

    run(cli.command, &mut store)
}

fn run(command: Command, store: &mut RecordStore) -> anyhow::Result<()> {
    match command {
        Command::Register { credentials, name } => {
            let mut ctl = Controller::new(store);
            let student = ctl.register(&credentials.email, &credentials.password, &name)?;
            println!("Registered {} with id {}", student.name, student.student_id);
        }
        Command::Login { credentials } => {
            let mut ctl = Controller::new(store);
            let student = login(&mut ctl, &credentials)?;
            println!("Student: {}, ID: {}", student.name, student.student_id);
        }
        Command::Enrol { credentials } => {
            let mut ctl = Controller::new(store);
            login(&mut ctl, &credentials)?;
            let subject = ctl.enrol_subject()?;
            println!("Enrolled in {}", subject);
        }
        Command::RemoveSubject {
            credentials,
            subject_id,
        } => {
            let mut ctl = Controller::new(store);
            login(&mut ctl, &credentials)?;
            let subject = ctl.remove_subject(&subject_id)?;
            println!("Removed {}", subject);
        }
        Command::Subjects { credentials } => {
            let mut ctl = Controller::new(store);
            login(&mut ctl, &credentials)?;
            let subjects = ctl.list_enrolled_subjects()?;
            if subjects.is_empty() {
                println!("< Nothing to display >");
            }
            for subject in subjects {
                println!("{}", subject);
            }
        }
        Command::ChangePassword {
            credentials,
            new_password,
            confirm,
        } => {
            let mut ctl = Controller::new(store);
            login(&mut ctl, &credentials)?;
            ctl.change_password(&new_password, &confirm)?;
            println!("Password changed");
        }
        Command::Students => {
            if store.is_empty() {
                println!("< Nothing to display >");
            }
            for s in store.list_all() {
                println!("{} :: {} --> Email: {}", s.name, s.student_id, s.email);
            }
        }
        Command::Grades => {
            let groups = admin::group_by_grade(store);
            if groups.is_empty() {
                println!("< Nothing to display >");
            }
            for (grade, students) in groups {
                println!("{} --> [{}]", grade, roster(&students));
            }
        }
        Command::PassFail => {
            let (pass, fail) = admin::partition_pass_fail(store);
            println!("PASS --> [{}]", roster(&pass));
            println!("FAIL --> [{}]", roster(&fail));
        }
        Command::RemoveStudent { student_id } => {
            if admin::remove_student(store, &student_id)? {
                println!("Removed student {}", student_id);
            } else {
                bail!("student {} does not exist", student_id);
            }
        }
        Command::Clear => {
            admin::clear_all(store)?;
            println!("All students cleared");
        }
    }
    Ok(())
}

fn login(
    ctl: &mut Controller<'_>,
    credentials: &Credentials,
) -> anyhow::Result<Student> {
    match ctl.authenticate(&credentials.email, &credentials.password) {
        Some(student) => Ok(student),
        None => bail!("incorrect credentials"),
    }
}

fn roster(students: &[&Student]) -> String {
    students
        .iter()
        .map(|s| format!("{} :: {}", s.name, s.student_id))
        .collect::<Vec<_>>()
        .join(", ")
}
