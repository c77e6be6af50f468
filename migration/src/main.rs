use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use migration::database::DatabaseTarget;
use migration::Migrator;
use sea_orm_migration::prelude::*;

/// Database lifecycle commands. Everything else (`up`, `down`, `fresh`,
/// `status`, ...) goes to the sea-orm-migration CLI.
#[derive(Parser, Debug)]
#[command(name = "migration", version)]
struct DatabaseCli {
    #[command(subcommand)]
    command: DatabaseCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum DatabaseCommand {
    /// Create the database named in DATABASE_URL if it does not exist.
    CreateDb,
    /// Drop the database named in DATABASE_URL.
    DropDb {
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

impl DatabaseCommand {
    const NAMES: [&'static str; 2] = ["create-db", "drop-db"];

    fn handles(arg: Option<&str>) -> bool {
        arg.is_some_and(|arg| Self::NAMES.contains(&arg))
    }
}

#[async_std::main]
async fn main() {
    if !DatabaseCommand::handles(std::env::args().nth(1).as_deref()) {
        cli::run_cli(Migrator).await;
        return;
    }

    let result = match DatabaseCli::parse().command {
        DatabaseCommand::CreateDb => create_db().await,
        DatabaseCommand::DropDb { yes } => drop_db(yes).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn target_from_env() -> Result<DatabaseTarget, DbErr> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_string()))?;
    DatabaseTarget::parse(&database_url)
}

async fn create_db() -> Result<(), DbErr> {
    let target = target_from_env()?;

    if target.create_database().await? {
        println!("Database {} created", target.name());
    } else {
        println!("Database {} already exists", target.name());
    }
    Ok(())
}

async fn drop_db(assume_yes: bool) -> Result<(), DbErr> {
    let target = target_from_env()?;

    if !assume_yes && !confirm(&format!(
        "Are you sure you want to drop database {}? This action cannot be undone. [y/N] ",
        target.name()
    )) {
        println!("Aborted");
        return Ok(());
    }

    if target.drop_database().await? {
        println!("Database {} has been dropped", target.name());
    } else {
        println!("Database {} does not exist", target.name());
    }
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<DatabaseCommand, clap::Error> {
        DatabaseCli::try_parse_from(std::iter::once("migration").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        DatabaseCli::command().debug_assert();
    }

    #[test]
    fn test_parses_database_commands() {
        assert_eq!(parse(&["create-db"]).unwrap(), DatabaseCommand::CreateDb);
        assert_eq!(
            parse(&["drop-db"]).unwrap(),
            DatabaseCommand::DropDb { yes: false }
        );
        assert_eq!(
            parse(&["drop-db", "--yes"]).unwrap(),
            DatabaseCommand::DropDb { yes: true }
        );
        assert_eq!(
            parse(&["drop-db", "-y"]).unwrap(),
            DatabaseCommand::DropDb { yes: true }
        );
    }

    #[test]
    fn test_drop_db_help_does_not_prompt() {
        let err = parse(&["drop-db", "--help"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_rejects_unexpected_arguments() {
        assert!(parse(&["create-db", "bogus"]).is_err());
        assert!(parse(&["drop-db", "--force"]).is_err());
    }

    #[test]
    fn test_only_database_commands_are_intercepted() {
        assert!(DatabaseCommand::handles(Some("create-db")));
        assert!(DatabaseCommand::handles(Some("drop-db")));
        assert!(!DatabaseCommand::handles(Some("up")));
        assert!(!DatabaseCommand::handles(Some("--help")));
        assert!(!DatabaseCommand::handles(None));
    }
}
