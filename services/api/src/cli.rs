use crate::demo::{
    run_analytics, run_dashboard, run_demo, run_leaderboard, AnalyticsArgs, DashboardArgs,
    DemoArgs, LeaderboardArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use campus_achievements::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Campus Achievements",
    about = "Run the student achievement tracker or print its reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the points leaderboard
    Leaderboard(LeaderboardArgs),
    /// Print the dashboard headline counts and recent activity
    Dashboard(DashboardArgs),
    /// Print distributions, top lists and monthly activity for a year
    Analytics(AnalyticsArgs),
    /// Walk through a submit, review and ranking session on the sample data
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the record store from a CSV export instead of the sample dataset
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leaderboard(args) => run_leaderboard(args),
        Command::Dashboard(args) => run_dashboard(args),
        Command::Analytics(args) => run_analytics(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["campus-achievements-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn report_flags_parse() {
        let cli = Cli::try_parse_from([
            "campus-achievements-api",
            "analytics",
            "--year",
            "2025",
            "--csv",
            "records.csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Analytics(args)) => {
                assert_eq!(args.year, Some(2025));
                assert_eq!(args.csv, Some(PathBuf::from("records.csv")));
            }
            other => panic!("expected analytics command, got {other:?}"),
        }
    }

    #[test]
    fn leaderboard_limit_must_be_numeric() {
        assert!(Cli::try_parse_from(["campus-achievements-api", "leaderboard", "--limit", "ten"])
            .is_err());
    }
}
