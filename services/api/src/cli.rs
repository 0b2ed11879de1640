use crate::demo::{run_demo, run_industries, run_recommend, DemoArgs, RecommendArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Score team readiness and plan next career steps from a roster CSV",
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
    /// Evaluate a roster CSV and print a report or write the enriched CSV
    Recommend(RecommendArgs),
    /// Evaluate the bundled sample roster
    Demo(DemoArgs),
    /// List the supported industry contexts
    Industries,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args).await,
        Command::Demo(args) => run_demo(args).await,
        Command::Industries => {
            run_industries();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::workflows::progression::IndustryContext;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["career-compass-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn recommend_parses_industry_labels_and_keys() {
        let cli = Cli::try_parse_from([
            "career-compass-api",
            "recommend",
            "--roster",
            "team.csv",
            "--industry",
            "Retail / E-commerce",
            "--with-narrative",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.industry, Some(IndustryContext::RetailEcommerce));
                assert!(args.with_narrative);
                assert!(args.output.is_none());
            }
            other => panic!("expected recommend command, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["career-compass-api", "demo", "--industry", "public_sector"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.industry, Some(IndustryContext::PublicSector))
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }

    #[test]
    fn recommend_rejects_unknown_industry() {
        let result = Cli::try_parse_from([
            "career-compass-api",
            "recommend",
            "--roster",
            "team.csv",
            "--industry",
            "Aerospace",
        ]);
        assert!(result.is_err());
    }
}
