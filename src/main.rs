use clap::Parser;
use ci_notify::structs::cli::Cli;
use ci_notify::workers::command_runner::CommandRunner;

const EXIT_USAGE_ERROR: i32 = 2;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    match runner.run_command(cli.command).await {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("❌ {}", e);
            std::process::exit(EXIT_USAGE_ERROR);
        }
    }
}
