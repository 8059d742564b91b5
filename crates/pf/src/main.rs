#![doc = include_str!("../README.md")]

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use color_eyre::eyre::Result;
use passforge_cli::install_color_eyre;
use passforge_core::Client;
use tracing_subscriber::{
    EnvFilter, prelude::__tracing_subscriber_SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::{command::*, render::CommandResult};

mod breach;
mod command;
mod platform;
mod render;
mod tools;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // the log level hierarchy is determined by:
    //    - if RUST_LOG is detected at runtime
    //    - if RUST_LOG is provided at compile time
    //    - default to INFO
    let filter = EnvFilter::builder()
        .with_default_directive(
            option_env!("RUST_LOG")
                .unwrap_or("info")
                .parse()
                .expect("should provide valid log level at compile time."),
        )
        // parse directives from the RUST_LOG environment variable,
        // overriding the default directive for matching targets.
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    install_color_eyre(cli.color)?;
    let render_config = render::RenderConfig::new(&cli);

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        return Ok(());
    };

    let result = process_commands(command, &cli.settings, cli.nointeraction).await;

    // Render the result of the command
    render_config.render_result(result)
}

async fn process_commands(
    command: Commands,
    settings: &platform::SettingsArgs,
    nointeraction: bool,
) -> CommandResult {
    match command {
        Commands::Generate(args) => {
            let client = Client::new(None);
            args.run(&client)
        }

        Commands::Check(args) => {
            let client = Client::new(Some(settings.to_client_settings()?));
            args.run(&client, nointeraction).await
        }

        Commands::CheckMany(args) => {
            let client = Client::new(Some(settings.to_client_settings()?));
            args.run(&client).await
        }

        Commands::Completion { shell } => {
            let Some(shell) = shell.or_else(Shell::from_env) else {
                return Ok(
                    "Couldn't autodetect a valid shell. Run `pf completion --help` for more info."
                        .into(),
                );
            };

            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(().into())
        }
    }
}
