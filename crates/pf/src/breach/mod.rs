use std::io::BufRead;

use clap::Args;
use color_eyre::eyre::bail;
use passforge_breach::{BreachClientExt, BreachCount, CancellationToken};
use passforge_cli::password_prompt_when_none;
use passforge_core::Client;
use tracing::info;

use crate::render::{CommandOutput, CommandResult};

pub const PASSWORD_ENV: &str = "PF_PASSWORD";

#[derive(Args, Clone)]
pub struct CheckArgs {
    #[arg(
        env = PASSWORD_ENV,
        hide_env_values = true,
        help = "The password to check. Prompted for when omitted."
    )]
    pub password: Option<String>,

    #[arg(long, help = "Only print the count, or -1 if the lookup failed.")]
    pub raw: bool,
}

impl CheckArgs {
    pub async fn run(self, client: &Client, nointeraction: bool) -> CommandResult {
        if self.password.is_none() && nointeraction {
            bail!("No password provided and interactive input is disabled");
        }
        let password = password_prompt_when_none("Password to check:", self.password)?;

        // Ctrl-C resolves the lookup as failed instead of leaving it hanging
        let token = CancellationToken::new();
        let _guard = spawn_ctrl_c_cancel(token.clone());

        let count = client
            .breach()
            .check_with_cancellation(&password, &token)
            .await;

        if let BreachCount::Found(n) = count {
            info!("Password was found {n} times in known breaches");
        }

        Ok(render_count(count, self.raw))
    }
}

#[derive(Args, Clone)]
pub struct CheckManyArgs {
    #[arg(long, help = "Print one count per line, -1 for failed lookups.")]
    pub raw: bool,
}

impl CheckManyArgs {
    pub async fn run(self, client: &Client) -> CommandResult {
        let passwords = read_passwords(std::io::stdin().lock())?;
        let results = client.breach().check_many(passwords).await;

        if self.raw {
            let lines: Vec<String> = results.iter().map(|r| r.sentinel().to_string()).collect();
            return Ok(lines.join("\n").into());
        }

        Ok(CommandOutput::Object(Box::new(results)))
    }
}

fn render_count(count: BreachCount, raw: bool) -> CommandOutput {
    if raw {
        count.sentinel().to_string().into()
    } else {
        CommandOutput::Object(Box::new(count))
    }
}

/// Every line of `input`, with line endings removed. Blank lines are kept so results line up
/// with the input.
fn read_passwords(input: impl BufRead) -> std::io::Result<Vec<String>> {
    input.lines().collect()
}

/// Cancels `token` on Ctrl-C. The listener is aborted when the returned guard is dropped.
fn spawn_ctrl_c_cancel(token: CancellationToken) -> AbortOnDrop {
    AbortOnDrop(tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    }))
}

struct AbortOnDrop(tokio::task::JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
