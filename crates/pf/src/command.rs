use clap::{Parser, Subcommand};
use passforge_cli::Color;

use crate::{
    breach::{CheckArgs, CheckManyArgs},
    platform::SettingsArgs,
    render::Output,
    tools::GenerateArgs,
};

#[derive(Parser, Clone)]
#[command(name = "pf", bin_name = "pf", version, about = "Passforge CLI", long_about = None, disable_version_flag = true)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::JSON)]
    pub output: Output,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[arg(
        long,
        global = true,
        help = "Exit with a success exit code (0) unless an error is thrown."
    )]
    pub cleanexit: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        help = "Do not prompt for interactive user input."
    )]
    pub nointeraction: bool,

    // Clap uses uppercase V for the short flag by default, we want lowercase v
    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    pub version: (),
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(long_about = "Generate a random password.")]
    #[command(after_help = r#"Notes:
    Without any character set flag all four sets are used.
    The length must be at least the number of enabled character sets.
    Default length is 16.

Examples:
    pf generate
    pf generate -u -l --length 18
    pf generate -ulns --length 25
    pf generate -n --length 6
    "#)]
    Generate(GenerateArgs),

    #[command(
        long_about = "Check how many times a password appears in known data breaches.",
        after_help = r#"Only the first five characters of the password's SHA-1 hash are sent to the
breach lookup service.

Example return value:
  {
    "type": "Found",
    "value": 42
  }

Notes:
  `type` is one of:
    - `Found` with the number of times the password was seen, 0 when it was never seen
    - `Failed` with a description when the lookup could not be completed
  With `--raw` only the count is printed, or -1 when the lookup failed.
"#
    )]
    Check(CheckArgs),

    #[command(
        long_about = "Check newline separated passwords read from stdin. Prints one result per line, in input order."
    )]
    CheckMany(CheckManyArgs),

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },
}
