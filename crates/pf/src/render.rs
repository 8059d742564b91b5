use clap::ValueEnum;
use passforge_cli::Color;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    JSON,
    YAML,
    None,
}

pub enum CommandOutput {
    Plain(String),
    Object(Box<dyn erased_serde::Serialize>),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<()> for CommandOutput {
    fn from(_: ()) -> Self {
        CommandOutput::Plain(String::new())
    }
}

pub struct RenderConfig {
    pub output: Output,
    pub color: Color,
    pub cleanexit: bool,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            color: cli.color,
            cleanexit: cli.cleanexit,
            quiet: cli.quiet,
        }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        if self.quiet || self.output == Output::None {
            return result.map(|_| ());
        }

        fn pretty_print(language: &str, data: &str, color: Color) -> color_eyre::eyre::Result<()> {
            if color.is_enabled() {
                bat::PrettyPrinter::new()
                    .input_from_bytes(data.as_bytes())
                    .language(language)
                    .print()
                    .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
            } else {
                print!("{}", data);
            }
            Ok(())
        }

        match result {
            // Errors will be passed through to the caller, and rendered by the main function
            Err(e) => Err(e),

            // With cleanexit, we don't print anything on success
            Ok(_) if self.cleanexit => Ok(()),

            // Plain text is just output as is
            Ok(CommandOutput::Plain(text)) => {
                println!("{}", text);
                Ok(())
            }

            // For objects, we serialize them based on the output format
            Ok(CommandOutput::Object(obj)) => match self.output {
                Output::JSON => {
                    let mut json = serde_json::to_string_pretty(&*obj)?;
                    // Yaml serialization adds a newline at the end, so we do the same here for
                    // consistency
                    json.push('\n');
                    pretty_print("json", &json, self.color)
                }
                Output::YAML => {
                    let yaml = serde_yaml::to_string(&*obj)?;
                    pretty_print("yaml", &yaml, self.color)
                }
                Output::None => unreachable!(),
            },
        }
    }
}
