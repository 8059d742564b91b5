use clap::ValueEnum;
use color_eyre::{Result, config::HookBuilder};

/// When to colorize output.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    No,
    Auto,
    Always,
}

impl Color {
    /// Resolve `Auto` against the capabilities of stdout.
    pub fn is_enabled(self) -> bool {
        match self {
            Color::No => false,
            Color::Auto => supports_color::on(supports_color::Stream::Stdout).is_some(),
            Color::Always => true,
        }
    }
}

/// Install color_eyre's panic and error report handlers, colored only when `color` allows it.
pub fn install_color_eyre(color: Color) -> Result<()> {
    if color.is_enabled() {
        color_eyre::install()
    } else {
        // Use an empty theme to disable error coloring
        HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()
    }
}
