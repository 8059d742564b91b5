use clap::Args;
use passforge_core::Client;
use passforge_generators::{GeneratorClientsExt, PasswordGeneratorRequest};

use crate::render::CommandResult;

#[derive(Args, Clone)]
pub struct GenerateArgs {
    #[arg(short = 'u', long, action, help = "Include uppercase characters (A-Z)")]
    pub uppercase: bool,

    #[arg(short = 'l', long, action, help = "Include lowercase characters (a-z)")]
    pub lowercase: bool,

    #[arg(short = 'n', long, action, help = "Include numbers (0-9)")]
    pub numbers: bool,

    #[arg(
        short = 's',
        long,
        action,
        help = "Include special characters (!@#$%^&*()_+-=[]{}|:,.<>?)"
    )]
    pub special: bool,

    #[arg(long, default_value = "16", help = "Length of generated password")]
    pub length: usize,
}

impl GenerateArgs {
    pub fn run(&self, client: &Client) -> CommandResult {
        let password = client.generator().password(self.to_request())?;
        Ok(password.into())
    }

    fn to_request(&self) -> PasswordGeneratorRequest {
        // No flags means every character set, same as the request default
        if !(self.uppercase || self.lowercase || self.numbers || self.special) {
            return PasswordGeneratorRequest {
                length: self.length,
                ..Default::default()
            };
        }

        PasswordGeneratorRequest {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            numbers: self.numbers,
            special: self.special,
            length: self.length,
        }
    }
}
