#![doc = include_str!("../README.md")]

mod generator_client;
mod password;

pub use generator_client::{GeneratorClient, GeneratorClientsExt};
pub use password::{CharacterClass, PasswordError, PasswordGeneratorRequest};
