use rand::{CryptoRng, Rng, RngCore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("At least one character set must be enabled")]
    NoCharacterSetEnabled,
    #[error("Password length {length} is too short, the enabled character sets need at least {minimum}")]
    InvalidLength { length: usize, minimum: usize },
}

/// A category of characters that can be enabled for password generation.
///
/// Every class is backed by a fixed ASCII alphabet, and no two alphabets share a character.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CharacterClass {
    /// `A-Z`
    Uppercase,
    /// `a-z`
    Lowercase,
    /// `0-9`
    Numbers,
    /// `!@#$%^&*()_+-=[]{}|:,.<>?`
    Special,
}

impl CharacterClass {
    /// All classes, in the order required characters are drawn.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Special,
    ];

    /// The alphabet backing this class.
    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => "0123456789",
            CharacterClass::Special => "!@#$%^&*()_+-=[]{}|:,.<>?",
        }
    }

    /// Whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Password generator request options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordGeneratorRequest {
    /// Include uppercase characters (A-Z).
    pub uppercase: bool,
    /// Include lowercase characters (a-z).
    pub lowercase: bool,
    /// Include numbers (0-9).
    pub numbers: bool,
    /// Include special characters: ! @ # $ % ^ & * ( ) _ + - = [ ] { } | : , . < > ?
    pub special: bool,

    /// The length of the generated password.
    /// Must be at least the number of enabled character sets.
    pub length: usize,
}

const DEFAULT_PASSWORD_LENGTH: usize = 16;

impl Default for PasswordGeneratorRequest {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
            length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl PasswordGeneratorRequest {
    /// Build a request from an explicit set of classes. An empty set is rejected, so requests built
    /// this way always carry at least one enabled class.
    pub fn with_classes(
        length: usize,
        classes: impl IntoIterator<Item = CharacterClass>,
    ) -> Result<Self, PasswordError> {
        let mut request = Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
            length,
        };

        for class in classes {
            match class {
                CharacterClass::Uppercase => request.uppercase = true,
                CharacterClass::Lowercase => request.lowercase = true,
                CharacterClass::Numbers => request.numbers = true,
                CharacterClass::Special => request.special = true,
            }
        }

        if request.enabled_classes().is_empty() {
            return Err(PasswordError::NoCharacterSetEnabled);
        }

        Ok(request)
    }

    /// Whether `class` is enabled by this request.
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Special => self.special,
        }
    }

    /// Enabled classes in [`CharacterClass::ALL`] order. May be empty.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    /// Validates the request and returns an immutable struct with the resolved character sets.
    fn validate_options(&self) -> Result<PasswordGeneratorOptions, PasswordError> {
        let required = self.enabled_classes();

        // An empty selection should be prevented by the caller, fall back to every class so we
        // still produce something usable
        let pool_classes = if required.is_empty() {
            CharacterClass::ALL.to_vec()
        } else {
            required.clone()
        };

        let minimum = required.len().max(1);
        if self.length < minimum {
            return Err(PasswordError::InvalidLength {
                length: self.length,
                minimum,
            });
        }

        let all_chars = pool_classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect();

        Ok(PasswordGeneratorOptions {
            required,
            all_chars,
            length: self.length,
        })
    }
}

/// Resolved form of a [`PasswordGeneratorRequest`].
struct PasswordGeneratorOptions {
    /// Classes that must appear at least once.
    required: Vec<CharacterClass>,
    /// Pool used for the remaining positions. Never empty.
    all_chars: Vec<char>,
    length: usize,
}

/// Implementation of the random password generator using the thread local CSPRNG.
pub(crate) fn password(request: PasswordGeneratorRequest) -> Result<String, PasswordError> {
    password_with_rng(&mut rand::thread_rng(), request)
}

/// Generate a password from `request` using the provided cryptographically secure generator.
pub(crate) fn password_with_rng<R>(
    rng: &mut R,
    request: PasswordGeneratorRequest,
) -> Result<String, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let options = request.validate_options()?;
    debug!(
        length = options.length,
        required = options.required.len(),
        pool = options.all_chars.len(),
        "Generating password"
    );

    let mut buf: Vec<char> = Vec::with_capacity(options.length);

    // One character from every enabled class
    for class in &options.required {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        buf.push(random_char(rng, &alphabet));
    }

    while buf.len() < options.length {
        buf.push(random_char(rng, &options.all_chars));
    }

    // The required characters sit at the front until shuffled
    shuffle(rng, &mut buf);

    Ok(buf.into_iter().collect())
}

/// Uniformly pick one character. `alphabet` must not be empty.
fn random_char<R: Rng + ?Sized>(rng: &mut R, alphabet: &[char]) -> char {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// In-place Fisher-Yates shuffle.
fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
