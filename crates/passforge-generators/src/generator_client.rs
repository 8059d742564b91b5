use passforge_core::Client;
use rand::{CryptoRng, RngCore};

use crate::password::{PasswordError, PasswordGeneratorRequest, password, password_with_rng};

/// Client for generating passwords.
pub struct GeneratorClient {
    #[allow(dead_code)]
    client: Client,
}

impl GeneratorClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    /// Generates a random password.
    ///
    /// The character sets and password length can be customized using the `input` parameter. At
    /// least one character from every enabled set is always included.
    ///
    /// # Examples
    ///
    /// ```
    /// use passforge_core::Client;
    /// use passforge_generators::{GeneratorClientsExt, PasswordError, PasswordGeneratorRequest};
    ///
    /// fn test() -> Result<(), PasswordError> {
    ///     let input = PasswordGeneratorRequest {
    ///         lowercase: true,
    ///         uppercase: true,
    ///         numbers: true,
    ///         length: 20,
    ///         ..Default::default()
    ///     };
    ///     let password = Client::new(None).generator().password(input)?;
    ///     println!("{}", password);
    ///     Ok(())
    /// }
    /// ```
    pub fn password(&self, input: PasswordGeneratorRequest) -> Result<String, PasswordError> {
        password(input)
    }

    /// Generates a random password using a caller supplied random generator.
    ///
    /// Only cryptographically secure generators are accepted.
    pub fn password_with_rng<R>(
        &self,
        rng: &mut R,
        input: PasswordGeneratorRequest,
    ) -> Result<String, PasswordError>
    where
        R: RngCore + CryptoRng,
    {
        password_with_rng(rng, input)
    }
}

#[allow(missing_docs)]
pub trait GeneratorClientsExt {
    fn generator(&self) -> GeneratorClient;
}

impl GeneratorClientsExt for Client {
    fn generator(&self) -> GeneratorClient {
        GeneratorClient::new(self.clone())
    }
}
