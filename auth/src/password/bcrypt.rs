use super::errors::PasswordError;

/// Maximum number of password bytes the bcrypt primitive consumes.
///
/// Input beyond this limit is ignored by the algorithm: two passwords that
/// agree on their first 72 bytes produce the same hash. Truncation is applied
/// explicitly on both hashing and verification so the contract is visible
/// here rather than buried in the primitive.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing implementation.
///
/// Provides one-way salted hashing and verification (internally uses bcrypt).
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the default cost factor.
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// Lower costs keep test suites fast; production should stay at the
    /// default.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password.
    ///
    /// A fresh random salt is generated on every call, so hashing the same
    /// password twice yields different strings. The salt and cost are embedded
    /// in the returned modular-crypt hash.
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(truncated(password), self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The digest comparison is delegated to the bcrypt crate, which compares
    /// in constant time. A malformed stored hash verifies as `false`; it must
    /// never surface as an error that callers could mistake for a pass.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(truncated(password), hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn truncated(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(MAX_PASSWORD_BYTES)]
}
