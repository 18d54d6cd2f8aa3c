use std::env;

use crate::error::{MktError, MktResult};

/// Supplies the bearer token for each outbound request. Asked once per call,
/// so a provider backed by a refreshing session always hands out a live token.
pub trait TokenProvider {
    fn bearer_token(&self) -> MktResult<String>;
}

/// A fixed token, e.g. from a test fixture or a one-off login.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> MktResult<String> {
        non_blank_token(&self.0, "<static>")
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn bearer_token(&self) -> MktResult<String> {
        let value = env::var(&self.var).unwrap_or_default();
        non_blank_token(&value, &self.var)
    }
}

fn non_blank_token(value: &str, var: &str) -> MktResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(MktError::MissingToken { var: var.to_string() })
    } else {
        Ok(trimmed.to_string())
    }
}

/// `Authorization` header value for a token.
pub fn bearer_header(provider: &dyn TokenProvider) -> MktResult<String> {
    Ok(format!("Bearer {}", provider.bearer_token()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_builds_header() {
        let header = bearer_header(&StaticToken::new(" abc123 ")).unwrap();
        assert_eq!(header, "Bearer abc123");
    }

    #[test]
    fn blank_static_token_is_missing() {
        assert!(matches!(
            StaticToken::new("  ").bearer_token(),
            Err(MktError::MissingToken { .. })
        ));
    }

    #[test]
    fn unset_env_token_names_the_variable() {
        let provider = EnvToken::new("MARKETEER_TEST_TOKEN_THAT_IS_NEVER_SET");
        match provider.bearer_token() {
            Err(MktError::MissingToken { var }) => {
                assert_eq!(var, "MARKETEER_TEST_TOKEN_THAT_IS_NEVER_SET")
            }
            other => panic!("expected MissingToken, got {:?}", other),
        }
    }
}
