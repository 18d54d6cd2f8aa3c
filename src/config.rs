use std::env;
use std::time::Duration;

use crate::error::{MktError, MktResult};
use crate::validation;

pub const DEFAULT_TOKEN_VAR: &str = "MARKETEER_TOKEN";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which list the REPL manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Campaigns,
    Contacts,
}

impl ResourceKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "campaigns" | "campaign" => Some(ResourceKind::Campaigns),
            "contacts" | "contact" => Some(ResourceKind::Contacts),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Campaigns => "Campaigns",
            ResourceKind::Contacts => "Contacts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// REST API root. `None` runs offline against demo data.
    pub api_url: Option<String>,
    /// Environment variable holding the bearer token.
    pub token_var: String,
    pub resource: ResourceKind,
    pub page_size: usize,
    pub timeout: Duration,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            token_var: DEFAULT_TOKEN_VAR.to_string(),
            resource: ResourceKind::default(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Defaults overlaid with `MARKETEER_*` environment variables.
    pub fn from_env() -> MktResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MktResult<Self> {
        let mut config = Config::default();
        if let Some(url) = validation::trim_optional(lookup("MARKETEER_API_URL").as_deref()) {
            config.api_url = Some(url);
        }
        if let Some(var) = validation::trim_optional(lookup("MARKETEER_TOKEN_VAR").as_deref()) {
            config.token_var = var;
        }
        if let Some(raw) = lookup("MARKETEER_PAGE_SIZE") {
            config.page_size = validation::parse_positive(&raw, "MARKETEER_PAGE_SIZE")?;
        }
        if let Some(raw) = lookup("MARKETEER_TIMEOUT_SECS") {
            let secs = validation::parse_positive(&raw, "MARKETEER_TIMEOUT_SECS")?;
            config.timeout = Duration::from_secs(secs as u64);
        }
        Ok(config)
    }

    /// Applies command-line flags on top of this config.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> MktResult<Invocation> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" | "-u" => {
                    self.api_url = Some(required_value(&mut args, "--api-url")?);
                }
                "--offline" => self.api_url = None,
                "--token-var" => {
                    self.token_var = required_value(&mut args, "--token-var")?;
                }
                "--resource" | "-r" => {
                    let raw = required_value(&mut args, "--resource")?;
                    self.resource = ResourceKind::parse(&raw).ok_or_else(|| MktError::InvalidField {
                        field: "--resource".into(),
                        reason: format!("'{}' is not campaigns or contacts", raw),
                    })?;
                }
                "--page-size" | "-n" => {
                    let raw = required_value(&mut args, "--page-size")?;
                    self.page_size = validation::parse_positive(&raw, "--page-size")?;
                }
                "--verbose" | "-v" => self.verbose = true,
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(MktError::Other(format!(
                        "Unknown argument: {}\nUse --help for usage information.",
                        other
                    )))
                }
            }
        }
        Ok(Invocation::Run(self))
    }
}

fn required_value(args: &mut impl Iterator<Item = String>, flag: &str) -> MktResult<String> {
    args.next()
        .and_then(|v| validation::trim_optional(Some(v.as_str())))
        .ok_or_else(|| MktError::Other(format!("{} requires a value", flag)))
}

pub fn usage() -> &'static str {
    r#"Marketeer - campaign and contact lists

Usage: marketeer [OPTIONS]

Options:
  -u, --api-url <URL>      REST API root (default: $MARKETEER_API_URL, else offline)
      --offline            Ignore any configured API and use demo data
      --token-var <VAR>    Environment variable holding the bearer token (default: MARKETEER_TOKEN)
  -r, --resource <KIND>    campaigns or contacts (default: campaigns)
  -n, --page-size <N>      Rows per page (default: 5)
  -v, --verbose            Debug logging on stderr
  -h, --help               Show this help"#
}
