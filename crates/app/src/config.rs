//! Application configuration loaded from environment variables.

use ledger::{CardPayment, CashPayment, PaymentError, PaymentStrategy};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Output format of the end-of-session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Card used to settle the session.
#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub holder: String,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"<redacted>")
            .field("holder", &self.holder)
            .finish()
    }
}

/// Session configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
/// - `REPORT_FORMAT`: `text` or `json` (default: `text`)
/// - `PRINT_METRICS`: print the Prometheus exposition at exit (default: `false`)
/// - `CARD_NUMBER` / `CARD_HOLDER`: pay by card; cash when either is unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub report_format: ReportFormat,
    pub print_metrics: bool,
    pub card: Option<CardDetails>,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        let report_format = match lookup("REPORT_FORMAT").as_deref() {
            Some(v) if v.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        };
        let card = match (lookup("CARD_NUMBER"), lookup("CARD_HOLDER")) {
            (Some(number), Some(holder)) => Some(CardDetails { number, holder }),
            _ => None,
        };

        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format,
            report_format,
            print_metrics: lookup("PRINT_METRICS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            card,
        }
    }

    /// Builds the payment strategy for this session.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the configured card is invalid.
    pub fn payment_strategy(&self) -> Result<Box<dyn PaymentStrategy>, PaymentError> {
        match &self.card {
            Some(card) => Ok(Box::new(CardPayment::new(&card.number, card.holder.clone())?)),
            None => Ok(Box::new(CashPayment)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            report_format: ReportFormat::Text,
            print_metrics: false,
            card: None,
        }
    }
}
