//! Locale definitions and translation quality checks.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe `Locale` validated against the registry
//! - `validator`: Acceptance checks for candidate translations
//! - `metrics`: Per-run translation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use label_translator::i18n::{Locale, TranslationValidator};
//!
//! let french = Locale::from_code("fr")?;
//! assert!(TranslationValidator::is_acceptable("Hi {$name}", Some("Salut {$name}")));
//! ```

mod locale;
mod metrics;
mod registry;
mod validator;

pub use locale::{parse_locale_list, Locale};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{TranslationValidator, ValidationReport};
