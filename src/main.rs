use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use label_translator::audit::audit_locales;
use label_translator::config::{Config, ProviderConfig};
use label_translator::deepl::DeeplTranslator;
use label_translator::i18n::Locale;
use label_translator::openai::OpenAiTranslator;
use label_translator::orchestrator::Orchestrator;
use label_translator::router::TranslationRouter;
use label_translator::store::LocaleStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "label-translator",
    version,
    about = "Translate UI labels across per-locale JSON dictionaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of `<locale>.json` files (overrides LOCALES_DIR).
    #[arg(short, long)]
    locales_dir: Option<PathBuf>,

    /// Source locale code (overrides SOURCE_LOCALE).
    #[arg(short, long)]
    source: Option<Locale>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate labels from the source locale into every configured locale.
    Translate {
        /// Label keys to translate.
        #[arg(required = true)]
        labels: Vec<String>,

        /// Also translate into the source locale itself.
        #[arg(long)]
        include_source: bool,
    },
    /// Report missing, untranslated and placeholder-mismatched labels.
    Audit {
        /// Exit with an error when any issue is found.
        #[arg(long)]
        strict: bool,
    },
    /// List supported locales and the provider each one is routed to.
    Locales,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("label_translator=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.locales_dir {
        config.locales_dir = dir;
    }
    if let Some(source) = cli.source {
        config.source_locale = source;
    }

    match cli.command {
        Commands::Translate {
            labels,
            include_source,
        } => {
            if include_source {
                config.locale_settings.skip_source_locale = false;
            }
            translate(&config, &labels).await
        }
        Commands::Audit { strict } => audit(&config, strict),
        Commands::Locales => {
            list_locales(&config);
            Ok(())
        }
    }
}

async fn translate(config: &Config, labels: &[String]) -> Result<()> {
    let provider_config = ProviderConfig::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(provider_config.request_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let router = TranslationRouter::new(
        Arc::new(OpenAiTranslator::new(client.clone(), &provider_config)),
        Arc::new(DeeplTranslator::new(client, &provider_config)),
        config.locale_settings.openai_locales.clone(),
    );

    let store = LocaleStore::new(&config.locales_dir);
    let source = store
        .load(config.source_locale)
        .context("Failed to load source locale")?;

    info!(
        "Translating {} label(s) from {} in {}",
        labels.len(),
        source.locale,
        store.dir().display()
    );

    let orchestrator = Orchestrator::from_settings(store, router, &config.locale_settings);
    orchestrator.translate_labels(&source, labels).await;

    let report = orchestrator.metrics().report();
    info!(
        "Run finished: {} saved, {} rejected, {} failed ({:.1}% success)",
        report.saved, report.rejected, report.failed, report.success_rate
    );
    Ok(())
}

fn audit(config: &Config, strict: bool) -> Result<()> {
    let store = LocaleStore::new(&config.locales_dir);
    let source = store
        .load(config.source_locale)
        .context("Failed to load source locale")?;

    let audits = audit_locales(&store, &source, &config.locale_settings.locales);

    let mut issues = 0;
    for audit in &audits {
        if audit.is_clean() {
            info!("{}: ok", audit.locale);
            continue;
        }
        issues += audit.issue_count();
        for label in &audit.missing {
            warn!("{}: missing '{}'", audit.locale, label);
        }
        for label in &audit.mismatched {
            warn!("{}: placeholder mismatch in '{}'", audit.locale, label);
        }
        for label in &audit.untranslated {
            warn!("{}: '{}' is identical to the source text", audit.locale, label);
        }
    }

    info!("Audited {} locale(s), {} issue(s)", audits.len(), issues);

    if strict && issues > 0 {
        anyhow::bail!("Audit found {} issue(s)", issues);
    }
    Ok(())
}

fn list_locales(config: &Config) {
    let settings = &config.locale_settings;
    for locale in Locale::all() {
        let status = if !settings.locales.contains(&locale) {
            "not configured"
        } else if locale == config.source_locale {
            "source"
        } else if settings.openai_locales.contains(&locale) {
            "OpenAI"
        } else {
            "DeepL, OpenAI fallback"
        };
        println!(
            "{:<4} {:<22} {:<14} {}",
            locale.code(),
            locale.name(),
            locale.native_name(),
            status
        );
    }
}
