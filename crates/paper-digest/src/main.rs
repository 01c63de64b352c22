//! Paper digest bot - entry point.
//!
//! Wires environment/CLI configuration to the pipeline and maps the
//! pipeline's boolean outcome to the process exit code.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_digest::config::{self, defaults};
use paper_digest::{
    EmailNotifier, EmailOptions, HuggingFaceFetcher, Notifier, PaperBot, PaperBotOptions,
    SlackNotifier,
};

#[derive(Parser, Debug)]
#[command(name = "paper-digest")]
#[command(about = "Research-paper digest bot: arXiv feed, citation enrichment, Slack/email delivery")]
#[command(version)]
struct Cli {
    /// arXiv search query (arXiv query grammar)
    #[arg(long, env = "ARXIV_QUERY")]
    query: Option<String>,

    /// Named query preset (rag, llm, agents, multimodal, ai, ...)
    #[arg(long)]
    preset: Option<String>,

    /// Maximum number of papers to fetch
    #[arg(long, default_value_t = defaults::MAX_RESULTS, env = "MAX_PAPERS")]
    max_papers: u32,

    /// Lookback window in days (accepted for compatibility; the feed query
    /// does not filter by date)
    #[arg(long, default_value_t = defaults::DAYS_BACK, env = "DAYS_BACK")]
    days_back: u32,

    /// Minimum citation count a paper needs to survive filtering
    #[arg(long, default_value_t = defaults::MIN_CITATIONS, env = "MIN_CITATIONS")]
    min_citations: u32,

    /// Delivery channel
    #[arg(long, default_value = "slack", env = "NOTIFY_TYPE")]
    channel: Channel,

    /// Paper feed to poll
    #[arg(long, default_value = "arxiv")]
    source: Source,

    /// Keyword filter for the Hugging Face daily feed
    #[arg(long)]
    keyword: Option<String>,

    /// Slack incoming-webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    slack_webhook_url: Option<String>,

    /// Resend API key for email delivery
    #[arg(long, env = "RESEND_API_KEY")]
    resend_api_key: Option<String>,

    /// Email sender address
    #[arg(long, env = "EMAIL_FROM")]
    email_from: Option<String>,

    /// Email recipient address
    #[arg(long, env = "EMAIL_TO")]
    email_to: Option<String>,

    /// Semantic Scholar API key (optional, raises rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    semantic_scholar_api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Channel {
    /// Slack incoming webhook
    #[default]
    Slack,
    /// Resend transactional email
    Email,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Source {
    /// arXiv Atom query API (enriched and filtered by citations)
    #[default]
    Arxiv,
    /// Hugging Face daily papers (already popularity-scored)
    Huggingface,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

/// Resolve the delivery channel from configuration.
///
/// Incomplete credentials for the selected channel are a configuration
/// error: startup message plus nonzero exit, never a degraded run.
fn build_notifier(cli: &Cli) -> Result<Box<dyn Notifier>, paper_digest::ConfigError> {
    match cli.channel {
        Channel::Email => {
            let (Some(api_key), Some(from), Some(to)) =
                (&cli.resend_api_key, &cli.email_from, &cli.email_to)
            else {
                return Err(paper_digest::ConfigError::missing_credentials(
                    "email",
                    "EMAIL_FROM, EMAIL_TO, and RESEND_API_KEY are required",
                ));
            };
            tracing::info!(to = %to, "sending digest by email");
            Ok(Box::new(EmailNotifier::new(EmailOptions {
                api_key: api_key.clone(),
                from: from.clone(),
                to: to.clone(),
            })))
        }
        Channel::Slack => {
            let Some(webhook_url) = &cli.slack_webhook_url else {
                return Err(paper_digest::ConfigError::missing_credentials(
                    "slack",
                    "SLACK_WEBHOOK_URL is required",
                ));
            };
            tracing::info!("sending digest to Slack");
            Ok(Box::new(SlackNotifier::new(webhook_url.clone())))
        }
    }
}

/// Pick the effective arXiv query: explicit query, then preset, then default.
fn resolve_query(cli: &Cli) -> String {
    if let Some(query) = &cli.query {
        return query.clone();
    }
    if let Some(preset) = &cli.preset {
        if let Some(query) = config::preset_query(preset) {
            return query.to_string();
        }
        tracing::warn!(preset = %preset, "unknown preset, falling back to the default query");
    }
    defaults::QUERY.to_string()
}

async fn execute(cli: Cli) -> anyhow::Result<bool> {
    let notifier = build_notifier(&cli)?;

    match cli.source {
        Source::Arxiv => {
            let bot = PaperBot::new(PaperBotOptions {
                arxiv_query: resolve_query(&cli),
                max_papers: Some(cli.max_papers),
                days_back: Some(cli.days_back),
                min_citations: Some(cli.min_citations),
                notifier: Some(notifier),
                semantic_scholar_api_key: cli.semantic_scholar_api_key.clone(),
                ..Default::default()
            })?;
            Ok(bot.run().await)
        }
        Source::Huggingface => {
            let fetcher = HuggingFaceFetcher::new(cli.max_papers);
            let papers = fetcher.fetch_papers(cli.keyword.as_deref()).await;
            if papers.is_empty() {
                tracing::info!("no papers found");
                return Ok(true);
            }
            Ok(notifier.send(&papers).await)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        source = ?cli.source,
        channel = ?cli.channel,
        "starting paper digest run"
    );

    let success = execute(cli).await?;
    if !success {
        std::process::exit(1);
    }
    Ok(())
}
