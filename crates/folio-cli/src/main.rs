use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folio_cli::{
    config::{ConfigError, RuntimeConfig},
    envelope, render,
};
use folio_core::{
    contact::{ContactError, ContactForm, mailto_url},
    facets::DEFAULT_QUICK_FILTER_LIMIT,
    model::{LanguageFilter, QueryState, SortKey},
    source::{GithubSource, LoadedProjects, load_projects},
    training,
};

const LOG_ENV: &str = "FOLIO_LOG";
const DEFAULT_LOG_FILTER: &str = "error";

#[derive(Debug, Parser)]
#[command(author, version, about = "Portfolio CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, filter and sort the portfolio projects.
    Projects {
        /// Text matched against name, description and topics.
        #[arg(long, default_value = "")]
        query: String,
        /// Language to keep, or `all`.
        #[arg(long, default_value = "all")]
        language: String,
        /// stars-desc, stars-asc, updated-desc, updated-asc, name-asc or name-desc.
        #[arg(long, default_value = "stars-desc")]
        sort: String,
        /// Maximum number of projects to print (default: FOLIO_RESULT_LIMIT).
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputMode::Human)]
        mode: OutputMode,
    },
    /// Project counts per language, most frequent first.
    Languages {
        #[arg(long, default_value_t = DEFAULT_QUICK_FILTER_LIMIT)]
        limit: usize,
        #[arg(long, value_enum, default_value_t = OutputMode::Human)]
        mode: OutputMode,
    },
    /// Validate a contact message and print the mailto link for it.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long, value_enum, default_value_t = OutputMode::Human)]
        mode: OutputMode,
    },
    /// Print the completed training program.
    Training {
        #[arg(long, value_enum, default_value_t = OutputMode::Human)]
        mode: OutputMode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputMode {
    Human,
    Json,
    ServiceJson,
}

impl Cli {
    fn command_name(&self) -> &'static str {
        match &self.command {
            Commands::Projects { .. } => "projects",
            Commands::Languages { .. } => "languages",
            Commands::Contact { .. } => "contact",
            Commands::Training { .. } => "training",
        }
    }

    fn output_mode(&self) -> OutputMode {
        match &self.command {
            Commands::Projects { mode, .. }
            | Commands::Languages { mode, .. }
            | Commands::Contact { mode, .. }
            | Commands::Training { mode } => *mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    User,
    Runtime,
}

#[derive(Debug, PartialEq)]
struct AppError {
    kind: ErrorKind,
    message: String,
    details: Option<Value>,
}

impl AppError {
    fn user(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::User,
            message: message.into(),
            details: None,
        }
    }

    fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
            details: None,
        }
    }

    fn from_config(error: ConfigError) -> Self {
        AppError::user(error.to_string())
    }

    fn from_contact(error: ContactError) -> Self {
        let fields: Vec<Value> = error
            .0
            .iter()
            .map(|field_error| json!({"field": field_error.field(), "message": field_error.to_string()}))
            .collect();

        Self {
            details: Some(json!({ "fields": fields })),
            ..AppError::user(error.to_string())
        }
    }

    fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::User => 2,
            ErrorKind::Runtime => 1,
        }
    }

    fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::User => "folio.user",
            ErrorKind::Runtime => "folio.runtime",
        }
    }
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let command = cli.command_name();
    let mode = cli.output_mode();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            match mode {
                OutputMode::ServiceJson => {
                    println!(
                        "{}",
                        envelope::error_envelope(
                            command,
                            error.code(),
                            &error.message,
                            error.details.as_ref()
                        )
                    );
                }
                OutputMode::Human | OutputMode::Json => {
                    eprintln!("error: {}", error.message);
                }
            }
            std::process::exit(error.exit_code());
        }
    }
}

// Logs go to stderr so stdout stays parseable in the JSON modes.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<String, AppError> {
    run_with(
        cli,
        RuntimeConfig::from_env,
        |config| load_projects(&GithubSource::new(config.endpoint())),
        Utc::now,
    )
}

fn run_with<LoadConfig, LoadList, Now>(
    cli: Cli,
    load_config: LoadConfig,
    load_list: LoadList,
    now: Now,
) -> Result<String, AppError>
where
    LoadConfig: Fn() -> Result<RuntimeConfig, ConfigError>,
    LoadList: Fn(&RuntimeConfig) -> LoadedProjects,
    Now: Fn() -> DateTime<Utc>,
{
    match cli.command {
        Commands::Projects {
            query,
            language,
            sort,
            limit,
            mode,
        } => {
            if limit == Some(0) {
                return Err(AppError::user("limit must be at least 1"));
            }

            let sort_key = SortKey::parse(&sort);
            if sort_key.is_none() {
                tracing::warn!(%sort, "unrecognized sort key; keeping filtered order");
            }
            let state = QueryState::default()
                .with_search_text(query)
                .with_language(LanguageFilter::parse(&language))
                .with_sort(sort_key);

            let config = load_config().map_err(AppError::from_config)?;
            let loaded = load_list(&config);
            let view = render::projects_view(
                &loaded,
                &state,
                limit.unwrap_or(config.result_limit),
                now(),
            );
            render_output(mode, "projects", &view, render::projects_to_human)
        }
        Commands::Languages { limit, mode } => {
            if limit == 0 {
                return Err(AppError::user("limit must be at least 1"));
            }

            let config = load_config().map_err(AppError::from_config)?;
            let loaded = load_list(&config);
            let view = render::languages_view(&loaded, limit);
            render_output(mode, "languages", &view, render::languages_to_human)
        }
        Commands::Contact {
            name,
            email,
            message,
            mode,
        } => {
            let config = load_config().map_err(AppError::from_config)?;
            let form = ContactForm::new(name, email, message);
            let mailto = mailto_url(&form, config.contact_email.as_deref())
                .map_err(AppError::from_contact)?;
            let view = render::ContactView { mailto };
            render_output(mode, "contact", &view, |view| view.mailto.clone())
        }
        Commands::Training { mode } => render_output(
            mode,
            "training",
            training::program(),
            render::training_to_human,
        ),
    }
}

fn render_output<T, Human>(
    mode: OutputMode,
    command: &'static str,
    view: &T,
    human: Human,
) -> Result<String, AppError>
where
    T: Serialize,
    Human: FnOnce(&T) -> String,
{
    match mode {
        OutputMode::Human => Ok(human(view)),
        OutputMode::Json => serde_json::to_string(view)
            .map_err(|err| AppError::runtime(format!("failed to serialize output: {err}"))),
        OutputMode::ServiceJson => {
            let result = serde_json::to_value(view)
                .map_err(|err| AppError::runtime(format!("failed to serialize output: {err}")))?;
            envelope::success_envelope(command, result).map_err(|err| {
                AppError::runtime(format!("failed to serialize service envelope: {err}"))
            })
        }
    }
}
