//! ghteam - create GitHub teams and add members
//!
//! Usage:
//!   ghteam create --org acme --team platform --member alice:maintainer
//!   ghteam create --input request.json --format json
//!   ghteam integrations
//!   ghteam integrations add ghe.example.com --token-env GHE_TOKEN

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use ghteam_core::action::{CreateTeamAction, CreateTeamInput, MemberSpec, RecordedOutput};
use ghteam_core::config::{ConfigStore, GitHubIntegrationConfig};
use ghteam_core::integrations::IntegrationRegistry;
use ghteam_core::types::{TeamPrivacy, TeamRole};

#[derive(Parser)]
#[command(name = "ghteam")]
#[command(about = "Create GitHub teams and add members", long_about = None)]
struct Cli {
    /// Path to ghteam.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a team and optionally add members (github:team:create)
    Create(Box<CreateArgs>),

    /// Manage GitHub integrations
    Integrations(IntegrationsArgs),
}

#[derive(Args)]
struct IntegrationsArgs {
    #[command(subcommand)]
    command: Option<IntegrationsSubcommand>,
}

#[derive(Subcommand)]
enum IntegrationsSubcommand {
    /// List configured integrations (default)
    List,

    /// Add a GitHub or GitHub Enterprise host to ghteam.toml
    Add {
        /// Host name, e.g. ghe.example.com
        host: String,

        /// REST API base (defaults to https://HOST/api/v3, or api.github.com)
        #[arg(long)]
        api_base_url: Option<Url>,

        /// Environment variable holding the token for this host
        #[arg(long)]
        token_env: Option<String>,

        /// Overwrite an existing entry for the same host
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

#[derive(Args)]
struct CreateArgs {
    /// Read the action input from a JSON file; flags override its fields
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Organization that will own the team
    #[arg(long = "org")]
    organization: Option<String>,
    /// Team name
    #[arg(long = "team")]
    team_name: Option<String>,
    /// Team description
    #[arg(long, short)]
    description: Option<String>,
    /// Team privacy (closed or secret)
    #[arg(long, short)]
    privacy: Option<TeamPrivacy>,
    /// Member to add, as USER or USER:ROLE (role is member or maintainer)
    #[arg(long = "member", short, value_name = "USER[:ROLE]")]
    members: Vec<String>,
    /// Token to use instead of the configured integration credentials
    #[arg(long)]
    token: Option<String>,
    /// GitHub host (defaults to github.com)
    #[arg(long)]
    host: Option<String>,
    /// Output format
    #[arg(short = 'o', long, default_value = "table")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ghteam=info,ghteam_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = config_store(cli.config.as_deref())?;

    match cli.command {
        Commands::Create(args) => run_create(*args, load_registry(&store)?),
        Commands::Integrations(args) => match args.command {
            None | Some(IntegrationsSubcommand::List) => {
                print_integrations(&load_registry(&store)?);
                Ok(())
            }
            Some(IntegrationsSubcommand::Add {
                host,
                api_base_url,
                token_env,
                force,
            }) => {
                let mut entry = GitHubIntegrationConfig::new(host);
                entry.api_base_url = api_base_url;
                entry.token_env = token_env;
                add_integration(&store, entry, force)?;
                println!("✓ Saved integration to {}", store.config_path().display());
                Ok(())
            }
        },
    }
}

fn config_store(config: Option<&Path>) -> Result<ConfigStore> {
    match config {
        Some(path) => Ok(ConfigStore::from_path(path.to_path_buf())),
        None => ConfigStore::with_defaults(),
    }
}

fn load_registry(store: &ConfigStore) -> Result<IntegrationRegistry> {
    tracing::debug!(path = %store.config_path().display(), "Loading integrations");
    let config = store.load()?;
    Ok(IntegrationRegistry::from_config(&config))
}

/// Add an integration entry to the config file, replacing an existing entry
/// for the same host only when `force` is set.
fn add_integration(store: &ConfigStore, entry: GitHubIntegrationConfig, force: bool) -> Result<()> {
    let mut config = store.load()?;
    let entries = &mut config.integrations.github;

    if let Some(pos) = entries
        .iter()
        .position(|existing| existing.host.eq_ignore_ascii_case(&entry.host))
    {
        if !force {
            anyhow::bail!(
                "Integration for host '{}' already exists. Use --force to overwrite.",
                entry.host
            );
        }
        entries.remove(pos);
    }
    entries.push(entry);

    config.validate()?;
    store.save(&config)
}

fn run_create(args: CreateArgs, registry: IntegrationRegistry) -> Result<()> {
    let input = build_input(&args)?;
    let action = CreateTeamAction::with_integrations(registry);

    // Block on the async action using a tokio runtime
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))?;

    let mut out = RecordedOutput::new();
    let result = runtime.block_on(action.handler(&input, &mut out))?;

    match args.format {
        OutputFormat::Table => print_outputs(&out),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}

fn build_input(args: &CreateArgs) -> Result<CreateTeamInput> {
    let mut input = match &args.input {
        Some(path) => read_input_file(path)?,
        None => CreateTeamInput::default(),
    };

    if let Some(org) = &args.organization {
        input.organization = Some(org.clone());
    }
    if let Some(team) = &args.team_name {
        input.team_name = Some(team.clone());
    }
    if let Some(description) = &args.description {
        input.description = Some(description.clone());
    }
    if let Some(privacy) = args.privacy {
        input.privacy = Some(privacy);
    }
    for member in &args.members {
        input = input.with_member(parse_member(member)?);
    }
    if let Some(token) = &args.token {
        input.token = Some(token.clone());
    }
    if let Some(host) = &args.host {
        input.host = Some(host.clone());
    }

    Ok(input)
}

fn read_input_file(path: &Path) -> Result<CreateTeamInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input file: {}", path.display()))
}

/// Parse `USER` or `USER:ROLE`.
fn parse_member(value: &str) -> Result<MemberSpec> {
    let (username, role) = match value.split_once(':') {
        Some((username, role)) => (username, Some(role.parse::<TeamRole>()?)),
        None => (value, None),
    };
    if username.trim().is_empty() {
        anyhow::bail!("Member '{}' has an empty username", value);
    }
    let mut member = MemberSpec::new(username.trim());
    if let Some(role) = role {
        member = member.with_role(role);
    }
    Ok(member)
}

fn print_outputs(out: &RecordedOutput) {
    for (name, value) in out.entries() {
        match value {
            Value::Array(items) => {
                println!("{:<14} {}", name, items.len());
                let marker = if name == "membersFailed" { "✗" } else { "✓" };
                for item in items {
                    println!("  {} {}", marker, describe_member(item));
                }
            }
            Value::String(s) => println!("{:<14} {}", name, s),
            other => println!("{:<14} {}", name, other),
        }
    }
}

fn describe_member(item: &Value) -> String {
    let username = item.get("username").and_then(Value::as_str).unwrap_or("?");
    let role = item.get("role").and_then(Value::as_str).unwrap_or("member");
    match item.get("error").and_then(Value::as_str) {
        Some(error) => format!("{} ({}): {}", username, role, error),
        None => format!("{} ({})", username, role),
    }
}

fn print_integrations(registry: &IntegrationRegistry) {
    println!("{:<24} {:<40} TOKEN", "HOST", "API BASE URL");
    for entry in registry.all() {
        let token_source = match (&entry.token, &entry.token_env) {
            (Some(_), _) => "static".to_string(),
            (None, Some(var)) => format!("env:{}", var),
            (None, None) => "-".to_string(),
        };
        println!(
            "{:<24} {:<40} {}",
            entry.host,
            entry.api_base_url(),
            token_source
        );
    }
}
