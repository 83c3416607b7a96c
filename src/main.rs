use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use meeting_users::api::client::ServiceClient;
use meeting_users::api::users;
use meeting_users::core::config::Config;
use meeting_users::core::tracing_init::init_tracing;
use meeting_users::models::options::{CreateOpts, DeleteOpts, GetOpts, UpdateOpts};
use meeting_users::{AccountType, Field, UserFunction, UserStatus};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Manage enterprise users of the cloud meeting service
#[derive(Parser)]
#[command(name = "meeting-users")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Authorization token (overrides the configured access_token)
    #[arg(long, env = "MEETING_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an enterprise user
    Create(CreateArgs),
    /// Show one user
    Get {
        account: String,
        /// Treat the account as a third-party user ID
        #[arg(long)]
        third_party: bool,
    },
    /// Update an enterprise user; omitted options are left unchanged
    Update(UpdateArgs),
    /// Delete users in a single batch
    Delete {
        #[arg(required = true)]
        accounts: Vec<String>,
        /// Treat the accounts as third-party user IDs
        #[arg(long)]
        third_party: bool,
    },
}

#[derive(Args)]
struct CreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    account: Option<String>,
    #[arg(long)]
    third_account: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    dept_code: Option<String>,
    #[arg(long)]
    desc: Option<String>,
    #[arg(long)]
    title: Option<String>,
    /// Do not send the account-opening email and SMS
    #[arg(long)]
    no_notify: bool,
    /// Occupy a collaborative whiteboard seat
    #[arg(long)]
    enable_room: bool,
    /// Create the account disabled
    #[arg(long)]
    disabled: bool,
}

#[derive(Args)]
struct UpdateArgs {
    account: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long, conflicts_with = "clear_email")]
    email: Option<String>,
    #[arg(long, conflicts_with = "clear_desc")]
    desc: Option<String>,
    #[arg(long, conflicts_with = "clear_title")]
    title: Option<String>,
    #[arg(long)]
    clear_email: bool,
    #[arg(long)]
    clear_desc: bool,
    #[arg(long)]
    clear_title: bool,
    #[arg(long, conflicts_with = "enable")]
    disable: bool,
    #[arg(long)]
    enable: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        Config::from_file(&cli.config).context(format!(
            "Failed to load configuration from '{}'",
            cli.config.display()
        ))?
    } else {
        Config::default()
    };

    init_tracing(&config.logging);

    debug!(
        config_path = %cli.config.display(),
        endpoint = %config.client.endpoint,
        timeout_secs = config.client.timeout_secs,
        "Configuration loaded"
    );

    let token = match cli.token.or_else(|| config.client.access_token.clone()) {
        Some(token) => token,
        None => bail!("No authorization token: pass --token, set MEETING_ACCESS_TOKEN or access_token in the config"),
    };

    let client = ServiceClient::from_config(&config.client).context("Failed to create service client")?;

    match cli.command {
        Commands::Create(args) => {
            let opts = create_opts(args, token);
            let user = users::create(&client, &opts)
                .await
                .context("Failed to create user")?;
            print_json(&user)?;
        }
        Commands::Get {
            account,
            third_party,
        } => {
            let opts = GetOpts {
                account,
                account_type: account_type(third_party),
                token,
            };
            let user = users::get(&client, &opts)
                .await
                .context(format!("Failed to get user '{}'", opts.account))?;
            print_json(&user)?;
        }
        Commands::Update(args) => {
            let opts = update_opts(args, token);
            let user = users::update(&client, &opts)
                .await
                .context(format!("Failed to update user '{}'", opts.account))?;
            print_json(&user)?;
        }
        Commands::Delete {
            accounts,
            third_party,
        } => {
            let opts = DeleteOpts {
                account_type: Some(account_type(third_party)),
                token,
            };
            users::batch_delete(&client, &opts, &accounts)
                .await
                .context("Failed to delete users")?;
            info!(count = accounts.len(), "Delete request accepted");
        }
    }

    Ok(())
}

fn account_type(third_party: bool) -> AccountType {
    if third_party {
        AccountType::ThirdParty
    } else {
        AccountType::Native
    }
}

fn create_opts(args: CreateArgs, token: String) -> CreateOpts {
    CreateOpts {
        name: args.name,
        account: args.account.unwrap_or_default(),
        third_account: args.third_account.unwrap_or_default(),
        country: args.country.unwrap_or_default(),
        dept_code: args.dept_code.unwrap_or_default(),
        description: args.desc.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        title: args.title.unwrap_or_default(),
        send_notify: if args.no_notify { "0".to_string() } else { String::new() },
        function: args
            .enable_room
            .then_some(UserFunction { enable_room: true }),
        status: args.disabled.then_some(UserStatus::Disabled),
        token,
        ..Default::default()
    }
}

fn update_opts(args: UpdateArgs, token: String) -> UpdateOpts {
    let status = if args.disable {
        Field::Value(UserStatus::Disabled)
    } else if args.enable {
        Field::Value(UserStatus::Normal)
    } else {
        Field::Unset
    };

    UpdateOpts {
        account: args.account,
        name: args.name.unwrap_or_default(),
        email: clearable(args.email, args.clear_email),
        description: clearable(args.desc, args.clear_desc),
        title: clearable(args.title, args.clear_title),
        status,
        token,
        ..Default::default()
    }
}

fn clearable(value: Option<String>, clear: bool) -> Field<String> {
    if clear {
        Field::Cleared
    } else {
        Field::from_option(value)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{out}");
    Ok(())
}
