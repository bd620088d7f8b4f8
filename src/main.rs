use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use userdesk::commands::{
    add_user, delete_user, edit_user, list_users, open_path, patch_user, show_user,
    GlobalOptions, ListOptions, Session, UserFields,
};
use userdesk::models::Field;

/// UserDesk - terminal console for the users REST resource
#[derive(Parser)]
#[command(name = "userdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./userdesk.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the backend URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users
    List {
        /// Only show rows containing this text in any column
        #[arg(short, long)]
        filter: Option<String>,

        /// Column to sort on
        #[arg(short, long, value_enum)]
        sort: Option<Field>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Page number, starting at 1
        #[arg(short, long)]
        page: Option<usize>,

        /// Rows per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show a user in the editor
    Show {
        /// User id
        id: i64,
    },

    /// Create a user
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update a user (full replace)
    Edit {
        /// User id
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update only the given fields of a user
    Patch {
        /// User id
        id: i64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a user after confirmation
    Delete {
        /// User id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open a page by path (news, about, userlist, user/new, user/<id>/edit)
    Open {
        /// Navigation path
        #[arg(default_value = "")]
        path: String,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// User name
    #[arg(long)]
    user_name: Option<String>,

    /// First name
    #[arg(long)]
    first_name: Option<String>,

    /// Last name
    #[arg(long)]
    last_name: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Single-character status code
    #[arg(long = "status")]
    user_status: Option<String>,

    /// Department
    #[arg(long)]
    department: Option<String>,
}

impl From<FieldArgs> for UserFields {
    fn from(args: FieldArgs) -> Self {
        Self {
            user_name: args.user_name,
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            user_status: args.user_status,
            department: args.department,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging; RUST_LOG wins over --verbose
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let options = GlobalOptions {
        config: cli.config,
        url: cli.url,
        timeout: cli.timeout,
    };

    let session = match Session::open(&options) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List {
            filter,
            sort,
            desc,
            page,
            page_size,
        } => {
            let options = ListOptions {
                filter,
                sort,
                descending: desc,
                page,
                page_size,
            };
            list_users(&session, options).await
        }

        Commands::Show { id } => show_user(&session, Some(id)).await,

        Commands::Add { fields } => add_user(&session, fields.into()).await,

        Commands::Edit { id, fields } => edit_user(&session, id, fields.into()).await,

        Commands::Patch { id, fields } => patch_user(&session, id, fields.into()).await,

        Commands::Delete { id, yes } => delete_user(&session, id, yes).await,

        Commands::Open { path } => open_path(&session, &path).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
