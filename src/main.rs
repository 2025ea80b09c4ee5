//! Command-line front end for the gateway client.
//!
//! Every subcommand maps to one grouped call. Results are printed as pretty
//! JSON on stdout; failures announced by the client appear in the log on stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use gateway_client::api::{
    Interaction, InteractionType, ProductQuery, RecommendationVersion, RegisterUser, SearchQuery,
    SearchType,
};
use gateway_client::config::{load_config, validate_config, ClientConfig, ConfigError};
use gateway_client::notify::LogNotifier;
use gateway_client::observability::logging::init_logging;
use gateway_client::{ApiResult, Envelope, GatewayClient};

#[derive(Parser)]
#[command(name = "gateway-client")]
#[command(about = "Client for the product search and recommendation backend", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Origin the client calls from; decides the backend address.
    #[arg(short, long)]
    origin: Option<String>,

    /// Explicit API base URL, bypassing origin resolution.
    #[arg(short, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check backend health
    Health,
    /// Show backend status
    Status,
    /// List products
    Products {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product
    Product { id: u64 },
    /// Search products
    Search {
        query: String,
        /// Use semantic instead of fuzzy matching
        #[arg(long)]
        semantic: bool,
        #[arg(long)]
        page: Option<u32>,
    },
    /// List categories
    Categories,
    /// Products similar to a product
    Recommend {
        product_id: u64,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Personalized recommendations for a user
    Personalized {
        user_id: u64,
        #[arg(long)]
        limit: Option<u32>,
        /// Use the v1 engine
        #[arg(long)]
        v1: bool,
    },
    /// Look up a user by name
    User { username: String },
    /// Log in, registering the user if unknown
    Login {
        username: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Record a user interaction
    Record {
        user_id: u64,
        product_id: u64,
        /// click, view, favorite, purchase or dislike
        interaction_type: InteractionType,
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Recent interactions across users
    Recent {
        #[arg(long)]
        limit: Option<u32>,
    },
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };

    if let Some(origin) = &cli.origin {
        config.endpoint.origin = origin.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.endpoint.base_url = Some(base_url.clone());
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

async fn run(client: &GatewayClient, command: Commands) -> ApiResult<Envelope> {
    match command {
        Commands::Health => client.system().health().await,
        Commands::Status => client.system().status().await,
        Commands::Products {
            page,
            per_page,
            category,
        } => {
            client
                .products()
                .list_products(&ProductQuery {
                    page,
                    per_page,
                    category,
                    sort: None,
                })
                .await
        }
        Commands::Product { id } => client.products().get_product(id).await,
        Commands::Search {
            query,
            semantic,
            page,
        } => {
            let query = SearchQuery {
                search_type: semantic.then_some(SearchType::Semantic),
                page,
                ..SearchQuery::new(query)
            };
            client.products().search_products(&query).await
        }
        Commands::Categories => client.products().categories().await,
        Commands::Recommend { product_id, limit } => {
            client
                .recommendations()
                .similar_products(product_id, limit)
                .await
        }
        Commands::Personalized { user_id, limit, v1 } => {
            let version = if v1 {
                RecommendationVersion::V1
            } else {
                RecommendationVersion::V2
            };
            client
                .recommendations()
                .personalized(version, user_id, limit)
                .await
        }
        Commands::User { username } => client.users().get_user(&username).await,
        Commands::Login { username, email } => {
            let email = email.unwrap_or_else(|| format!("{}@example.com", username));
            client
                .users()
                .login_or_register(&RegisterUser::new(username, email))
                .await
        }
        Commands::Record {
            user_id,
            product_id,
            interaction_type,
            session_id,
        } => {
            client
                .interactions()
                .record(&Interaction {
                    user_id,
                    product_id,
                    interaction_type,
                    interaction_score: None,
                    session_id,
                })
                .await
        }
        Commands::Recent { limit } => client.interactions().recent(limit).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.observability)?;

    let client = GatewayClient::new(&config, Arc::new(LogNotifier))?;

    match run(&client, cli.command).await {
        Ok(envelope) => {
            println!("{}", serde_json::to_string_pretty(&envelope.to_value())?);
            Ok(())
        }
        Err(e) => {
            if let Some(envelope) = e.envelope() {
                eprintln!("{}", serde_json::to_string_pretty(&envelope.to_value())?);
            }
            Err(e.into())
        }
    }
}
