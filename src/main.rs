use anyhow::Context;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use umkm::api::routes::ROUTE_TABLE;
use umkm::cli::{init, output::Output, Cli, Commands};
use umkm::utils::toml_config::{AppConfig, LogFormat, ServerConfig};
use umkm::{build_app, AppState, DatabaseProvider};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Some(Commands::Init {
            path,
            force,
            host,
            port,
        }) => {
            let config = init::InitConfig {
                path,
                force,
                host,
                port,
            };
            match init::run(config, &output) {
                init::InitResult::Success => ExitCode::SUCCESS,
                init::InitResult::AlreadyExists | init::InitResult::Error(_) => ExitCode::FAILURE,
            }
        }
        Some(Commands::Config { validate }) => show_config(&cli.config, validate, &output),
        Some(Commands::Routes) => {
            print_routes(&output);
            ExitCode::SUCCESS
        }
        None => match serve(&cli.config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                output.error(&format!("{:#}", e));
                if !cli.config.exists() {
                    output.hint("Run 'umkm-server init' to create a configuration");
                }
                ExitCode::FAILURE
            }
        },
    }
}

fn show_config(path: &std::path::Path, validate: bool, output: &Output) -> ExitCode {
    let config = match AppConfig::parse_file(path) {
        Ok(config) => config,
        Err(e) => {
            output.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    output.header(&format!("Configuration ({})", path.display()));
    output.kv(
        &config.auth.jwt_secret_env,
        if config.jwt_secret().is_ok() { "set" } else { "missing" },
    );
    match config.to_toml() {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            output.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    }

    if validate {
        if let Err(e) = config.validate() {
            output.error(&e.to_string());
            return ExitCode::FAILURE;
        }
        output.success("Configuration is valid");
    }

    ExitCode::SUCCESS
}

fn print_routes(output: &Output) {
    output.header("Routes");
    output.table_header(&["Method", "Auth", "Path"]);
    for &(method, path, protected) in ROUTE_TABLE {
        output.table_row(&[method, if protected { "token" } else { "public" }, path]);
    }
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", server.log_level)));

    match server.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn serve(config_path: &std::path::Path) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    init_tracing(&config.server);

    let jwt_secret = config.jwt_secret()?;
    let provider = DatabaseProvider::from_config(&config.database);
    info!(backend = provider.kind(), "opening database");
    let db = provider
        .create_client()
        .await
        .context("failed to open database")?;

    let addr = config.server.bind_address();
    let pricing = config.orders.pricing;
    let app = build_app(AppState::new(config, db, jwt_secret));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(%addr, ?pricing, "umkm-server listening");
    for &(method, path, protected) in ROUTE_TABLE {
        info!(method, path, protected, "route");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
