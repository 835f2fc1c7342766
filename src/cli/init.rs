//! `umkm-server init`: scaffolds a configuration for a new deployment.

use super::output::Output;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug)]
pub enum InitResult {
    Success,
    /// umkm.toml already exists and `--force` was not given
    AlreadyExists,
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// Host address for the server
    pub host: String,
    /// Port for the server
    pub port: u16,
}

pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing UMKM server");

    let base_path = &config.path;

    let config_path = base_path.join("umkm.toml");
    if config_path.exists() && !config.force {
        output.warning("umkm.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    output.subheader("Creating directories");

    let data_dir = base_path.join("data");
    if data_dir.exists() {
        output.skipped("data", "already exists");
    } else {
        if let Err(e) = fs::create_dir_all(&data_dir) {
            output.error(&format!("Failed to create data: {}", e));
            return InitResult::Error(e.to_string());
        }
        output.created_dir("data");
    }

    output.subheader("Creating configuration files");

    if let Err(e) = write_file(&config_path, &generate_umkm_toml(&config), config.force) {
        output.error(&format!("Failed to create umkm.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "umkm.toml");

    let env_example_path = base_path.join(".env.example");
    if let Err(e) = write_file(&env_example_path, generate_env_example(), config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("env", ".env.example");

    let gitignore_path = base_path.join(".gitignore");
    if !gitignore_path.exists() {
        match write_file(&gitignore_path, generate_gitignore(), false) {
            Ok(()) => output.created("file", ".gitignore"),
            Err(e) => output.warning(&format!("Failed to create .gitignore: {}", e)),
        }
    }

    output.complete("Project initialized successfully!");

    output.header("Next Steps");
    output.newline();
    output.info("1. Set up environment variables:");
    output.command("cp .env.example .env");
    output.command("# Edit .env and set JWT_SECRET (min 32 chars)");
    output.newline();
    output.info("2. Start the server:");
    output.command("umkm-server");

    output.hint(&format!(
        "Server will be available at http://{}:{}",
        config.host, config.port
    ));
    output.hint("API docs available at /swagger-ui/ (requires 'swagger-ui' feature)");

    InitResult::Success
}

/// Writes `content` unless the file exists and `force` is off.
fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(());
    }
    fs::write(path, content)
}

fn generate_umkm_toml(config: &InitConfig) -> String {
    format!(
        r#"# umkm-server configuration

[server]
host = "{host}"
port = {port}
log_level = "info"
# "pretty" or "json"
log_format = "pretty"
# Public address used in catalog QR codes; defaults to the request's Host
# public_base_url = "https://toko.example.com"

[auth]
# Name of the environment variable holding the JWT signing secret (min 32 bytes)
jwt_secret_env = "JWT_SECRET"
issuer = "umkm-server"

[database]
# SQLite file path, or ":memory:"
url = "./data/umkm.db"
# Remote Turso database (requires the 'turso' feature)
# turso_url_env = "TURSO_DATABASE_URL"
# turso_token_env = "TURSO_AUTH_TOKEN"

[orders]
# "client_supplied" trusts prices sent with the order,
# "catalog" uses the store's current product prices
pricing = "client_supplied"
"#,
        host = config.host,
        port = config.port
    )
}

fn generate_env_example() -> &'static str {
    r#"# JWT signing secret, at least 32 characters
JWT_SECRET=change-me-to-a-long-random-secret-value

# Log filter override, e.g. umkm=debug,tower_http=debug
# RUST_LOG=info

# Remote Turso database
# TURSO_DATABASE_URL=libsql://your-db.turso.io
# TURSO_AUTH_TOKEN=
"#
}

fn generate_gitignore() -> &'static str {
    "/target/\n/data/\n.env\n*.db\n.DS_Store\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::toml_config::AppConfig;
    use tempfile::TempDir;

    fn create_test_config(temp_dir: &TempDir, force: bool) -> InitConfig {
        InitConfig {
            path: temp_dir.path().to_path_buf(),
            force,
            host: "0.0.0.0".to_string(),
            port: 9090,
        }
    }

    #[test]
    fn test_generated_toml_parses() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let content = generate_umkm_toml(&create_test_config(&temp_dir, false));

        let config: AppConfig = toml::from_str(&content).expect("generated config should parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.auth.jwt_secret_env, "JWT_SECRET");
    }

    #[test]
    fn test_write_file_skips_existing_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "original").expect("Failed to write");

        write_file(&file_path, "new content", false).expect("write");
        assert_eq!(fs::read_to_string(&file_path).expect("read"), "original");

        write_file(&file_path, "new content", true).expect("write");
        assert_eq!(fs::read_to_string(&file_path).expect("read"), "new content");
    }

    #[test]
    fn test_run_creates_all_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let result = run(create_test_config(&temp_dir, false), &Output::no_color());

        assert!(matches!(result, InitResult::Success));
        assert!(temp_dir.path().join("umkm.toml").exists());
        assert!(temp_dir.path().join(".env.example").exists());
        assert!(temp_dir.path().join(".gitignore").exists());
        assert!(temp_dir.path().join("data").is_dir());
    }

    #[test]
    fn test_run_already_exists_without_force() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("umkm.toml"), "existing").expect("Failed to write");

        let result = run(create_test_config(&temp_dir, false), &Output::no_color());
        assert!(matches!(result, InitResult::AlreadyExists));
    }

    #[test]
    fn test_run_force_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("umkm.toml"), "existing").expect("Failed to write");

        let result = run(create_test_config(&temp_dir, true), &Output::no_color());
        assert!(matches!(result, InitResult::Success));

        let content = fs::read_to_string(temp_dir.path().join("umkm.toml")).expect("Failed to read");
        assert!(content.contains("[server]"));
        assert!(!content.contains("existing"));
    }
}
