//! keyfetch - install the media-stack worker's SSH key from Vault
//!
//! Four steps, in order: ask the vault CLI for the secret, pull the private
//! key out of the KV v2 envelope, write it to the worker's key path, lock
//! the file down to owner read/write. Any failure aborts before the
//! confirmation line is printed.
//!
//! The secret path and destination are deliberately hard-coded. This is a
//! single-purpose provisioning helper, not a general key manager.

use anyhow::{Context, Result};
use clap::Parser;
use keyfetch::{keyfile, VaultCli};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Vault KV path of the worker's SSH keypair
const SECRET_PATH: &str = "secret/ssh_keys/media-stack_worker";

/// Where the private key lands
const KEY_FILE: &str = "/root/.ssh/media-stack_worker_id_ed25519";

#[derive(Parser)]
#[command(name = "keyfetch")]
#[command(about = "Fetch the media-stack worker SSH key from Vault and install it")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    let vault = VaultCli::new();
    let private_key = vault
        .fetch_private_key(SECRET_PATH)
        .with_context(|| format!("Failed to fetch {}", SECRET_PATH))?;

    keyfile::install(Path::new(KEY_FILE), &private_key)
        .with_context(|| format!("Failed to install key at {}", KEY_FILE))?;

    println!("SSH key saved successfully");

    Ok(())
}
