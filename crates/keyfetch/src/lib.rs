//! keyfetch - install the media-stack worker's SSH key from Vault
//!
//! One-shot operational helper: read the worker's keypair secret from
//! Vault's KV store, write the private half to disk, restrict the file to
//! owner read/write. No retries, no rotation, no configuration surface.

pub mod keyfile;
pub mod vault;

pub use vault::{extract_private_key, VaultCli, VaultError};
