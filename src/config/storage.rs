//! Storage Config

use std::path::PathBuf;

use clap::Args;

use crate::store::DEFAULT_STORAGE_KEY;

/// Where the cart and catalog live.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding saved cart slots
    #[arg(long, env = "CART_STORAGE_DIR", default_value = ".cart")]
    pub storage_dir: PathBuf,

    /// Slot key the cart is saved under
    #[arg(long, env = "CART_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,

    /// Product catalog YAML file
    #[arg(long, env = "CART_CATALOG", default_value = "fixtures/products/drinks.yml")]
    pub catalog: PathBuf,
}
