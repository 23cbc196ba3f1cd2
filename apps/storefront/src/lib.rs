//! # Furniro Storefront Library
//!
//! Session layer of the Furniro furniture storefront. Page components call
//! the commands in [`commands`]; this crate owns the session state and hands
//! pure decisions to `furniro-core` and I/O to `furniro-content`.
//!
//! ## Module Organization
//! ```text
//! furniro_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront bundle & bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Cart / wishlist / comparison store
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── discount.rs ◄─── Persisted applied-discount flag
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Home, shop, product page, search
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── wishlist.rs ◄─── Like / unlike
//! │   ├── comparison.rs ◄─ Compare (max 2)
//! │   └── checkout.rs ◄─── Order placement & payment amount
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management
//! Instead of a single mutable `AppState`, we use focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   StoreState     │ │   DiscountFlag   │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Cart          │ │  • Applied code  │ │  • Store name        │   │
//! │  │  • Liked         │ │  • JSON file     │ │  • Currency          │   │
//! │  │  • Comparison    │ │                  │ │  • Page limits       │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use furniro_content::{ContentBackend, MemoryContent};

use error::ConfigResult;
use state::{ConfigState, DiscountFlag, StoreState};

/// Everything one storefront session needs.
#[derive(Debug)]
pub struct Storefront<B: ContentBackend> {
    pub store: StoreState,
    pub config: ConfigState,
    pub discount: DiscountFlag,
    pub content: B,
}

impl<B: ContentBackend> Storefront<B> {
    /// A fresh session over `content` with an empty store.
    pub fn new(config: ConfigState, discount: DiscountFlag, content: B) -> Self {
        Storefront {
            store: StoreState::new(),
            config,
            discount,
            content,
        }
    }
}

/// Loads configuration and builds a storefront over the in-memory backend.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → FURNIRO_* env                        │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG wins over `log_filter`                                   │
/// │                                                                         │
/// │  3. Seed Content Backend ─────────────────────────────────────────────► │
/// │     • `catalog_path` JSON, or the bundled sample catalog                │
/// │                                                                         │
/// │  4. Open Discount Flag ───────────────────────────────────────────────► │
/// │     • data dir file, or memory when no data dir is known                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap(config_path: Option<PathBuf>) -> ConfigResult<Storefront<MemoryContent>> {
    let config = ConfigState::load(config_path)?;

    init_tracing(&config.log_filter);
    info!(store = %config.store_name, "Starting Furniro storefront");

    let content = match &config.catalog_path {
        Some(path) => {
            info!(?path, "Loading catalog from file");
            MemoryContent::from_json(&std::fs::read_to_string(path)?)?
        }
        None => MemoryContent::with_sample_catalog()?,
    };

    let discount = match config.discount_flag_path() {
        Some(path) => DiscountFlag::open(path),
        None => DiscountFlag::in_memory(),
    };

    info!(discount_applied = discount.is_applied(), "State initialized");
    Ok(Storefront::new(config, discount, content))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=furniro=trace` - Show trace for furniro crates only
/// - Default: `default_filter` from config
///
/// Calling it twice is harmless; the first subscriber stays installed.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
