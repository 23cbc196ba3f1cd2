//! # Furniro Storefront Entry Point
//!
//! Boots a storefront session and prints the home page listing as JSON.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Furniro Storefront                               │
//! │                                                                         │
//! │  main.rs ────► bootstrap(): config, logging, backend, discount flag     │
//! │                                                                         │
//! │  lib.rs ─────► Storefront<B> bundle                                     │
//! │                                                                         │
//! │  commands/ ──► load_featured, add_to_cart, place_order, ...             │
//! │                                                                         │
//! │  state/ ─────► StoreState, ConfigState, DiscountFlag                    │
//! │                                                                         │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                   Content Backend (furniro-content)              │  │
//! │  │  products (read) · orders (write)                                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! furniro-storefront [path/to/storefront.toml]
//! ```

use std::path::PathBuf;

use furniro_storefront::commands::catalog;

#[tokio::main]
async fn main() {
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let storefront = match furniro_storefront::bootstrap(config_path) {
        Ok(storefront) => storefront,
        Err(e) => {
            eprintln!("furniro-storefront: {}", e);
            std::process::exit(1);
        }
    };

    let listing = catalog::load_featured(&storefront.content, &storefront.config).await;

    match serde_json::to_string_pretty(&listing) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("furniro-storefront: {}", e);
            std::process::exit(1);
        }
    }
}
