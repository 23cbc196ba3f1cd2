//! # State Module
//!
//! Manages storefront state.
//!
//! Commands take only the state they need, so each piece is its own type.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront (lib.rs)                        │   │
//! │  │  store, config, discount, content                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │ DiscountFlag │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Mutex +     │  │  currency        │              │
//! │  │  Session     │  │  JSON file   │  │  limits          │              │
//! │  │  Store>>     │  │              │  │  paths           │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: Arc<Mutex<T>> for exclusive access                      │
//! │  • DiscountFlag: internal Mutex, file writes under the caller          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod discount;
mod session;

pub use config::ConfigState;
pub use discount::{AppliedDiscount, DiscountFlag};
pub use session::StoreState;
