//! # pizza-core: Pure Business Logic for Pizza Desk
//!
//! This crate holds the catalog rules, order math and bill splitting as
//! plain functions over owned data. It never touches the file system or the
//! terminal; `pizza-store` and `pizza-cli` do that.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizza Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pizza-cli (terminal session)                    │   │
//! │  │    Main Menu ──► Manage Menu ──► Create Order ──► Bill Split    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │ PizzaType │  │   Money   │  │   Order   │  │   rules   │  │   │
//! │  │   │  Catalog  │  │  (cents)  │  │ BillSplit │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               pizza-store (catalog file)                        │   │
//! │  │               data/pizza_menu.txt                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `PizzaType` and the bounded `Catalog`
//! - [`money`] - Money type with integer arithmetic
//! - [`order`] - Orders, line items and bill splitting
//! - [`seed`] - The default starter catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{seed::default_catalog, Order};
//!
//! let catalog = default_catalog().unwrap();
//! let mut order = Order::start();
//!
//! // 3 × Pepperoni (12.50) = 37.50
//! order.add_line_item(&catalog, 1, 3).unwrap();
//! order.set_party_size(3).unwrap();
//!
//! let split = order.split_bill().unwrap();
//! assert_eq!(split.per_person.cents(), 1250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{split_evenly, BillSplit, Order, OrderItem, OrderLimits, OrderSummary, SummaryLine};
pub use types::{Catalog, PizzaType};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of pizza types a catalog can hold.
pub const MAX_PIZZA_TYPES: usize = 20;

/// Maximum number of distinct line items in one order.
///
/// One slot per catalog entry, so this mirrors `MAX_PIZZA_TYPES`.
pub const MAX_ORDER_LINES: usize = MAX_PIZZA_TYPES;

/// Maximum length of a pizza name, in characters.
///
/// The catalog file stores names in a 50-byte field (49 + terminator), so
/// anything longer cannot round-trip.
pub const MAX_NAME_LENGTH: usize = 49;

/// Cheapest price accepted when adding a pizza (0.01).
pub const MIN_PRICE: Money = Money::from_cents(1);

/// Most expensive price accepted when adding a pizza (999.99).
pub const MAX_PRICE: Money = Money::from_cents(99_999);

/// Default upper bound for the quantity of a single line item.
pub const DEFAULT_MAX_QUANTITY: u32 = 1000;

/// Default upper bound for the number of people splitting a bill.
pub const DEFAULT_MAX_PARTY_SIZE: u32 = 1000;
