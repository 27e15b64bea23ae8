//! # Orders and Bill Splitting
//!
//! An order collects line items picked from the catalog, keeps a running
//! total, and splits that total evenly across a party.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  start() │────►│ In Order │────►│  Party   │────►│ Summary  │       │
//! │  │  (empty) │     │          │     │   Size   │     │ + Split  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                  add_line_item                      (discarded,         │
//! │                  (checked total)                     never saved)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Freezing
//! A line item copies the pizza's name and price when it is added. Later
//! catalog edits do not change an order already in progress.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Catalog, PizzaType};
use crate::validation::{validate_party_size, validate_quantity};
use crate::{DEFAULT_MAX_PARTY_SIZE, DEFAULT_MAX_QUANTITY, MAX_ORDER_LINES};

// =============================================================================
// Limits
// =============================================================================

/// Configurable bounds applied while building an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLimits {
    /// Largest quantity a single line may reach.
    pub max_quantity: u32,

    /// Largest party that may split the bill.
    pub max_party_size: u32,
}

impl Default for OrderLimits {
    fn default() -> Self {
        OrderLimits {
            max_quantity: DEFAULT_MAX_QUANTITY,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
        }
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One line of an order.
///
/// ## Design Notes
/// - `pizza_name` / `unit_price`: frozen copies taken when the line was added
/// - `subtotal`: `quantity × unit_price`, computed with overflow checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub pizza_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

impl OrderItem {
    /// Creates a line item from a pizza and an already-validated quantity.
    pub fn from_pizza(pizza: &PizzaType, quantity: u32) -> CoreResult<Self> {
        let subtotal = pizza
            .price
            .checked_mul_quantity(quantity)
            .ok_or(CoreError::ArithmeticOverflow)?;

        Ok(OrderItem {
            pizza_name: pizza.name.clone(),
            quantity,
            unit_price: pizza.price,
            subtotal,
        })
    }

    fn is_same_pizza(&self, pizza: &PizzaType) -> bool {
        pizza.name_matches(&self.pizza_name) && pizza.price == self.unit_price
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order being built against a catalog.
///
/// ## Invariants
/// - At most `MAX_ORDER_LINES` (20) lines, one per distinct pizza
/// - `total_amount` equals the sum of every line's `quantity × unit_price`
/// - `num_people` is at least 1
#[derive(Debug, Clone)]
pub struct Order {
    items: Vec<OrderItem>,
    total_amount: Money,
    num_people: u32,
    limits: OrderLimits,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Starts an empty order with the default limits.
    pub fn start() -> Self {
        Order::with_limits(OrderLimits::default())
    }

    /// Starts an empty order with explicit limits.
    pub fn with_limits(limits: OrderLimits) -> Self {
        Order {
            items: Vec::new(),
            total_amount: Money::zero(),
            num_people: 1,
            limits,
            created_at: Utc::now(),
        }
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_ORDER_LINES
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn num_people(&self) -> u32 {
        self.num_people
    }

    pub fn limits(&self) -> OrderLimits {
        self.limits
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds `quantity` of the pizza at zero-based `pizza_index` in `catalog`.
    ///
    /// ## Checks (in order)
    /// ```text
    /// add_line_item(catalog, 2, 5)
    ///      │
    ///      ├── index past the menu?        → Validation (OutOfRange)
    ///      ├── pizza unavailable?          → PizzaUnavailable
    ///      ├── quantity not 1..=max?       → Validation
    ///      ├── merged line past max?       → LineQuantityExceeded
    ///      ├── new line but 20 already?    → CapacityExceeded
    ///      ├── qty × price or total wraps? → ArithmeticOverflow
    ///      │
    ///      └── OK → line added (or merged), total updated
    /// ```
    ///
    /// Ordering a pizza that is already in the order merges into its line,
    /// and the merged quantity must stay within `max_quantity`.
    ///
    /// On any error the order is left exactly as it was.
    pub fn add_line_item(
        &mut self,
        catalog: &Catalog,
        pizza_index: usize,
        quantity: i64,
    ) -> CoreResult<&OrderItem> {
        let pizza = catalog
            .get(pizza_index)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "pizza number".to_string(),
                min: 1,
                max: catalog.len() as i64,
            })?;

        if !pizza.available {
            return Err(CoreError::PizzaUnavailable(pizza.name.clone()));
        }

        let quantity = validate_quantity(quantity, self.limits.max_quantity)?;

        match self.items.iter().position(|item| item.is_same_pizza(pizza)) {
            Some(index) => self.merge_into_line(index, quantity),
            None => self.push_line(pizza, quantity),
        }
    }

    fn push_line(&mut self, pizza: &PizzaType, quantity: u32) -> CoreResult<&OrderItem> {
        if self.is_full() {
            return Err(CoreError::order_full(MAX_ORDER_LINES));
        }

        let item = OrderItem::from_pizza(pizza, quantity)?;
        let new_total = self
            .total_amount
            .checked_add(item.subtotal)
            .ok_or(CoreError::ArithmeticOverflow)?;

        self.items.push(item);
        self.total_amount = new_total;
        Ok(&self.items[self.items.len() - 1])
    }

    fn merge_into_line(&mut self, index: usize, quantity: u32) -> CoreResult<&OrderItem> {
        let max = self.limits.max_quantity;
        let item = &self.items[index];

        let new_quantity = item
            .quantity
            .checked_add(quantity)
            .filter(|q| *q <= max)
            .ok_or_else(|| CoreError::LineQuantityExceeded {
                name: item.pizza_name.clone(),
                ordered: item.quantity,
                max,
            })?;

        let added = item
            .unit_price
            .checked_mul_quantity(quantity)
            .ok_or(CoreError::ArithmeticOverflow)?;
        let new_subtotal = item
            .subtotal
            .checked_add(added)
            .ok_or(CoreError::ArithmeticOverflow)?;
        let new_total = self
            .total_amount
            .checked_add(added)
            .ok_or(CoreError::ArithmeticOverflow)?;

        let item = &mut self.items[index];
        item.quantity = new_quantity;
        item.subtotal = new_subtotal;
        self.total_amount = new_total;
        Ok(&*item)
    }

    /// Sets the number of people splitting the bill.
    ///
    /// An invalid value resets the party size to 1 and returns the error.
    pub fn set_party_size(&mut self, people: i64) -> CoreResult<u32> {
        match validate_party_size(people, self.limits.max_party_size) {
            Ok(people) => {
                self.num_people = people;
                Ok(people)
            }
            Err(err) => {
                self.num_people = 1;
                Err(err.into())
            }
        }
    }

    /// Read-only snapshot of the order for display.
    pub fn summarize(&self) -> OrderSummary {
        OrderSummary {
            created_at: self.created_at,
            lines: self
                .items
                .iter()
                .map(|item| SummaryLine {
                    name: item.pizza_name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    subtotal: item.subtotal,
                })
                .collect(),
            total_amount: self.total_amount,
            num_people: self.num_people,
        }
    }

    /// Splits the total evenly across the party.
    ///
    /// An empty order has nothing to split and returns `EmptyOrder`.
    pub fn split_bill(&self) -> CoreResult<BillSplit> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        split_evenly(self.total_amount, self.num_people)
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::start()
    }
}

// =============================================================================
// Summary & Split
// =============================================================================

/// One row of an order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub subtotal: Money,
}

/// Everything needed to print an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub created_at: DateTime<Utc>,
    pub lines: Vec<SummaryLine>,
    pub total_amount: Money,
    pub num_people: u32,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The result of splitting a bill evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillSplit {
    pub total: Money,
    pub num_people: u32,
    /// `total / num_people`, rounded to the cent.
    pub per_person: Money,
}

/// Splits `total` evenly between `people`.
///
/// ## Example
/// ```rust
/// use pizza_core::{split_evenly, Money};
///
/// let split = split_evenly(Money::from_cents(3750), 3).unwrap();
/// assert_eq!(split.per_person, Money::from_cents(1250));
///
/// assert!(split_evenly(Money::from_cents(1000), 0).is_err());
/// ```
pub fn split_evenly(total: Money, people: u32) -> CoreResult<BillSplit> {
    let per_person = total.split_even(people).ok_or_else(|| ValidationError::MustBePositive {
        field: "number of people".to_string(),
    })?;

    Ok(BillSplit {
        total,
        num_people: people,
        per_person,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
