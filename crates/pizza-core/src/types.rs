//! # Domain Types
//!
//! The pizza catalog and its entries.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────┐     ┌─────────────────┐              │
//! │  │          Catalog             │     │    PizzaType    │              │
//! │  │  ──────────────────────────  │ 0..20  ─────────────  │              │
//! │  │  pizzas (insertion order)    │────►│  name (≤49)     │              │
//! │  │  unique by name, any case    │     │  price (Money)  │              │
//! │  └──────────────────────────────┘     │  available      │              │
//! │                                       └─────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation either succeeds completely or returns an error and leaves
//! the catalog exactly as it was.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_pizza_name, validate_price, validate_stored_name};
use crate::MAX_PIZZA_TYPES;

// =============================================================================
// Pizza Type
// =============================================================================

/// A pizza on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaType {
    /// Display name, unique within its catalog ignoring case.
    pub name: String,

    /// Price of one pizza.
    pub price: Money,

    /// Whether the pizza can currently be ordered.
    pub available: bool,
}

impl PizzaType {
    /// Creates an available pizza.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        PizzaType {
            name: name.into(),
            price,
            available: true,
        }
    }

    /// Case-insensitive name comparison used for the uniqueness rule.
    pub fn name_matches(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

// =============================================================================
// Catalog
// =============================================================================

/// The bounded, ordered set of pizzas that can be ordered.
///
/// ## Invariants
/// - At most `MAX_PIZZA_TYPES` (20) entries
/// - No two entries share a name, ignoring case
/// - Insertion order is preserved; removal closes the gap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pizzas: Vec<PizzaType>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            pizzas: Vec::with_capacity(MAX_PIZZA_TYPES),
        }
    }

    /// Number of pizza types.
    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    /// Checks if another pizza type would exceed the capacity.
    pub fn is_full(&self) -> bool {
        self.pizzas.len() >= MAX_PIZZA_TYPES
    }

    /// All entries in menu order.
    pub fn pizzas(&self) -> &[PizzaType] {
        &self.pizzas
    }

    /// Iterates entries in menu order.
    pub fn iter(&self) -> std::slice::Iter<'_, PizzaType> {
        self.pizzas.iter()
    }

    /// Returns the entry at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&PizzaType> {
        self.pizzas.get(index)
    }

    /// Finds a pizza by name, ignoring case.
    ///
    /// Returns the zero-based index of the first match. Names are unique, so
    /// there is at most one.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.pizzas.iter().position(|p| p.name_matches(name))
    }

    /// Adds a new, available pizza to the end of the menu.
    ///
    /// ## Checks (in order)
    /// ```text
    /// add("Diavola", 13.50)
    ///      │
    ///      ├── 20 entries already?          → CapacityExceeded
    ///      ├── bad name / price out of range → Validation
    ///      ├── "diavola" already present?    → DuplicateName
    ///      │
    ///      └── OK → appended, available = true
    /// ```
    pub fn add(&mut self, name: &str, price: Money) -> CoreResult<&PizzaType> {
        if self.is_full() {
            return Err(CoreError::catalog_full(MAX_PIZZA_TYPES));
        }

        let name = validate_pizza_name(name)?;
        validate_price(price)?;

        self.insert(PizzaType::new(name, price))?;
        Ok(&self.pizzas[self.pizzas.len() - 1])
    }

    /// Appends an already-built entry.
    ///
    /// This is the path for entries read back from storage. Capacity,
    /// uniqueness and the storable-name rule are enforced; the price window
    /// and the typed-name character set are not.
    pub fn insert(&mut self, pizza: PizzaType) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::catalog_full(MAX_PIZZA_TYPES));
        }

        validate_stored_name(&pizza.name)?;

        if self.find_by_name(&pizza.name).is_some() {
            return Err(CoreError::DuplicateName(pizza.name));
        }

        self.pizzas.push(pizza);
        Ok(())
    }

    /// Removes a pizza by name, ignoring case, and returns it.
    ///
    /// Later entries shift down one place.
    pub fn remove(&mut self, name: &str) -> CoreResult<PizzaType> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

        Ok(self.pizzas.remove(index))
    }

    /// Marks a pizza as available or unavailable.
    pub fn set_available(&mut self, name: &str, available: bool) -> CoreResult<&PizzaType> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

        let pizza = &mut self.pizzas[index];
        pizza.available = available;
        Ok(&*pizza)
    }

    /// Flips a pizza's availability and returns the updated entry.
    pub fn toggle_available(&mut self, name: &str) -> CoreResult<&PizzaType> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;

        let pizza = &mut self.pizzas[index];
        pizza.available = !pizza.available;
        Ok(&*pizza)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PizzaType;
    type IntoIter = std::slice::Iter<'a, PizzaType>;

    fn into_iter(self) -> Self::IntoIter {
        self.pizzas.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
