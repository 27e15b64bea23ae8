//! # Interactive Session
//!
//! Drives the menus and prompts over any `BufRead` / `Write` pair.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Flow                                    │
//! │                                                                         │
//! │  Main menu ──1──► Menu management ──► view / add / remove / toggle     │
//! │     │                    │                 │                            │
//! │     │                    │                 └── save after each change  │
//! │     │                    └──5──► back to main menu                      │
//! │     │                                                                   │
//! │     ├──2──► Create order ──► pick IDs + quantities ──► party size       │
//! │     │                                     │                             │
//! │     │                                     └──► summary + bill split    │
//! │     │                                                                   │
//! │     └──3 (or end of input)──► save catalog, goodbye                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected input is reported on the output and the session carries on.
//! Only terminal I/O failures end it early.

use std::io::{BufRead, Write};

use pizza_core::{Catalog, CoreError, Money, Order};
use pizza_store::CatalogStore;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::CliResult;
use crate::render::{write_menu, write_split, write_summary};

/// Whether the session keeps going after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ended; wrap up and exit.
    Quit,
}

/// One terminal session owning the catalog for its lifetime.
pub struct Session<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    store: CatalogStore,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, store: CatalogStore, config: AppConfig, input: R, output: W) -> Self {
        Session {
            input,
            output,
            catalog,
            store,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Gives back the output sink, for inspecting captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the user exits or input ends, then saves.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Pizza Management System ===")?;
            writeln!(self.output, "1. Manage Pizza Menu")?;
            writeln!(self.output, "2. Create Order & Calculate Split")?;
            writeln!(self.output, "3. Exit")?;
            write!(self.output, "Choose an option (1-3): ")?;

            let flow = match self.read_choice(1, 3)? {
                Some(1) => self.manage_menu()?,
                Some(2) => self.create_order()?,
                _ => Flow::Quit,
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Thank you for using Pizza Management System!")?;
        writeln!(self.output, "Saving menu...")?;
        self.persist()?;
        self.output.flush()?;
        Ok(())
    }

    // =========================================================================
    // Menu Management
    // =========================================================================

    fn manage_menu(&mut self) -> CliResult<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Pizza Menu Management ===")?;
            writeln!(self.output, "1. View Pizza Menu")?;
            writeln!(self.output, "2. Add New Pizza Type")?;
            writeln!(self.output, "3. Remove Pizza Type")?;
            writeln!(self.output, "4. Toggle Pizza Availability")?;
            writeln!(self.output, "5. Back to Main Menu")?;
            write!(self.output, "Choose an option (1-5): ")?;

            let flow = match self.read_choice(1, 5)? {
                Some(1) => {
                    self.show_menu()?;
                    Flow::Continue
                }
                Some(2) => self.add_pizza()?,
                Some(3) => self.remove_pizza()?,
                Some(4) => self.toggle_pizza()?,
                Some(_) => {
                    writeln!(self.output, "Returning to main menu...")?;
                    return Ok(Flow::Continue);
                }
                None => Flow::Quit,
            };

            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn add_pizza(&mut self) -> CliResult<Flow> {
        write!(self.output, "Enter pizza name: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.output, "Error: Pizza name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        write!(self.output, "Enter price ({}): ", self.config.currency_symbol)?;
        let Some(price) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let Some(price) = Money::parse(&price) else {
            writeln!(self.output, "Error: Invalid price format.")?;
            return Ok(Flow::Continue);
        };

        match self.catalog.add(&name, price) {
            Ok(pizza) => {
                debug!(name = %pizza.name, price = %pizza.price, "Pizza added");
                writeln!(self.output, "Pizza type '{}' added successfully!", pizza.name)?;
                self.persist()?;
            }
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }

        Ok(Flow::Continue)
    }

    fn remove_pizza(&mut self) -> CliResult<Flow> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No pizzas to remove.")?;
            return Ok(Flow::Continue);
        }

        self.show_menu()?;
        write!(self.output, "Enter pizza name to remove: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let name = name.trim();
        if name.is_empty() {
            writeln!(self.output, "Error: Pizza name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        match self.catalog.remove(name) {
            Ok(removed) => {
                debug!(name = %removed.name, "Pizza removed");
                writeln!(self.output, "Pizza type '{}' removed successfully!", removed.name)?;
                self.persist()?;
            }
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }

        Ok(Flow::Continue)
    }

    fn toggle_pizza(&mut self) -> CliResult<Flow> {
        if self.catalog.is_empty() {
            writeln!(self.output, "The menu is empty.")?;
            return Ok(Flow::Continue);
        }

        self.show_menu()?;
        write!(self.output, "Enter pizza name to toggle: ")?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let name = name.trim();

        match self.catalog.toggle_available(name) {
            Ok(pizza) => {
                debug!(name = %pizza.name, available = pizza.available, "Pizza availability changed");
                let state = if pizza.available { "available" } else { "unavailable" };
                writeln!(self.output, "Pizza type '{}' is now {}.", pizza.name, state)?;
                self.persist()?;
            }
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    fn create_order(&mut self) -> CliResult<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Create Pizza Order ===")?;
        self.show_menu()?;

        if self.catalog.is_empty() {
            writeln!(self.output, "No pizzas available to order.")?;
            return Ok(Flow::Continue);
        }

        let limits = self.config.order_limits();
        let mut order = Order::with_limits(limits);
        let count = self.catalog.len() as i64;

        loop {
            if order.is_full() {
                writeln!(self.output, "Order is full.")?;
                break;
            }

            write!(self.output, "Enter pizza ID (1-{}) or 0 to finish: ", count)?;
            let id = match self.read_choice(0, count)? {
                Some(0) => break,
                Some(id) => id,
                None => return Ok(Flow::Quit),
            };
            let index = (id - 1) as usize;

            let Some(pizza) = self.catalog.get(index) else {
                continue;
            };
            let name = pizza.name.clone();
            if !pizza.available {
                writeln!(self.output, "{}.", CoreError::PizzaUnavailable(name))?;
                continue;
            }

            write!(self.output, "Enter quantity for {}: ", name)?;
            let Some(quantity) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let Ok(quantity) = quantity.trim().parse::<i64>() else {
                writeln!(
                    self.output,
                    "Error: Invalid quantity (must be 1-{}).",
                    limits.max_quantity
                )?;
                continue;
            };

            match order.add_line_item(&self.catalog, index, quantity) {
                Ok(_) => {
                    debug!(pizza = %name, quantity, total = %order.total_amount(), "Line item added");
                    writeln!(self.output, "Added {} x {} to order.", quantity, name)?;
                }
                Err(CoreError::ArithmeticOverflow) => {
                    writeln!(
                        self.output,
                        "Error: Order total would overflow. Please reduce quantity."
                    )?;
                    continue;
                }
                Err(err) => {
                    writeln!(self.output, "Error: {}", err)?;
                    continue;
                }
            }

            write!(self.output, "Continue ordering? (1=Yes, 0=No): ")?;
            match self.read_choice(0, 1)? {
                Some(1) => {}
                Some(_) => break,
                None => return Ok(Flow::Quit),
            }
        }

        if order.is_empty() {
            writeln!(self.output, "No items in order.")?;
            return Ok(Flow::Continue);
        }

        write!(self.output, "Enter number of people splitting the bill: ")?;
        let Some(people) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let people = people.trim().parse::<i64>().unwrap_or(0);
        if order.set_party_size(people).is_err() {
            writeln!(
                self.output,
                "Error: Invalid number of people (must be 1-{}). Using 1.",
                limits.max_party_size
            )?;
        }

        let symbol = self.config.currency_symbol.clone();
        write_summary(&mut self.output, &order.summarize(), &symbol)?;
        let split = order.split_bill()?;
        write_split(&mut self.output, &split, &symbol)?;
        info!(
            lines = order.item_count(),
            total = %split.total,
            people = split.num_people,
            "Order completed"
        );

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn show_menu(&mut self) -> CliResult<()> {
        write_menu(&mut self.output, &self.catalog, &self.config.currency_symbol)?;
        Ok(())
    }

    /// Saves the catalog, reporting a failure without ending the session.
    fn persist(&mut self) -> CliResult<()> {
        if let Err(err) = self.store.save(&self.catalog) {
            warn!(error = %err, "Catalog save failed");
            writeln!(self.output, "Warning: Could not save menu to file.")?;
        }
        Ok(())
    }

    /// Reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Reads an integer in `min..=max`, re-prompting until one arrives.
    fn read_choice(&mut self, min: i64, max: i64) -> CliResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.trim().parse::<i64>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(Some(choice)),
                _ => write!(
                    self.output,
                    "Invalid input. Please enter a number between {} and {}: ",
                    min, max
                )?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::seed::default_catalog;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(dir: &TempDir, script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let store = CatalogStore::new(config.menu_path());
        Session::new(
            default_catalog().unwrap(),
            store,
            config,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    fn run_script(script: &str) -> (Catalog, String) {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir, script);
        session.run().unwrap();
        let catalog = session.catalog().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (catalog, output)
    }

    #[test]
    fn test_exit_saves_catalog() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir, "3\n");
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Thank you for using Pizza Management System!"));
        assert!(dir.path().join("pizza_menu.txt").exists());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_, output) = run_script("");
        assert!(output.ends_with("Saving menu...\n"));
    }

    #[test]
    fn test_choice_reprompts_until_valid() {
        let (_, output) = run_script("9\nabc\n3\n");
        assert_eq!(
            output
                .matches("Invalid input. Please enter a number between 1 and 3: ")
                .count(),
            2
        );
    }

    #[test]
    fn test_add_pizza() {
        let (catalog, output) = run_script("1\n2\nDiavola\n13.50\n5\n3\n");

        assert!(output.contains("Pizza type 'Diavola' added successfully!"));
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.pizzas()[6].price, Money::from_cents(1350));
    }

    #[test]
    fn test_add_rejections() {
        let (catalog, output) =
            run_script("1\n2\n\n2\nmargherita\n9.00\n2\nFree\nzero\n2\nPricey\n1000\n5\n3\n");

        assert!(output.contains("Error: Pizza name cannot be empty."));
        assert!(output.contains("Error: Pizza type 'margherita' already exists"));
        assert!(output.contains("Error: Invalid price format."));
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_remove_pizza() {
        let (catalog, output) = run_script("1\n3\nhawaiian\n3\nCalzone\n5\n3\n");

        assert!(output.contains("Pizza type 'Hawaiian' removed successfully!"));
        assert!(output.contains("Error: Pizza type 'Calzone' not found"));
        assert_eq!(catalog.len(), 5);
        assert!(catalog.find_by_name("Hawaiian").is_none());
    }

    #[test]
    fn test_toggle_blocks_ordering() {
        let (catalog, output) = run_script("1\n4\npepperoni\n5\n2\n2\n0\n3\n");

        assert!(output.contains("Pizza type 'Pepperoni' is now unavailable."));
        assert!(!catalog.pizzas()[1].available);
        assert!(output.contains("Sorry, Pepperoni is not available."));
        assert!(output.contains("No items in order."));
    }

    #[test]
    fn test_order_and_split() {
        let (_, output) = run_script("2\n2\n3\n1\n1\n2\n0\n4\n3\n");

        assert!(output.contains("Added 3 x Pepperoni to order."));
        assert!(output.contains("Added 2 x Margherita to order."));
        assert!(output.contains("Total Amount: €57.50"));
        assert!(output.contains("Number of People: 4"));
        assert!(output.contains("Cost per person: €14.38"));
    }

    #[test]
    fn test_order_rejects_bad_quantity() {
        let (_, output) = run_script("2\n1\nmany\n1\n0\n1\n1001\n1\n1\n0\n2\n3\n");

        assert!(output.contains("Error: Invalid quantity (must be 1-1000)."));
        assert!(output.contains("Error: quantity must be between 1 and 1000"));
        assert!(output.contains("Added 1 x Margherita to order."));
        assert!(output.contains("Cost per person: €5.00"));
    }

    #[test]
    fn test_repeat_order_reports_combined_quantity() {
        let (_, output) = run_script("2\n1\n600\n1\n1\n600\n1\n1\n400\n0\n1\n3\n");

        assert!(output.contains(
            "Error: Order already has 600 x Margherita; the combined quantity must be at most 1000"
        ));
        assert!(output.contains("Added 400 x Margherita to order."));
        assert!(output.contains(&format!("{:<25} {:<8} €{:<9} €10000.00", "Margherita", 1000, "10.00")));
    }

    #[test]
    fn test_invalid_party_size_falls_back_to_one() {
        let (_, output) = run_script("2\n1\n2\n0\n0\n3\n");

        assert!(output.contains("Error: Invalid number of people (must be 1-1000). Using 1."));
        assert!(output.contains("Number of People: 1"));
        assert!(output.contains("Cost per person: €20.00"));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: dir.path().join("missing"),
            ..AppConfig::default()
        };
        let store = CatalogStore::new(config.menu_path());
        let mut session = Session::new(
            default_catalog().unwrap(),
            store,
            config,
            Cursor::new(b"1\n3\nHawaiian\n5\n3\n".to_vec()),
            Vec::new(),
        );
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(output.matches("Warning: Could not save menu to file.").count(), 2);
    }
}
