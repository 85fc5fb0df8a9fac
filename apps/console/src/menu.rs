//! # Menu Loop
//!
//! The interactive menu over any reader/writer pair.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Console Menu                                     │
//! │                                                                         │
//! │  show menu ──► read choice ──┬── 1 ──► add_product()                    │
//! │      ▲                       ├── 2 ──► remove_product()                 │
//! │      │                       ├── 3 ──► update_product()                 │
//! │      │                       ├── 4 ──► search_products()                │
//! │      │                       ├── 5 ──► list_products()                  │
//! │      │                       ├── 6 ──► show_statistics()                │
//! │      │                       ├── 0 / EOF ──► farewell, stop             │
//! │      │                       └── other ──► "Invalid option"             │
//! │      │                                                                  │
//! │      └──── recoverable error? print message ◄──────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can script a whole session with
//! an in-memory cursor.

use std::io::{BufRead, Write};
use std::str::FromStr;

use stockroom_core::{Inventory, ProductId};
use tracing::{debug, info, warn};

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};
use crate::format;

/// What the loop should do after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive console session owning its inventory.
pub struct Console<R, W> {
    inventory: Inventory,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session with an empty inventory.
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Console {
            inventory: Inventory::new(),
            config,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Only I/O failures escape; everything else, including input that is not
    /// valid UTF-8, is reported inline.
    pub fn run(&mut self) -> ConsoleResult<()> {
        let welcome = format::welcome(&self.config);
        self.say(&welcome)?;

        loop {
            let menu = format::main_menu(&self.config);
            self.say("")?;
            self.say(&menu)?;

            let choice = match self.prompt("Select an option: ") {
                Ok(Some(choice)) => choice,
                Ok(None) => {
                    debug!("Input closed, leaving menu");
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "Unreadable menu choice");
                    self.say(&err.user_message())?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "Menu action failed");
                    self.say(&err.user_message())?;
                }
                Err(err) => return Err(err),
            }
        }

        let farewell = format::farewell(&self.config);
        self.say("")?;
        self.say(&farewell)?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> ConsoleResult<Flow> {
        match choice {
            "1" => self.add_product()?,
            "2" => self.remove_product()?,
            "3" => self.update_product()?,
            "4" => self.search_products()?,
            "5" => self.list_products()?,
            "6" => self.show_statistics()?,
            "0" => return Ok(Flow::Exit),
            _ => self.say("Invalid option. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_product(&mut self) -> ConsoleResult<()> {
        self.say("\n--- ADD NEW PRODUCT ---")?;
        let Some(id) = self.prompt_parse::<i64>("Product ID: ", "ID")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Product name: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt_parse::<i64>("Initial quantity: ", "quantity")? else {
            return Ok(());
        };
        let Some(price) = self.prompt_parse::<f64>("Unit price: ", "price")? else {
            return Ok(());
        };

        let product = self
            .inventory
            .add(ProductId::new(id), name, quantity, price)?;
        info!(id = %product.id(), name = product.name(), "Product added");
        let message = format!("Product '{}' added.", product.name());
        self.say(&message)
    }

    fn remove_product(&mut self) -> ConsoleResult<()> {
        self.say("\n--- REMOVE PRODUCT ---")?;
        let Some(id) = self.prompt_parse::<i64>("ID of the product to remove: ", "ID")? else {
            return Ok(());
        };

        let removed = self.inventory.remove(ProductId::new(id))?;
        info!(id = %removed.id(), "Product removed");
        self.say(&format!("Product '{}' removed.", removed.name()))
    }

    fn update_product(&mut self) -> ConsoleResult<()> {
        self.say("\n--- UPDATE PRODUCT ---")?;
        let Some(id) = self.prompt_parse::<i64>("ID of the product to update: ", "ID")? else {
            return Ok(());
        };
        let id = ProductId::new(id);

        self.say(format::update_menu())?;
        let Some(option) = self.prompt("Select (1-4): ")? else {
            return Ok(());
        };

        match option.trim() {
            "1" => self.update_quantity(id),
            "2" => self.update_price(id),
            "3" => {
                let Some(quantity) = self.prompt_parse::<i64>("New quantity: ", "quantity")? else {
                    return Ok(());
                };
                let Some(price) = self.prompt_parse::<f64>("New price: ", "price")? else {
                    return Ok(());
                };
                // Each half is reported on its own; a rejected quantity does not
                // stop the price from being applied.
                let quantity_result = self.apply_quantity(id, quantity);
                self.report(quantity_result)?;
                let price_result = self.apply_price(id, price);
                self.report(price_result)
            }
            "4" => {
                let Some(name) = self.prompt("New name: ")? else {
                    return Ok(());
                };
                self.inventory.update_name(id, name.as_str())?;
                info!(%id, "Product renamed");
                self.say(&format!("Name of product ID {} updated to '{}'.", id, name))
            }
            _ => self.say("Invalid option."),
        }
    }

    fn update_quantity(&mut self, id: ProductId) -> ConsoleResult<()> {
        let Some(quantity) = self.prompt_parse::<i64>("New quantity: ", "quantity")? else {
            return Ok(());
        };
        let message = self.apply_quantity(id, quantity)?;
        self.say(&message)
    }

    fn update_price(&mut self, id: ProductId) -> ConsoleResult<()> {
        let Some(price) = self.prompt_parse::<f64>("New price: ", "price")? else {
            return Ok(());
        };
        let message = self.apply_price(id, price)?;
        self.say(&message)
    }

    fn apply_quantity(&mut self, id: ProductId, quantity: i64) -> ConsoleResult<String> {
        self.inventory.update_quantity(id, quantity)?;
        info!(%id, quantity, "Quantity updated");
        Ok(format!(
            "Quantity of product ID {} updated to {}.",
            id, quantity
        ))
    }

    fn apply_price(&mut self, id: ProductId, price: f64) -> ConsoleResult<String> {
        self.inventory.update_price(id, price)?;
        info!(%id, price, "Price updated");
        Ok(format!(
            "Price of product ID {} updated to {}.",
            id,
            self.config.format_currency(price)
        ))
    }

    fn search_products(&mut self) -> ConsoleResult<()> {
        self.say("\n--- SEARCH PRODUCTS ---")?;
        let Some(query) = self.prompt("Name (or part of it) to search for: ")? else {
            return Ok(());
        };

        let matches = self.inventory.find_by_name_substring(&query);
        debug!(query = %query, matches = matches.len(), "Search finished");
        let text = format::search_results(&query, &matches, &self.config);
        self.say(&text)
    }

    fn list_products(&mut self) -> ConsoleResult<()> {
        let text = format::inventory_listing(&self.inventory, &self.config);
        self.say("")?;
        self.say(&text)
    }

    fn show_statistics(&mut self) -> ConsoleResult<()> {
        let text = format::statistics(&self.inventory, &self.config);
        self.say("")?;
        self.say(&text)
    }

    // =========================================================================
    // I/O helpers
    // =========================================================================

    /// Prints a success message, or the user message of a recoverable error.
    fn report(&mut self, result: ConsoleResult<String>) -> ConsoleResult<()> {
        match result {
            Ok(message) => self.say(&message),
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "Update rejected");
                self.say(&err.user_message())
            }
            Err(err) => Err(err),
        }
    }

    fn say(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints `label` and reads one line. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(buf).map_err(|_| ConsoleError::InvalidText)?;
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prompts and parses the answer, trimming surrounding whitespace.
    fn prompt_parse<T: FromStr>(
        &mut self,
        label: &str,
        field: &'static str,
    ) -> ConsoleResult<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConsoleError::InvalidNumber { field, input: raw })
    }
}
