//! Text rendering for products, listings and statistics.
//!
//! Everything here returns a `String`; the menu decides where it goes.

use stockroom_core::{Inventory, Product};

use crate::config::ConsoleConfig;

const WIDE_RULE: usize = 70;
const RULE: usize = 60;
const CARD_RULE: usize = 50;

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Single-line summary of a product.
///
/// `ID: 1 | Name: Steel Bolt | Quantity: 3 | Price: $10.00`
pub fn product_row(product: &Product, config: &ConsoleConfig) -> String {
    format!(
        "ID: {} | Name: {} | Quantity: {} | Price: {}",
        product.id(),
        product.name(),
        product.quantity(),
        config.format_currency(product.price())
    )
}

/// Multi-line card of a product, framed by rules.
pub fn product_card(product: &Product, config: &ConsoleConfig) -> String {
    let line = rule('-', CARD_RULE);
    format!(
        "{line}\nID: {}\nName: {}\nQuantity: {}\nPrice: {}\n{line}",
        product.id(),
        product.name(),
        product.quantity(),
        config.format_currency(product.price()),
    )
}

/// Numbered listing of the whole inventory.
pub fn inventory_listing(inventory: &Inventory, config: &ConsoleConfig) -> String {
    if inventory.is_empty() {
        return "The inventory is empty.".to_string();
    }

    let line = rule('=', WIDE_RULE);
    let mut out = format!("{line}\nFULL INVENTORY\n{line}\n");
    for (n, product) in inventory.list_all().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, product_row(product, config)));
    }
    out.push_str(&format!(
        "{line}\nTotal products in inventory: {}\n{line}",
        inventory.count()
    ));
    out
}

/// Search results, or a "no match" line.
pub fn search_results(query: &str, matches: &[&Product], config: &ConsoleConfig) -> String {
    if matches.is_empty() {
        return format!("No products match '{}'.", query);
    }

    let mut out = format!("Found {} product(s):\n{}", matches.len(), rule('-', RULE));
    for product in matches {
        out.push('\n');
        out.push_str(&product_card(product, config));
    }
    out
}

/// Count and total value of the inventory.
pub fn statistics(inventory: &Inventory, config: &ConsoleConfig) -> String {
    let line = rule('=', RULE);
    format!(
        "{line}\nINVENTORY STATISTICS\n{line}\nDistinct products: {}\nTotal inventory value: {}\n{line}",
        inventory.count(),
        config.format_currency(inventory.total_value()),
    )
}

pub fn main_menu(config: &ConsoleConfig) -> String {
    let line = rule('=', RULE);
    format!(
        "{line}\n{}\n{line}\n\
         1. Add product\n\
         2. Remove product\n\
         3. Update product\n\
         4. Search products\n\
         5. List all products\n\
         6. Inventory statistics\n\
         0. Exit\n\
         {line}",
        config.store_name.to_uppercase(),
    )
}

pub fn update_menu() -> &'static str {
    "What do you want to update?\n1. Quantity\n2. Price\n3. Both\n4. Name"
}

pub fn welcome(config: &ConsoleConfig) -> String {
    match &config.subtitle {
        Some(subtitle) => format!("Welcome to {}\n{}", config.store_name, subtitle),
        None => format!("Welcome to {}", config.store_name),
    }
}

pub fn farewell(config: &ConsoleConfig) -> String {
    format!("Thank you for using {}.\nGoodbye!", config.store_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductId;

    fn inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add(ProductId::new(1), "Steel Bolt", 3, 10.0).unwrap();
        inventory.add(ProductId::new(2), "Hammer", 2, 5.5).unwrap();
        inventory
    }

    #[test]
    fn test_product_row() {
        let inv = inventory();
        let row = product_row(&inv.list_all()[0], &ConsoleConfig::default());
        assert_eq!(row, "ID: 1 | Name: Steel Bolt | Quantity: 3 | Price: $10.00");
    }

    #[test]
    fn test_product_card() {
        let inv = inventory();
        let card = product_card(&inv.list_all()[1], &ConsoleConfig::default());
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "ID: 2");
        assert_eq!(lines[2], "Name: Hammer");
        assert_eq!(lines[4], "Price: $5.50");
        assert_eq!(lines[0], lines[5]);
    }

    #[test]
    fn test_inventory_listing() {
        let config = ConsoleConfig::default();
        assert_eq!(
            inventory_listing(&Inventory::new(), &config),
            "The inventory is empty."
        );

        let listing = inventory_listing(&inventory(), &config);
        assert!(listing.contains("1. ID: 1 | Name: Steel Bolt"));
        assert!(listing.contains("2. ID: 2 | Name: Hammer"));
        assert!(listing.contains("Total products in inventory: 2"));
    }

    #[test]
    fn test_search_results() {
        let config = ConsoleConfig::default();
        let inv = inventory();
        assert_eq!(
            search_results("drill", &inv.find_by_name_substring("drill"), &config),
            "No products match 'drill'."
        );

        let out = search_results("bolt", &inv.find_by_name_substring("bolt"), &config);
        assert!(out.starts_with("Found 1 product(s):"));
        assert!(out.contains("Name: Steel Bolt"));
    }

    #[test]
    fn test_statistics() {
        let out = statistics(&inventory(), &ConsoleConfig::default());
        assert!(out.contains("Distinct products: 2"));
        assert!(out.contains("Total inventory value: $41.00"));
    }

    #[test]
    fn test_welcome_with_subtitle() {
        let config = ConsoleConfig {
            subtitle: Some("Back room".to_string()),
            ..ConsoleConfig::default()
        };
        assert_eq!(welcome(&config), "Welcome to Stockroom Inventory\nBack room");
    }
}
