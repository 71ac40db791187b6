use std::fs;
use std::path::Path;

use super::ConfigError;
use crate::domain::MenuItem;

/// The menu used when no menu file is configured.
pub fn default_menu() -> Vec<MenuItem> {
    let mut donut = MenuItem::new("3", "Chocolate Donut", "Dessert", 4.0, 0);
    donut.manual_sold_out = true;

    vec![
        MenuItem::new("1", "Premium Coffee", "Beverage", 3.0, 30),
        MenuItem::new("2", "Veggie Sandwich", "Snack", 5.0, 10),
        donut,
        MenuItem::new("4", "Fresh Orange Juice", "Beverage", 4.5, 15),
        MenuItem::new("5", "Chicken Burger", "Meal", 8.0, 5),
        MenuItem::new("6", "Apple Pie Slice", "Dessert", 3.5, 8),
    ]
}

/// Reads a JSON array of menu items.
pub fn load_menu(path: &Path) -> Result<Vec<MenuItem>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::MenuRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_menu(&raw).map_err(|source| ConfigError::MenuParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_menu(raw: &str) -> Result<Vec<MenuItem>, serde_json::Error> {
    serde_json::from_str(raw)
}
