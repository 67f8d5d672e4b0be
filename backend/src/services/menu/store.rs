use crate::error::MenuError;
use common::model::menu::{Menu, MenuItem};
use log::{debug, error, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads the menu served by the site.
///
/// Best effort: a missing or unreadable file is logged and yields an empty menu,
/// the server still starts.
pub fn load(path: &Path) -> Menu {
    let loaded = File::open(path)
        .map_err(MenuError::from)
        .and_then(read_menu);

    match loaded {
        Ok(menu) => {
            info!(
                "Loaded {} dishes in {} courses from {}",
                menu.dish_count(),
                menu.courses().len(),
                path.display()
            );
            menu
        }
        Err(err) => {
            error!("Failed to load menu from {}: {}", path.display(), err);
            Menu::default()
        }
    }
}

/// Reads `Course,Dish,Price` rows. The header row is skipped without being
/// checked and prices are taken as they are.
pub fn read_menu<R: Read>(reader: R) -> Result<Menu, MenuError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut menu = Menu::default();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 3 {
            debug!("Skipping menu row {}: {} columns", idx + 2, record.len());
            continue;
        }
        menu.push(&record[0], MenuItem::new(&record[1], &record[2]));
    }
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rows_are_grouped_by_course_in_file_order() {
        let csv = "Course,Dish,Price\nMain,Burger,9.50\nStarter,Soup,4.00\nMain,Salad,6.00\n";
        let menu = read_menu(csv.as_bytes()).unwrap();

        assert_eq!(menu.courses()[0].name, "Main");
        assert_eq!(
            menu.items("Main"),
            &[MenuItem::new("Burger", "9.50"), MenuItem::new("Salad", "6.00")]
        );
        assert_eq!(menu.items("Starter"), &[MenuItem::new("Soup", "4.00")]);
    }

    #[test]
    fn header_is_skipped_whatever_it_says() {
        let menu = read_menu("anything\nDesert,Pie,3.00\n".as_bytes()).unwrap();
        assert_eq!(menu.items("Desert"), &[MenuItem::new("Pie", "3.00")]);
    }

    #[test]
    fn short_rows_are_skipped_and_prices_not_checked() {
        let csv = "Course,Dish,Price\nMain,Burger\nMain,Stew,market price\n";
        let menu = read_menu(csv.as_bytes()).unwrap();
        assert_eq!(menu.items("Main"), &[MenuItem::new("Stew", "market price")]);
    }

    #[test]
    fn missing_file_gives_empty_menu() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("menu.csv")).is_empty());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Course,Dish,Price\nMain,Salad,6.00\n").unwrap();
        let menu = load(file.path());
        assert_eq!(menu.find("Main", "Salad").map(|i| i.price.as_str()), Some("6.00"));
    }
}
