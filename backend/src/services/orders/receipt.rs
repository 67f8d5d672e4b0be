use common::model::order::Order;
use std::fmt::{self, Write};

const SEPARATOR_WIDTH: usize = 45;

/// Plain-text receipt offered as `receipt.txt`.
///
/// Each course takes one line: label padded to 10, dish padded to 25 and the
/// price right-aligned in 8 columns, followed by the total aligned under the
/// price column.
pub fn format_receipt(order: &Order) -> Result<String, fmt::Error> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut text = String::new();

    writeln!(text, "Receipt")?;
    writeln!(text)?;
    writeln!(text, "{separator}")?;
    for (course, item) in order.lines() {
        writeln!(text, "{:<10} {:<25} {:>8}", course, item.dish, item.price)?;
    }
    writeln!(text, "{separator}")?;
    writeln!(text, "{:>36} {:>8}", "Total:", format!("{:.2}", order.total))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::menu::MenuItem;

    #[test]
    fn receipt_lines_are_fixed_width() {
        let order = Order {
            starter: MenuItem::no_selection(),
            main: MenuItem::new("Salad", "6.00"),
            desert: MenuItem::no_selection(),
            total: 6.0,
        };
        let receipt = format_receipt(&order).unwrap();
        let lines: Vec<&str> = receipt.lines().collect();

        let separator = "-".repeat(45);
        assert_eq!(lines[0], "Receipt");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], separator);
        assert_eq!(lines[3], "Starter    No selection                   0.0");
        assert_eq!(lines[4], "Main       Salad                         6.00");
        assert_eq!(lines[5], "Desert     No selection                   0.0");
        assert_eq!(lines[6], separator);
        assert_eq!(lines[7], format!("{}Total:     6.00", " ".repeat(30)));
        assert_eq!(lines.len(), 8);
        assert!(receipt.ends_with('\n'));
        assert!(lines[3..6].iter().all(|line| line.chars().count() == 45));
    }
}
