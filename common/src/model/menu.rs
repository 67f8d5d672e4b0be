pub const STARTER: &str = "Starter";
pub const MAIN: &str = "Main";
pub const DESERT: &str = "Desert";

/// Courses a visitor can order from, in the order they appear on a receipt.
pub const COURSES: [&str; 3] = [STARTER, MAIN, DESERT];

/// Header row every menu CSV starts with.
pub const MENU_HEADER: [&str; 3] = ["Course", "Dish", "Price"];

pub const NO_SELECTION: &str = "No selection";
pub const NO_SELECTION_PRICE: &str = "0.0";

/// Numeric value of a price as written in a menu file, surrounding blanks allowed.
pub fn parse_price(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// A single dish and its price.
///
/// The price is kept as the text read from the CSV file so that it can be shown
/// exactly as the restaurant wrote it; it is parsed only when totals are computed
/// or a menu is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub dish: String,
    pub price: String,
}

impl MenuItem {
    pub fn new(dish: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            dish: dish.into(),
            price: price.into(),
        }
    }

    /// Placeholder used for a course the visitor left empty.
    pub fn no_selection() -> Self {
        Self::new(NO_SELECTION, NO_SELECTION_PRICE)
    }

    pub fn price_value(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Label shown next to the radio button on the order form.
    pub fn label(&self) -> String {
        format!("{} ({})", self.dish, self.price)
    }
}

/// A course and its dishes, in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Mapping from course name to its dishes.
///
/// Courses keep the order in which they were first seen, which is also the
/// order they are displayed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    courses: Vec<Course>,
}

impl Menu {
    /// Appends `item` to `course`, creating the course on first sight.
    pub fn push(&mut self, course: &str, item: MenuItem) {
        match self.courses.iter_mut().find(|c| c.name == course) {
            Some(existing) => existing.items.push(item),
            None => self.courses.push(Course {
                name: course.to_string(),
                items: vec![item],
            }),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Dishes of `course`, or an empty slice when the course is unknown.
    pub fn items(&self, course: &str) -> &[MenuItem] {
        self.courses
            .iter()
            .find(|c| c.name == course)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    /// First dish of `course` named `dish`.
    pub fn find(&self, course: &str, dish: &str) -> Option<&MenuItem> {
        self.items(course).iter().find(|item| item.dish == dish)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn dish_count(&self) -> usize {
        self.courses.iter().map(|c| c.items.len()).sum()
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }
}

impl From<Vec<Course>> for Menu {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_groups_items_by_course_in_first_seen_order() {
        let mut menu = Menu::default();
        menu.push(MAIN, MenuItem::new("Burger", "9.50"));
        menu.push(STARTER, MenuItem::new("Soup", "4.00"));
        menu.push(MAIN, MenuItem::new("Salad", "6.00"));

        let names: Vec<&str> = menu.courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![MAIN, STARTER]);
        assert_eq!(
            menu.items(MAIN),
            &[MenuItem::new("Burger", "9.50"), MenuItem::new("Salad", "6.00")]
        );
        assert_eq!(menu.dish_count(), 3);
    }

    #[test]
    fn unknown_course_has_no_items() {
        let menu = Menu::default();
        assert!(menu.items(DESERT).is_empty());
        assert!(menu.find(DESERT, "Pie").is_none());
    }

    #[test]
    fn find_returns_first_match() {
        let mut menu = Menu::default();
        menu.push(DESERT, MenuItem::new("Pie", "3.00"));
        menu.push(DESERT, MenuItem::new("Pie", "5.00"));
        assert_eq!(menu.find(DESERT, "Pie").map(|i| i.price.as_str()), Some("3.00"));
    }

    #[test]
    fn prices_parse_with_surrounding_blanks() {
        assert_eq!(parse_price(" 6.50 "), Some(6.5));
        assert_eq!(parse_price("six"), None);
        assert_eq!(MenuItem::no_selection().price_value(), Some(0.0));
    }

    #[test]
    fn label_shows_dish_and_price() {
        assert_eq!(MenuItem::new("Salad", "6.00").label(), "Salad (6.00)");
    }
}
