use crate::error::MenuError;
use common::model::menu::{Course, Menu, MenuItem, MENU_HEADER};
use log::debug;

/// Orders courses by name and the dishes of each course by ascending price.
///
/// Dishes with the same price keep their relative order.
pub fn sort_menu(menu: Menu) -> Result<Menu, MenuError> {
    let mut courses = menu.into_courses();
    courses.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        "Sorted courses: {:?}",
        courses.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );

    let courses = courses
        .into_iter()
        .map(sort_course)
        .collect::<Result<Vec<Course>, MenuError>>()?;

    Ok(Menu::from(courses))
}

fn sort_course(course: Course) -> Result<Course, MenuError> {
    let mut priced = Vec::with_capacity(course.items.len());
    for item in course.items {
        priced.push((price_of(&item)?, item));
    }
    // `sort_by` is stable, equal prices keep file order.
    priced.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    Ok(Course {
        name: course.name,
        items: priced.into_iter().map(|(_, item)| item).collect(),
    })
}

/// Writes the menu as `Course,Dish,Price` CSV with prices to two decimals.
pub fn serialize(menu: &Menu) -> Result<String, MenuError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(MENU_HEADER)?;
    for course in menu.courses() {
        for item in &course.items {
            let price = format!("{:.2}", price_of(item)?);
            writer.write_record([course.name.as_str(), item.dish.as_str(), price.as_str()])?;
        }
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn price_of(item: &MenuItem) -> Result<f64, MenuError> {
    item.price_value()
        .ok_or_else(|| MenuError::InvalidPrice(item.price.clone()))
}
