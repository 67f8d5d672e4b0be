use super::Page;
use common::model::menu::{Course, Menu};
use yew::prelude::*;

pub fn menu_page(menu: &Menu) -> Page {
    Page::new("Menu", menu_tables(menu))
}

/// One table per course, listing dishes in their stored order.
pub fn menu_tables(menu: &Menu) -> Html {
    if menu.is_empty() {
        return html! { <p>{ "The menu is currently unavailable." }</p> };
    }

    html! {
        <>
            { for menu.courses().iter().map(course_table) }
        </>
    }
}

fn course_table(course: &Course) -> Html {
    html! {
        <>
            <h2>{ &course.name }</h2>
            <table class="menu">
                <tr><th>{ "Dish" }</th><th>{ "Price" }</th></tr>
                { for course.items.iter().map(|item| html! {
                    <tr>
                        <td>{ &item.dish }</td>
                        <td class="price">{ &item.price }</td>
                    </tr>
                }) }
            </table>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_page;
    use common::model::menu::MenuItem;

    #[actix_web::test]
    async fn empty_menu_shows_notice() {
        let html = render_page(menu_page(&Menu::default())).await;
        assert!(html.contains("currently unavailable"));
        assert!(!html.contains("<table"));
    }

    #[actix_web::test]
    async fn dishes_are_listed_under_their_course() {
        let mut menu = Menu::default();
        menu.push("Main", MenuItem::new("Fish & Chips", "11.25"));
        menu.push("Desert", MenuItem::new("Pie", "3.00"));
        let html = render_page(menu_page(&menu)).await;

        assert!(html.contains("<h2>Main</h2>"));
        assert!(html.contains("<td>Fish &amp; Chips</td>"));
        assert!(html.contains("<td class=\"price\">11.25</td>"));
        assert!(html.find("<h2>Main</h2>") < html.find("<h2>Desert</h2>"));
    }
}
