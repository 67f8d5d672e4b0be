use super::Page;
use common::model::menu::{Menu, COURSES};
use common::model::order::Order;
use common::requests::OrderRequest;
use yew::prelude::*;

/// Order form with one radio group per course. Choices already made in
/// `request` stay ticked when the form is shown again.
pub fn order_form(menu: &Menu, request: &OrderRequest) -> Page {
    let content = html! {
        <form method="post" action="/order">
            { for COURSES.iter().map(|course| course_choices(menu, request, course)) }
            <button type="submit">{ "Order" }</button>
        </form>
    };
    Page::new("Order", content)
}

fn course_choices(menu: &Menu, request: &OrderRequest, course: &str) -> Html {
    let field = course.to_lowercase();
    let picked = request.selection(course);
    let items = menu.items(course);

    html! {
        <fieldset>
            <legend>{ course }</legend>
            <ul class="list-unstyled">
                {
                    if items.is_empty() {
                        html! { <li>{ "No dishes available" }</li> }
                    } else {
                        html! {}
                    }
                }
                { for items.iter().enumerate().map(|(idx, item)| {
                    let id = format!("{field}-{idx}");
                    html! {
                        <li>
                            <input
                                type="radio"
                                id={id.clone()}
                                name={field.clone()}
                                value={item.dish.clone()}
                                checked={picked == Some(item.dish.as_str())}
                            />
                            { " " }
                            <label for={id}>{ item.label() }</label>
                        </li>
                    }
                }) }
            </ul>
        </fieldset>
    }
}

pub fn receipt_page(order: &Order, token: &str) -> Page {
    let content = html! {
        <>
            <table class="receipt">
                <tr><th>{ "Course" }</th><th>{ "Dish" }</th><th>{ "Price" }</th></tr>
                { for order.lines().into_iter().map(|(course, item)| html! {
                    <tr>
                        <td>{ course }</td>
                        <td>{ &item.dish }</td>
                        <td class="price">{ &item.price }</td>
                    </tr>
                }) }
                <tr class="total">
                    <td></td>
                    <td>{ "Total:" }</td>
                    <td class="price">{ format!("{:.2}", order.total) }</td>
                </tr>
            </table>
            <p>
                <a class="button" href={format!("/order/receipt/{token}/download")}>
                    { "Download receipt" }
                </a>
            </p>
        </>
    };
    Page::new("Receipt", content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_page;
    use common::model::menu::MenuItem;

    fn menu() -> Menu {
        let mut menu = Menu::default();
        menu.push("Main", MenuItem::new("Burger", "9.50"));
        menu.push("Main", MenuItem::new("Salad", "6.00"));
        menu
    }

    /// The `<input ...>` tag whose value is `value`.
    fn radio<'a>(html: &'a str, value: &str) -> &'a str {
        let needle = format!("value=\"{value}\"");
        html.split("<input")
            .skip(1)
            .map(|rest| &rest[..rest.find('>').unwrap()])
            .find(|tag| tag.contains(&needle))
            .unwrap()
    }

    #[actix_web::test]
    async fn form_offers_each_dish_with_its_price() {
        let html = render_page(order_form(&menu(), &OrderRequest::default())).await;
        assert!(radio(&html, "Burger").contains("name=\"main\""));
        assert!(html.contains("Salad (6.00)"));
        assert_eq!(html.matches("No dishes available").count(), 2);
        assert!(!html.contains("checked"));
    }

    #[actix_web::test]
    async fn previous_choice_stays_checked() {
        let request = OrderRequest {
            main: Some("Salad".to_string()),
            ..OrderRequest::default()
        };
        let html = render_page(order_form(&menu(), &request)).await;
        assert!(radio(&html, "Salad").contains("checked"));
        assert!(!radio(&html, "Burger").contains("checked"));
    }

    #[actix_web::test]
    async fn dish_names_are_escaped() {
        let mut menu = Menu::default();
        menu.push("Main", MenuItem::new("<b>Stew</b>", "7"));
        let html = render_page(order_form(&menu, &OrderRequest::default())).await;
        assert!(html.contains("&lt;b&gt;Stew&lt;/b&gt; (7)"));
        assert!(!html.contains("<b>Stew"));
    }

    #[actix_web::test]
    async fn receipt_links_to_download() {
        let order = Order {
            starter: MenuItem::no_selection(),
            main: MenuItem::new("Salad", "6.00"),
            desert: MenuItem::no_selection(),
            total: 6.0,
        };
        let html = render_page(receipt_page(&order, "abc")).await;
        assert!(html.contains("/order/receipt/abc/download"));
        assert!(html.contains("<td class=\"price\">6.00</td>"));
        assert!(html.contains("<td>No selection</td>"));
    }
}
