use super::Page;
use yew::prelude::*;

pub fn home_page() -> Page {
    let content = html! {
        <>
            <p>{ "Welcome! Have a look at today's menu or place an order." }</p>
            <ul class="actions">
                <li><a href="/menu">{ "See the menu" }</a></li>
                <li><a href="/order">{ "Order a meal" }</a></li>
            </ul>
        </>
    };
    Page::new("Home", content)
}
