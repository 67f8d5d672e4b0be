//! Server-rendered HTML pages.
//!
//! Each page is described by a `Page`: a title, the flash messages produced
//! while handling the request and the page body as yew `Html`. `render` wraps
//! the body in the `Layout` component (navigation bar, flashes, heading) and
//! renders it to a string with yew's `LocalServerRenderer`. Text and attribute
//! values are escaped by yew.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use yew::prelude::*;
use yew::LocalServerRenderer;

pub mod home;
pub mod menu;
pub mod order;
pub mod upload;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/menu", "Menu"),
    ("/order", "Order"),
    ("/menu/upload", "Upload Menu"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "flash-success",
            FlashLevel::Danger => "flash-danger",
        }
    }
}

/// A one-off message shown at the top of the page that triggered it.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

/// A full page, ready to be rendered inside the site layout.
#[derive(Properties, PartialEq)]
pub struct Page {
    pub title: AttrValue,
    pub flashes: Vec<Flash>,
    pub content: Html,
}

impl Page {
    pub fn new(title: &'static str, content: Html) -> Self {
        Self {
            title: AttrValue::from(title),
            flashes: Vec::new(),
            content,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flashes.push(flash);
        self
    }
}

/// Site chrome around every page: head, navigation bar, flashes and heading.
struct Layout;

impl Component for Layout {
    type Message = ();
    type Properties = Page;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = ctx.props();
        html! {
            <html lang="en">
                <head>
                    <meta charset="utf-8" />
                    <title>{ format!("{} - Restaurant", page.title) }</title>
                    <link rel="stylesheet" href="/static/style.css" />
                </head>
                <body>
                    <nav>
                        <ul>
                            { for NAV_LINKS.iter().map(|(href, label)| html! {
                                <li><a href={*href}>{ *label }</a></li>
                            }) }
                        </ul>
                    </nav>
                    <main>
                        { for page.flashes.iter().map(flash_view) }
                        <h1>{ page.title.clone() }</h1>
                        { page.content.clone() }
                    </main>
                </body>
            </html>
        }
    }
}

fn flash_view(flash: &Flash) -> Html {
    html! {
        <div class={classes!("flash", flash.level.css_class())} role="alert">
            { &flash.message }
        </div>
    }
}

/// Renders `page` to a complete HTML document.
pub async fn render_page(page: Page) -> String {
    let body = LocalServerRenderer::<Layout>::with_props(page)
        .hydratable(false)
        .render()
        .await;
    format!("<!DOCTYPE html>\n{body}")
}

pub async fn render(status: StatusCode, page: Page) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render_page(page).await)
}

pub async fn not_found(flash: Flash) -> HttpResponse {
    let content = html! {
        <p><a href="/">{ "Back to the home page" }</a></p>
    };
    render(
        StatusCode::NOT_FOUND,
        Page::new("Not Found", content).with_flash(flash),
    )
    .await
}
