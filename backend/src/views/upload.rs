use super::menu::menu_tables;
use super::Page;
use common::model::menu::Menu;
use yew::prelude::*;

const TITLE: &str = "Upload Menu File";

fn upload_form() -> Html {
    html! {
        <form method="post" action="/menu/upload" enctype="multipart/form-data">
            <label for="file">{ "Upload a CSV File" }</label>
            <input type="file" id="file" name="file" accept=".csv" required={true} />
            <button type="submit">{ "Upload" }</button>
        </form>
    }
}

/// Upload form, preceded by the validation errors of a rejected file.
pub fn upload_page(errors: &[String]) -> Page {
    let errors = if errors.is_empty() {
        html! {}
    } else {
        html! {
            <ul class="errors">
                { for errors.iter().map(|error| html! { <li>{ error }</li> }) }
            </ul>
        }
    };

    let content = html! {
        <>
            { errors }
            { upload_form() }
        </>
    };
    Page::new(TITLE, content)
}

/// Shown after a successful upload: the sorted menu and a link to fetch it.
pub fn upload_result_page(menu: &Menu, file_id: &str) -> Page {
    let content = html! {
        <>
            <p>
                <a class="button" href={format!("/menu/download/{file_id}")}>
                    { "Download sorted menu.csv" }
                </a>
            </p>
            { menu_tables(menu) }
            { upload_form() }
        </>
    };
    Page::new(TITLE, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_page;

    #[actix_web::test]
    async fn errors_are_listed_above_the_form() {
        let errors = vec![
            "Row 2 has an invalid price: \"<b>\"".to_string(),
            "Row 3 does not have precisely 3 fields".to_string(),
        ];
        let html = render_page(upload_page(&errors)).await;

        assert!(html.contains("Row 2 has an invalid price"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("<li>Row 3 does not have precisely 3 fields</li>"));
        assert!(html.find("class=\"errors\"") < html.find("enctype=\"multipart/form-data\""));
    }

    #[actix_web::test]
    async fn plain_form_has_no_error_list() {
        let html = render_page(upload_page(&[])).await;
        assert!(!html.contains("class=\"errors\""));
        assert!(html.contains("name=\"file\""));
    }
}
