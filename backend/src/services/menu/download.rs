use crate::error::MenuError;
use crate::services::menu::{download_path, silent_remove, DOWNLOAD_FAILED};
use crate::state::AppState;
use crate::views::upload::upload_page;
use crate::views::{render, Flash};
use actix_web::http::header::ContentDisposition;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::{error, info};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub(crate) async fn process(state: web::Data<AppState>, file_id: web::Path<String>) -> HttpResponse {
    let file_id = file_id.into_inner();
    match take_generated_menu(&state.config.upload_folder, &file_id) {
        Ok(contents) => {
            info!("Sending sorted menu {file_id}");
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header(ContentDisposition::attachment("menu.csv"))
                .body(contents)
        }
        Err(err) => {
            error!("Menu download {file_id} failed: {err}");
            render(
                StatusCode::NOT_FOUND,
                upload_page(&[]).with_flash(Flash::danger(DOWNLOAD_FAILED)),
            )
            .await
        }
    }
}

/// Reads a generated menu file. The file is removed whether or not the read
/// succeeds, so each file can be fetched at most once.
fn take_generated_menu(folder: &Path, file_id: &str) -> Result<Vec<u8>, MenuError> {
    let id = Uuid::parse_str(file_id).map_err(|_| MenuError::UnknownFile)?;
    let path = download_path(folder, &id.to_string());
    let contents = fs::read(&path);
    silent_remove(&path);
    Ok(contents?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_is_removed_after_reading() {
        let dir = tempfile::tempdir().unwrap();
        let id = Uuid::new_v4().to_string();
        let path = download_path(dir.path(), &id);
        fs::write(&path, "Course,Dish,Price\n").unwrap();

        assert_eq!(take_generated_menu(dir.path(), &id).unwrap(), b"Course,Dish,Price\n");
        assert!(!path.exists());
        assert!(matches!(take_generated_menu(dir.path(), &id), Err(MenuError::Io(_))));
    }

    #[test]
    fn ids_that_are_not_uuids_never_touch_the_disk() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            take_generated_menu(dir.path(), "../menu"),
            Err(MenuError::UnknownFile)
        ));
    }
}
