use crate::error::MenuError;
use crate::services::menu::sort::{serialize, sort_menu};
use crate::services::menu::verify::{verify_upload, UploadOutcome};
use crate::services::menu::{download_path, DOWNLOAD_FAILED, UPLOAD_FAILED};
use crate::state::AppState;
use crate::views::upload::{upload_page, upload_result_page};
use crate::views::{render, Flash};
use actix_multipart::{Field, Multipart};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use common::model::menu::Menu;
use futures_util::StreamExt;
use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]+").expect("filename pattern compiles"));

pub(crate) async fn form() -> HttpResponse {
    render(StatusCode::OK, upload_page(&[])).await
}

/// HTTP handler for `POST /menu/upload`.
///
/// - Valid file: `200 OK` with the sorted menu and its download link.
/// - Rejected rows or header: `422 Unprocessable Entity` listing the errors.
/// - Unusable upload (wrong extension, too large, unreadable): `400 Bad Request`.
pub(crate) async fn process(state: web::Data<AppState>, payload: Multipart) -> HttpResponse {
    let config = &state.config;
    let upload = match receive_upload(payload, &config.upload_folder, config.max_upload_bytes).await {
        Ok(upload) => upload,
        Err(err) => {
            warn!("Menu upload refused: {err}");
            let flash = Flash::danger(format!("{UPLOAD_FAILED}: {err}"));
            return render(StatusCode::BAD_REQUEST, upload_page(&[]).with_flash(flash)).await;
        }
    };

    let outcome = upload
        .reopen()
        .map_err(MenuError::from)
        .and_then(verify_upload);
    // Dropping the temp file deletes it; errors while deleting are ignored.
    drop(upload);

    match outcome {
        Ok(UploadOutcome::Valid(menu)) => offer_sorted_menu(&config.upload_folder, menu).await,
        Ok(UploadOutcome::Invalid(errors)) => {
            info!("Rejected menu upload with {} errors", errors.len());
            render(
                StatusCode::UNPROCESSABLE_ENTITY,
                upload_page(&errors).with_flash(Flash::danger(UPLOAD_FAILED)),
            )
            .await
        }
        Err(err) => {
            error!("Could not read uploaded menu: {err}");
            render(
                StatusCode::BAD_REQUEST,
                upload_page(&[]).with_flash(Flash::danger(UPLOAD_FAILED)),
            )
            .await
        }
    }
}

async fn offer_sorted_menu(folder: &Path, menu: Menu) -> HttpResponse {
    match write_sorted_menu(folder, menu) {
        Ok((file_id, sorted)) => {
            info!("Sorted menu ready for download as {file_id}");
            render(
                StatusCode::OK,
                upload_result_page(&sorted, &file_id).with_flash(Flash::success("Menu uploaded")),
            )
            .await
        }
        Err(err) => {
            error!("Could not prepare sorted menu: {err}");
            render(
                StatusCode::INTERNAL_SERVER_ERROR,
                upload_page(&[]).with_flash(Flash::danger(DOWNLOAD_FAILED)),
            )
            .await
        }
    }
}

/// Sorts the menu and stores it for a single download, returning its file id.
fn write_sorted_menu(folder: &Path, menu: Menu) -> Result<(String, Menu), MenuError> {
    let sorted = sort_menu(menu)?;
    let csv = serialize(&sorted)?;
    let file_id = Uuid::new_v4().to_string();
    fs::write(download_path(folder, &file_id), csv)?;
    Ok((file_id, sorted))
}

/// Streams the `file` field of the form into a uniquely named file inside
/// `folder`. Other fields are read and discarded. Every field counts towards
/// `limit`.
async fn receive_upload(
    mut payload: Multipart,
    folder: &Path,
    limit: usize,
) -> Result<NamedTempFile, MenuError> {
    let mut received = 0usize;
    let mut upload = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if field_name.as_deref() != Some("file") || upload.is_some() {
            let skipped = drain_field(&mut field, &mut received, limit).await?;
            debug!("Skipped {skipped} bytes of form field {field_name:?}");
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if filename.is_empty() {
            return Err(MenuError::MissingFile);
        }
        if !has_csv_extension(&filename) {
            return Err(MenuError::NotCsv);
        }

        let mut file = tempfile::Builder::new()
            .prefix(&format!("{}-", Uuid::new_v4()))
            .suffix(&format!("-{}", secure_filename(&filename)))
            .tempfile_in(folder)?;

        let mut size = 0usize;
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            size += chunk.len();
            count_bytes(&mut received, chunk.len(), limit)?;
            file.write_all(&chunk)?;
        }
        file.flush()?;
        info!("Received menu upload {filename} ({size} bytes)");
        upload = Some(file);
    }
    upload.ok_or(MenuError::MissingFile)
}

async fn drain_field(field: &mut Field, received: &mut usize, limit: usize) -> Result<usize, MenuError> {
    let mut size = 0usize;
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        size += chunk.len();
        count_bytes(received, chunk.len(), limit)?;
    }
    Ok(size)
}

fn count_bytes(received: &mut usize, len: usize, limit: usize) -> Result<(), MenuError> {
    *received += len;
    if *received > limit {
        return Err(MenuError::TooLarge(limit));
    }
    Ok(())
}

fn has_csv_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Reduces a client supplied filename to a safe basename.
fn secure_filename(filename: &str) -> String {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    UNSAFE_FILENAME_CHARS
        .replace_all(base, "_")
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}
