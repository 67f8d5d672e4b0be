//! Menu display, menu upload and the download of sorted menu files.
//!
//! The provided routes are:
//! - `GET /menu`: Shows the menu loaded at startup, one table per course.
//!
//! - `GET /menu/upload`: Renders the upload form.
//!
//! - `POST /menu/upload`: Handles a multipart/form-data upload with a `file` field
//!   holding a `.csv` menu. The file is saved under a unique name in the upload
//!   folder, checked row by row (`verify`), and removed again whatever the outcome.
//!   A valid menu is sorted by course and price (`sort`), written to a second file
//!   and offered for download; an invalid one is answered with its error list.
//!
//! - `GET /menu/download/{file_id}`: Streams a sorted menu produced by an upload
//!   as `menu.csv` and deletes it. Each generated file can be downloaded once;
//!   files nobody fetches are removed by `sweep_generated_menus`.
//!
//! Uploads never replace the menu being served.

use actix_web::web::{get, post, scope};
use actix_web::Scope;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod download;
mod show;
pub mod sort;
pub mod store;
mod upload;
pub mod verify;

const API_PATH: &str = "/menu";

pub const UPLOAD_FAILED: &str = "File upload failed. Please correct your file and try again";
pub const DOWNLOAD_FAILED: &str = "File download failed.";

/// Configures and returns the Actix scope for menu routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(show::process))
        .route("/upload", get().to(upload::form))
        .route("/upload", post().to(upload::process))
        .route("/download/{file_id}", get().to(download::process))
}

const GENERATED_PREFIX: &str = "menu-";
const GENERATED_SUFFIX: &str = ".csv";

/// Where the sorted menu generated for `file_id` is kept until downloaded.
pub(crate) fn download_path(folder: &Path, file_id: &str) -> PathBuf {
    folder.join(format!("{GENERATED_PREFIX}{file_id}{GENERATED_SUFFIX}"))
}

/// Removes generated menus last written at least `max_age` ago, returning how
/// many were removed. Uploads still being processed are left alone.
pub(crate) fn sweep_generated_menus(folder: &Path, max_age: Duration) -> io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !(name.starts_with(GENERATED_PREFIX) && name.ends_with(GENERATED_SUFFIX)) {
            continue;
        }
        let age = entry.metadata()?.modified()?.elapsed().unwrap_or_default();
        if age >= max_age {
            silent_remove(&entry.path());
            removed += 1;
        }
    }
    Ok(removed)
}

/// Removes a file, ignoring any failure.
pub(crate) fn silent_remove(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        debug!("Could not remove {}: {}", path.display(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_removes_only_stale_generated_menus() {
        let dir = tempfile::tempdir().unwrap();
        let generated = download_path(dir.path(), "6f1c1d2e-8a51-4c4e-9a59-0d6a2f7c1b11");
        let upload = dir.path().join("0b8e-upload-menu.csv");
        fs::write(&generated, "Course,Dish,Price\n").unwrap();
        fs::write(&upload, "Course,Dish,Price\n").unwrap();

        assert_eq!(sweep_generated_menus(dir.path(), Duration::from_secs(3600)).unwrap(), 0);
        assert!(generated.exists());

        assert_eq!(sweep_generated_menus(dir.path(), Duration::ZERO).unwrap(), 1);
        assert!(!generated.exists());
        assert!(upload.exists());
    }

    #[test]
    fn sweep_of_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(sweep_generated_menus(&dir.path().join("gone"), Duration::ZERO).is_err());
    }
}
