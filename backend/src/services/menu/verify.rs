use crate::error::MenuError;
use common::model::menu::{parse_price, Menu, MenuItem, MENU_HEADER};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Row errors reported before the rest of the file is given up on.
pub const MAX_REPORTED_ERRORS: usize = 10;

pub const HEADER_ERROR: &str =
    "First row of file must be a Header row containing \"Course,Dish,Price\"";
pub const TOO_MANY_ERRORS: &str = "Too many errors found, any further errors omitted";

/// Result of checking an uploaded menu file.
#[derive(Debug, PartialEq)]
pub enum UploadOutcome {
    /// Every row was well formed; dishes are in file order.
    Valid(Menu),
    /// Messages to show the uploader, in the order the problems were found.
    Invalid(Vec<String>),
}

pub fn is_float(text: &str) -> bool {
    parse_price(text).is_some()
}

/// Checks an uploaded menu CSV.
///
/// The header must be exactly `Course,Dish,Price`. Rows are numbered the way a
/// spreadsheet shows them, so the first data row is row 2 and a blank line is
/// a row without fields. Dishes are collected only while the file is error
/// free; once a row fails, later rows are still checked so their problems can
/// be reported, up to `MAX_REPORTED_ERRORS`.
///
/// Returns `Err` only when the file itself cannot be read.
pub fn verify_upload<R: Read>(mut reader: R) -> Result<UploadOutcome, MenuError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    let mut rows = spreadsheet_rows(&input)?.into_iter();

    let header_ok = match rows.next() {
        Some((_, header)) => header.iter().eq(MENU_HEADER),
        None => false,
    };
    if !header_ok {
        return Ok(UploadOutcome::Invalid(vec![HEADER_ERROR.to_string()]));
    }

    let mut menu = Menu::default();
    let mut errors: Vec<String> = Vec::new();

    for (row_num, record) in rows {
        if errors.len() >= MAX_REPORTED_ERRORS {
            errors.push(TOO_MANY_ERRORS.to_string());
            break;
        }
        if record.len() != 3 {
            errors.push(format!("Row {row_num} does not have precisely 3 fields"));
            continue;
        }

        let (course, dish, price) = (&record[0], &record[1], &record[2]);
        if !is_float(price) {
            errors.push(format!("Row {row_num} has an invalid price: \"{price}\""));
        }
        if errors.is_empty() {
            menu.push(course, MenuItem::new(dish, price));
        }
    }

    if errors.is_empty() {
        Ok(UploadOutcome::Valid(menu))
    } else {
        Ok(UploadOutcome::Invalid(errors))
    }
}

/// Every row of `input` with its 1-based row number.
///
/// The csv reader silently skips blank lines. They are put back here as empty
/// records so that later rows keep their spreadsheet numbers and the blank
/// rows themselves fail the field count check. A quoted field spanning several
/// lines stays a single row.
fn spreadsheet_rows(input: &[u8]) -> Result<Vec<(usize, StringRecord)>, MenuError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut rows: Vec<(usize, StringRecord)> = Vec::new();
    let mut record = StringRecord::new();
    let mut consumed = 0;
    // Line breaks seen since the end of the last record's text.
    let mut breaks = 0;

    while reader.read_record(&mut record)? {
        let end = usize::try_from(reader.position().byte())
            .map_or(input.len(), |byte| byte.clamp(consumed, input.len()));
        let chunk = &input[consumed..end];
        let lead = chunk.iter().take_while(|b| is_line_break(**b)).count();
        let trail = chunk[lead..]
            .iter()
            .rev()
            .take_while(|b| is_line_break(**b))
            .count();

        breaks += count_newlines(&chunk[..lead]);
        push_blank_rows(&mut rows, breaks);
        rows.push((rows.len() + 1, record.clone()));

        breaks = count_newlines(&chunk[chunk.len() - trail..]);
        consumed = end;
    }

    breaks += count_newlines(&input[consumed..]);
    if !rows.is_empty() {
        push_blank_rows(&mut rows, breaks);
    }
    Ok(rows)
}

/// After the first row, one line break only ends the previous row; every
/// further break is a blank row.
fn push_blank_rows(rows: &mut Vec<(usize, StringRecord)>, breaks: usize) {
    let blanks = if rows.is_empty() {
        breaks
    } else {
        breaks.saturating_sub(1)
    };
    for _ in 0..blanks {
        rows.push((rows.len() + 1, StringRecord::new()));
    }
}

fn is_line_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|b| **b == b'\n').count()
}
