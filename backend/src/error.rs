use thiserror::Error;

/// Failures while receiving, reading or producing a menu file.
///
/// Validation problems inside an uploaded CSV are not errors: they are collected
/// into the `UploadOutcome` returned by `services::menu::verify`.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("The file must end with .csv")]
    NotCsv,

    #[error("No file was uploaded")]
    MissingFile,

    #[error("The upload exceeds the {0} byte limit")]
    TooLarge(usize),

    #[error("Unknown menu file")]
    UnknownFile,

    #[error("Invalid price \"{0}\"")]
    InvalidPrice(String),

    #[error("Menu file is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Upload interrupted: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons an order cannot be placed or its receipt produced.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("{dish} is not available as a {course}, please choose again")]
    DishNotFound { course: String, dish: String },

    #[error("{dish} has an invalid price: \"{price}\"")]
    InvalidPrice { dish: String, price: String },

    #[error("Order not found or expired")]
    UnknownOrder,
}
