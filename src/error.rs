use thiserror::Error;

/// Errors that can occur while exporting the canvas to an image file
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Canvas has no area to export ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("{0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
