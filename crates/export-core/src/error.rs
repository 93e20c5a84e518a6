use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    #[error("PDF assembly failed: {0}")]
    PdfAssembly(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
