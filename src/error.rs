use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("remote call failed: {0}")]
    Remote(String),

    #[error("snapshot transport error")]
    Http(#[from] reqwest::Error),

    #[error("spreadsheet export failed")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}
