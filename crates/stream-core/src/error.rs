// File: crates/stream-core/src/error.rs
// Summary: Errors for the output side (raster surfaces, encoding, file writes).
// The data pipeline itself never fails; bad cells become NaN or unplotted points.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("nothing rendered yet: load a non-empty dataset first")]
    NothingRendered,
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode {0} failed")]
    Encode(&'static str),
    #[error("pixel readback failed")]
    Readback,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
