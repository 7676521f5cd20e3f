//! Errors raised at host boundaries
//!
//! The simulation itself cannot fail; only acquiring a canvas, reading
//! settings and writing snapshots can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas does not provide a 2d context")]
    NoContext,
    #[error("host error: {0}")]
    Host(String),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
