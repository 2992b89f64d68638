// src/snow/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowError {
    #[error("Mesh has no vertices, cannot derive the floor height")]
    EmptyMesh,

    #[error("Mesh is missing required vertex attribute: {name}")]
    MissingAttribute { name: String },

    #[error("Unsupported format for vertex attribute {name}: expected {expected}")]
    UnsupportedAttributeFormat { name: String, expected: String },

    #[error("Mismatched vertex channels: {positions} positions vs {tags} tag values")]
    ChannelLengthMismatch { positions: usize, tags: usize },
}

pub type SnowResult<T> = Result<T, SnowError>;
