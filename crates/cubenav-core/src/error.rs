use thiserror::Error;

use crate::face::Direction;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid smoothing factor {0}: must be in (0, 1]")]
    InvalidSmoothing(f32),

    #[error(
        "Invalid click regions: edge_margin={edge_margin}, center=[{center_min}, {center_max}]"
    )]
    InvalidClickRegions {
        edge_margin: f32,
        center_min: f32,
        center_max: f32,
    },

    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    #[error("Two menu sections share the {0} edge")]
    DuplicateEdge(Direction),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.message().to_string())
    }
}
