use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostError {
    #[error("base-rate table line {line} has {found} fields, expected 7")]
    ColumnCount { line: usize, found: usize },

    #[error("base-rate table parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("base-rate table contains no data rows")]
    Empty,

    #[error("base-rate table is missing the idle operating mode (1) row")]
    MissingIdleMode,

    #[error("cost model configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CostResult<T> = Result<T, CostError>;
