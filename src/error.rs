use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexlishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line too long: limit is {0} bytes")]
    LineTooLong(usize),
}

pub type Result<T> = std::result::Result<T, HexlishError>;
