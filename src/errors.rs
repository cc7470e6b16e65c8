use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Record {id} ({title:?}, depth {depth}) dedents past the outline root")]
    UnderIndented {
        id: String,
        title: String,
        depth: usize,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type OutlineResult<T> = Result<T, OutlineError>;
