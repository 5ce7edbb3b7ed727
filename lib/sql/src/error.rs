use thiserror::Error;

#[derive(Error, Debug)]
pub enum SQLError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("statement failed: {0}")]
    Execution(String),

    #[error("connection failed: {0}")]
    Connection(String),
}
