use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error() {
        let err: BenchError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, BenchError::Output(_)));
        assert_eq!(err.to_string(), "failed to write output: pipe closed");
    }
}
