use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server answered HTTP {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for BoardError {
    fn from(e: gloo_net::Error) -> Self {
        BoardError::Network(e.to_string())
    }
}
