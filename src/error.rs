use crate::providers::StoreError;
use thiserror::Error;

/// App showcase application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Upstream store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Application error: {message}")]
    Application { message: String },
}

impl Error {
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_their_layer() {
        let store = Error::from(StoreError::Status { status: 502 });
        let config = Error::from(config::ConfigError::Message("bad port".to_string()));
        let application = Error::application("listener closed");

        assert_eq!(
            store.to_string(),
            "Upstream store error: Upstream responded with status 502"
        );
        assert_eq!(config.to_string(), "Configuration error: bad port");
        assert_eq!(application.to_string(), "Application error: listener closed");
    }
}
