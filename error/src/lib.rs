// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  /// The caller passed something unusable; nothing was sent.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  /// DNS, connect, timeout, or a non-success HTTP status.
  #[error("Request failed: {0}")]
  RequestError(#[from] reqwest::Error),
  /// A response arrived but did not have the expected shape.
  #[error("Unexpected response: {0}")]
  ProtocolError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
}

impl From<url::ParseError> for Error {
  fn from(err: url::ParseError) -> Self {
    Error::ConfigError(format!("Invalid endpoint URL: {}", err))
  }
}

impl Error {
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }

  pub fn is_request(&self) -> bool {
    matches!(self, Error::RequestError(_))
  }

  pub fn is_protocol(&self) -> bool {
    matches!(self, Error::ProtocolError(_))
  }
}
