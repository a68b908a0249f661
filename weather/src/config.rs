// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::{API_BASE_URL, REQUEST_TIMEOUT};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub base_url: String,
  pub timeout: Duration,
}

impl Default for WeatherConfig {
  fn default() -> Self {
    Self {
      base_url: API_BASE_URL.to_string(),
      timeout: REQUEST_TIMEOUT,
    }
  }
}
