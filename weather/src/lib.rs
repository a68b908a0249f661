// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use models::api::Reading;
pub use service::{TemperatureProvider, WeatherClient, WeatherClientBuilder};

pub mod constants {
  use std::time::Duration;
  pub(crate) const API_BASE_URL: &str = "https://api.data.gov.sg";
  pub(crate) const AIR_TEMPERATURE_PATH: &str = "/v1/environment/air-temperature";
  pub(crate) const DATETIME_PARAM: &str = "datetime";
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}
