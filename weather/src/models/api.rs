// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ReadingsResponse {
  pub items: Vec<ReadingsItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReadingsItem {
  #[serde(default)]
  pub timestamp: Option<String>,
  pub readings: Vec<Reading>,
}

/// One station's air temperature, in degrees Celsius.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Reading {
  #[serde(default)]
  pub station_id: Option<String>,
  pub value: f64,
}
