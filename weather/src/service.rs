// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::*,
  models::api::{Reading, ReadingsResponse},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use clock::{LocalClock, TimeSource};
use error::Error;
use std::{sync::Arc, time::Duration};
use tracing::{debug, instrument};
use url::Url;

#[async_trait]
pub trait TemperatureProvider: Send + Sync {
  async fn current_readings(&self) -> Result<Vec<f64>, Error>;
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
  config: WeatherConfig,
  client: reqwest::Client,
  clock: Arc<dyn TimeSource>,
}

impl WeatherClient {
  pub fn builder() -> WeatherClientBuilder {
    WeatherClientBuilder::default()
  }

  /// Temperatures for "now" according to the injected time source, in API order.
  pub async fn current_readings(&self) -> Result<Vec<f64>, Error> {
    self.readings_at(self.clock.now()).await
  }

  pub async fn readings_at(&self, time: NaiveDateTime) -> Result<Vec<f64>, Error> {
    let readings = self.station_readings_at(time).await?;
    Ok(readings.into_iter().map(|reading| reading.value).collect())
  }

  #[instrument(skip(self))]
  pub async fn station_readings_at(&self, time: NaiveDateTime) -> Result<Vec<Reading>, Error> {
    let timestamp = clock::format(&time);
    let url = self.build_api_url(&timestamp)?;

    debug!(%timestamp, "Requesting air temperature readings");
    let response = self.client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;

    let data: ReadingsResponse = serde_json::from_str(body.trim())
      .map_err(|e| Error::ProtocolError(format!("Failed to parse weather response: {}", e)))?;

    let item = data
      .items
      .into_iter()
      .next()
      .ok_or_else(|| Error::ProtocolError("Weather response contains no items".into()))?;

    debug!(count = item.readings.len(), "Readings received");
    Ok(item.readings)
  }

  fn build_api_url(&self, timestamp: &str) -> Result<Url, Error> {
    let endpoint = format!(
      "{}{}",
      self.config.base_url.trim_end_matches('/'),
      AIR_TEMPERATURE_PATH
    );
    Ok(Url::parse_with_params(
      &endpoint,
      &[(DATETIME_PARAM, timestamp)],
    )?)
  }
}

#[async_trait]
impl TemperatureProvider for WeatherClient {
  async fn current_readings(&self) -> Result<Vec<f64>, Error> {
    WeatherClient::current_readings(self).await
  }
}

#[derive(Debug, Default)]
pub struct WeatherClientBuilder {
  config: WeatherConfig,
  clock: Option<Arc<dyn TimeSource>>,
}

impl WeatherClientBuilder {
  pub fn config(mut self, config: WeatherConfig) -> Self {
    self.config = config;
    self
  }

  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.config.base_url = base_url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  /// Defaults to the local system clock.
  pub fn time_source(mut self, clock: impl TimeSource + 'static) -> Self {
    self.clock = Some(Arc::new(clock));
    self
  }

  pub fn build(self) -> Result<WeatherClient, Error> {
    Url::parse(&self.config.base_url)?;

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(|e| Error::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

    Ok(WeatherClient {
      config: self.config,
      client,
      clock: self.clock.unwrap_or_else(|| Arc::new(LocalClock)),
    })
  }
}
