// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod summary;

use anyhow::{Context, Result};
use clock::{LocalClock, TimeSource};
use std::env;
use telegram::TelegramClient;
use tracing::{info, instrument, warn};
use weather::{TemperatureProvider, WeatherClient};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
  telegram_bot_token: String,
  telegram_chat_id: i64,
}

pub struct ServiceRunner {
  weather: Box<dyn TemperatureProvider>,
  tg: TelegramClient,
  clock: Box<dyn TimeSource>,
  config: ServiceConfig,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let config = ServiceConfig {
    telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").context("Missing TELEGRAM_BOT_TOKEN")?,
    telegram_chat_id: env::var("TELEGRAM_CHAT_ID")
      .context("Missing TELEGRAM_CHAT_ID")?
      .parse()
      .context("TELEGRAM_CHAT_ID must be a numeric chat id")?,
  };

  let runner = ServiceRunner::new(
    config,
    Box::new(WeatherClient::builder().build()?),
    TelegramClient::builder().build()?,
    Box::new(LocalClock),
  );

  if !runner.run().await? {
    warn!("Telegram did not accept the temperature summary");
  }

  Ok(())
}

impl ServiceRunner {
  pub fn new(
    config: ServiceConfig,
    weather: Box<dyn TemperatureProvider>,
    tg: TelegramClient,
    clock: Box<dyn TimeSource>,
  ) -> Self {
    Self {
      weather,
      tg,
      clock,
      config,
    }
  }

  /// Returns whether Telegram accepted the summary.
  #[instrument(skip(self))]
  pub async fn run(&self) -> Result<bool> {
    let token = &self.config.telegram_bot_token;

    let (name, username) = self
      .tg
      .identify(token)
      .await
      .context("Failed to identify the bot")?;
    info!("Running as {} (@{})", name, username);

    let readings = self
      .weather
      .current_readings()
      .await
      .context("Failed to fetch air temperature readings")?;
    info!("Fetched {} readings", readings.len());

    let text = summary::render_summary(&clock::format(&self.clock.now()), &readings);

    Ok(
      self
        .tg
        .send_message(token, self.config.telegram_chat_id, &text)
        .await?,
    )
  }
}
