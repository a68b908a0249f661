// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::TelegramClient,
  config::TelegramConfig,
  types::{ChatId, Message, ParseMode},
};
use error::Error;
use std::time::Duration;
use url::Url;

#[derive(Default)]
pub struct MessageBuilder<'a> {
  pub(crate) chat_id: Option<ChatId>,
  pub(crate) text: Option<&'a str>,
  pub(crate) parse_mode: Option<ParseMode>,
  pub(crate) disable_preview: Option<bool>,
  pub(crate) silent: Option<bool>,
}

impl<'a> MessageBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chat_id(mut self, id: impl Into<ChatId>) -> Self {
    self.chat_id = Some(id.into());
    self
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  /// Defaults to [`ParseMode::Markdown`].
  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn disable_preview(mut self) -> Self {
    self.disable_preview = Some(true);
    self
  }

  pub fn silent(mut self) -> Self {
    self.silent = Some(true);
    self
  }

  /// Returns `Ok(true)` only for an HTTP 200 answer.
  pub async fn send(self, client: &TelegramClient, credential: &str) -> Result<bool, Error> {
    let chat_id = self
      .chat_id
      .ok_or_else(|| Error::InvalidArgument("Chat ID is required".into()))?;

    let text = self
      .text
      .ok_or_else(|| Error::InvalidArgument("Message text is required".into()))?;

    let message = Message {
      chat_id: &chat_id,
      text,
      parse_mode: self.parse_mode.unwrap_or_default(),
      disable_web_page_preview: self.disable_preview,
      disable_notification: self.silent,
    };

    client.dispatch_message(credential, &message).await
  }
}

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: TelegramConfig,
}

impl TelegramClientBuilder {
  pub fn config(mut self, config: TelegramConfig) -> Self {
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

  pub fn build(self) -> Result<TelegramClient, Error> {
    Url::parse(&self.config.base_url)?;

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(|e| Error::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}
