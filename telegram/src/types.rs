// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
  /// Legacy Markdown: `*bold*`, `_italics_`, `` `inline code` ``.
  #[default]
  Markdown,
  MarkdownV2,
  #[serde(rename = "HTML")]
  Html,
}

/// Numeric chat id or `@channelusername`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ChatId {
  Id(i64),
  Username(String),
}

impl From<i64> for ChatId {
  fn from(id: i64) -> Self {
    ChatId::Id(id)
  }
}

impl From<&str> for ChatId {
  fn from(username: &str) -> Self {
    ChatId::Username(username.to_string())
  }
}

impl From<String> for ChatId {
  fn from(username: String) -> Self {
    ChatId::Username(username)
  }
}

impl fmt::Display for ChatId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChatId::Id(id) => write!(f, "{}", id),
      ChatId::Username(name) => write!(f, "{}", name),
    }
  }
}

#[derive(Deserialize)]
pub(crate) struct TelegramResponse<T> {
  #[serde(default)]
  pub ok: bool,
  pub result: Option<T>,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct User {
  pub first_name: String,
  pub username: String,
}

/// Query string of a `sendMessage` call.
#[derive(Serialize)]
pub(crate) struct Message<'a> {
  pub chat_id: &'a ChatId,
  pub text: &'a str,
  pub parse_mode: ParseMode,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_web_page_preview: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
}
