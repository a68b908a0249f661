// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{MessageBuilder, TelegramClientBuilder},
  config::TelegramConfig,
  types::{ChatId, Message, TelegramResponse, User},
};
use error::Error;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

#[derive(Clone, Debug)]
pub struct TelegramClient {
  pub(crate) config: TelegramConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }

  pub fn message<'a>(&self) -> MessageBuilder<'a> {
    MessageBuilder::new()
  }

  /// Calls `getMe` and returns the bot's `(first_name, username)`.
  #[instrument(skip(self, credential))]
  pub async fn identify(&self, credential: &str) -> Result<(String, String), Error> {
    let url = self.method_url(credential, "getMe")?;

    debug!("Requesting bot identity");
    let response = self.client.get(url).send().await.map_err(redact)?;
    let response = response.error_for_status().map_err(redact)?;
    let body = response.text().await.map_err(redact)?;

    let user: User = decode_result(&body)?;
    debug!(username = %user.username, "Bot identity received");

    Ok((user.first_name, user.username))
  }

  /// Sends `text` with Markdown formatting. Any status other than 200 yields `Ok(false)`.
  pub async fn send_message(
    &self,
    credential: &str,
    chat_id: impl Into<ChatId>,
    text: &str,
  ) -> Result<bool, Error> {
    self
      .message()
      .chat_id(chat_id)
      .text(text)
      .send(self, credential)
      .await
  }

  #[instrument(skip(self, credential, message), fields(chat_id = %message.chat_id))]
  pub(crate) async fn dispatch_message(
    &self,
    credential: &str,
    message: &Message<'_>,
  ) -> Result<bool, Error> {
    let url = self.method_url(credential, "sendMessage")?;

    let response = self
      .client
      .get(url)
      .query(message)
      .send()
      .await
      .map_err(redact)?;

    let status = response.status();
    if status == StatusCode::OK {
      debug!("Message sent successfully");
      Ok(true)
    } else {
      warn!(%status, "Telegram did not accept the message");
      Ok(false)
    }
  }

  fn method_url(&self, credential: &str, method: &str) -> Result<Url, Error> {
    let credential = validate_credential(credential)?;
    let url = format!(
      "{}/bot{}/{}",
      self.config.base_url.trim_end_matches('/'),
      credential,
      method
    );
    Ok(Url::parse(&url)?)
  }
}

fn validate_credential(credential: &str) -> Result<&str, Error> {
  if credential.trim().is_empty() {
    return Err(Error::InvalidArgument("Bot credential cannot be empty".into()));
  }

  // Bot tokens are `<digits>:<base64url>`; anything else could reshape the URL path.
  if !credential
    .chars()
    .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '_' | '-'))
  {
    return Err(Error::InvalidArgument(
      "Bot credential contains characters not allowed in a URL path".into(),
    ));
  }

  Ok(credential)
}

// The request URL embeds the bot credential; keep it out of error messages.
fn redact(err: reqwest::Error) -> Error {
  Error::RequestError(err.without_url())
}

fn decode_result<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
  let response: TelegramResponse<T> = serde_json::from_str(body.trim())
    .map_err(|e| Error::ProtocolError(format!("Failed to parse Telegram response: {}", e)))?;

  match response.result {
    Some(result) => Ok(result),
    None => Err(Error::ProtocolError(format!(
      "Telegram response has no `result` (ok={}): {}",
      response.ok,
      response.description.as_deref().unwrap_or("no description")
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base_url: &str) -> TelegramClient {
    TelegramClient::builder().base_url(base_url).build().unwrap()
  }

  #[test]
  fn method_url_follows_bot_template() {
    let url = client("https://api.telegram.org/")
      .method_url("123:abc", "getMe")
      .unwrap();
    assert_eq!(url.as_str(), "https://api.telegram.org/bot123:abc/getMe");
  }

  #[test]
  fn rejects_blank_or_path_breaking_credentials() {
    let client = client("https://api.telegram.org");
    for credential in [
      "",
      "   ",
      "12 3",
      "123/abc",
      "123?x",
      "1#2",
      "12\\3",
      "123\\..\\..\\x",
      "123%2Fabc",
      "123.abc",
    ] {
      let err = client.method_url(credential, "getMe").unwrap_err();
      assert!(err.is_invalid_argument(), "{credential:?} gave {err:?}");
    }
  }

  #[test]
  fn accepts_realistic_bot_tokens() {
    let url = client("https://api.telegram.org")
      .method_url("110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw-_x", "sendMessage")
      .unwrap();
    assert_eq!(
      url.path(),
      "/bot110201543:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw-_x/sendMessage"
    );
  }

  #[test]
  fn decode_result_reports_missing_fields() {
    let err = decode_result::<User>(r#"{"result":{"first_name":"Bot"}}"#).unwrap_err();
    assert!(err.is_protocol());

    let err = decode_result::<User>("<html>502</html>").unwrap_err();
    assert!(err.is_protocol());

    let err = decode_result::<User>(r#"{"ok":false,"description":"Unauthorized"}"#).unwrap_err();
    assert!(err.to_string().contains("Unauthorized"));
  }

  #[test]
  fn build_rejects_unparseable_base_url() {
    let err = TelegramClient::builder().base_url("not a url").build().unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
  }
}
