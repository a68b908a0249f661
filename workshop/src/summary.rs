// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Telegram Markdown summary of one batch of station readings.
pub fn render_summary(timestamp: &str, readings: &[f64]) -> String {
  if readings.is_empty() {
    return format!("_No air temperature readings at {}_", timestamp);
  }

  let (min, max, sum) = readings.iter().fold(
    (f64::INFINITY, f64::NEG_INFINITY, 0.0),
    |(min, max, sum), &value| (min.min(value), max.max(value), sum + value),
  );
  let mean = sum / readings.len() as f64;

  format!(
    "*Air temperature* at `{}`\nStations: *{}*\nMin: *{:.1}°C*\nMean: *{:.1}°C*\nMax: *{:.1}°C*",
    timestamp,
    readings.len(),
    min,
    mean,
    max
  )
}
