use serde::Deserialize;
use std::time::Duration;

/// `spreadsheets.values.get` response. Rows outside the populated range are
/// omitted entirely, hence the default.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

fn first_column(values: Vec<Vec<String>>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .collect()
}

/// Citizen roster from the configured spreadsheet column. One network call,
/// no pagination -- the values API returns the whole range at once.
pub fn fetch_citizens(
    sheets_base: &str,
    spreadsheet_id: &str,
    range: &str,
    key: &str,
) -> anyhow::Result<Vec<String>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?;
    let url = format!(
        "{}/v4/spreadsheets/{}/values/{}?key={}",
        sheets_base.trim_end_matches('/'),
        spreadsheet_id,
        range,
        key
    );
    let payload: ValueRange = client.get(url).send()?.error_for_status()?.json()?;
    Ok(first_column(payload.values))
}
