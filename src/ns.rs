use serde::Deserialize;
use std::thread;
use std::time::Duration;

use crate::domain::constants::ENDORSEMENT_SCALE;
use crate::domain::models::CensusEntry;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(thiserror::Error, Debug)]
pub enum NsError {
    #[error("NS API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected NS API payload: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// Census ranks payload: REGION > CENSUSRANKS > NATIONS > NATION*.
#[derive(Debug, Deserialize)]
struct CensusPayload {
    #[serde(rename = "CENSUSRANKS")]
    census_ranks: CensusRanks,
}

#[derive(Debug, Deserialize)]
struct CensusRanks {
    #[serde(rename = "NATIONS")]
    nations: CensusNations,
}

#[derive(Debug, Deserialize)]
struct CensusNations {
    #[serde(rename = "NATION")]
    entries: Vec<CensusEntry>,
}

/// Endorsements payload: NATION > ENDORSEMENTS, a comma-joined id list.
#[derive(Debug, Deserialize)]
struct EndorsementsPayload {
    #[serde(rename = "ENDORSEMENTS", default)]
    endorsements: String,
}

pub fn parse_census_page(xml: &str) -> Result<Vec<CensusEntry>, NsError> {
    let payload: CensusPayload = quick_xml::de::from_str(xml)?;
    Ok(payload.census_ranks.nations.entries)
}

pub fn parse_endorsements(xml: &str) -> Result<Vec<String>, NsError> {
    let payload: EndorsementsPayload = quick_xml::de::from_str(xml)?;
    Ok(payload
        .endorsements
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect())
}

/// Blocking NationStates API client. Identifies the operator through the
/// User-Agent and pauses after every request per the API rate limit rules.
pub struct NsClient {
    http: reqwest::blocking::Client,
    api_base: String,
    delay: Duration,
}

impl NsClient {
    pub fn new(api_base: &str, user: &str, delay_ms: u64) -> Result<Self, NsError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("capwatch/{} ({})", env!("CARGO_PKG_VERSION"), user))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            delay: Duration::from_millis(delay_ms),
        })
    }

    fn get(&self, query: &str) -> Result<String, NsError> {
        let url = format!("{}?{}", self.api_base, query);
        let resp = self.http.get(&url).send()?.error_for_status()?;
        let body = resp.text()?;
        thread::sleep(self.delay);
        Ok(body)
    }

    /// One page of the WA endorsements census ranking, 20 entries from
    /// `start` (1-based rank offset).
    pub fn census_page(&self, region: &str, start: u32) -> Result<Vec<CensusEntry>, NsError> {
        let body = self.get(&format!(
            "region={}&q=censusranks;scale={};start={}",
            region, ENDORSEMENT_SCALE, start
        ))?;
        parse_census_page(&body)
    }

    /// Nations currently endorsing `nation`.
    pub fn endorsements(&self, nation: &str) -> Result<Vec<String>, NsError> {
        let body = self.get(&format!("nation={}&q=endorsements", nation))?;
        parse_endorsements(&body)
    }
}
