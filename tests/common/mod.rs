use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_SHEET_ID: &str = "test-sheet";
pub const TEST_SHEET_RANGE: &str = "Citizens!C2:C";
pub const TEST_KEY: &str = "test-key";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub out: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let out = tmp.path().join("out");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&out).expect("create out dir");
        Self {
            _tmp: tmp,
            home,
            out,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("capwatch");
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Flags pointing both APIs at the mock server, with the request delay
    /// disabled.
    pub fn base_args(&self, server_uri: &str) -> Vec<String> {
        vec![
            "-u".to_string(),
            "integration-tester".to_string(),
            "-k".to_string(),
            TEST_KEY.to_string(),
            "--api-base".to_string(),
            format!("{}/cgi-bin/api.cgi", server_uri),
            "--sheets-base".to_string(),
            server_uri.to_string(),
            "--spreadsheet-id".to_string(),
            TEST_SHEET_ID.to_string(),
            "--delay-ms".to_string(),
            "0".to_string(),
            "-o".to_string(),
            self.out.to_string_lossy().to_string(),
        ]
    }

    pub fn read_out(&self, file: &str) -> String {
        fs::read_to_string(self.out.join(file)).expect("read output file")
    }
}

pub fn census_page_xml(entries: &[(&str, u32, u32)]) -> String {
    let rows: String = entries
        .iter()
        .map(|(name, rank, score)| {
            format!(
                "<NATION><NAME>{}</NAME><RANK>{}</RANK><SCORE>{}</SCORE></NATION>",
                name, rank, score
            )
        })
        .collect();
    format!(
        r#"<REGION id="europeia"><CENSUSRANKS id="66"><NATIONS>{}</NATIONS></CENSUSRANKS></REGION>"#,
        rows
    )
}

pub fn endorsements_xml(nation: &str, endorsers: &[&str]) -> String {
    format!(
        r#"<NATION id="{}"><ENDORSEMENTS>{}</ENDORSEMENTS></NATION>"#,
        nation,
        endorsers.join(",")
    )
}

pub fn sheet_values_json(names: &[&str]) -> String {
    let rows: Vec<Vec<&str>> = names.iter().map(|n| vec![*n]).collect();
    serde_json::json!({
        "range": TEST_SHEET_RANGE,
        "majorDimension": "ROWS",
        "values": rows
    })
    .to_string()
}

pub async fn mount_census_page(server: &MockServer, region: &str, start: u32, body: String) {
    Mock::given(method("GET"))
        .and(path("/cgi-bin/api.cgi"))
        .and(query_param("region", region))
        .and(query_param(
            "q",
            format!("censusranks;scale=66;start={}", start),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_endorsements(server: &MockServer, nation: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/cgi-bin/api.cgi"))
        .and(query_param("nation", nation))
        .and(query_param("q", "endorsements"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_sheet(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/v4/spreadsheets/{}/values/{}",
            TEST_SHEET_ID, TEST_SHEET_RANGE
        )))
        .and(query_param("key", TEST_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body, "application/json"),
        )
        .mount(server)
        .await;
}

/// The shared happy-path region: a delegate on 80, one base-tier violator,
/// one standard-tier violator, a citizen under its cap, one excluded
/// nation, and a zero-score sentinel on the second page.
pub async fn mount_default_region(server: &MockServer) {
    mount_sheet(server, sheet_values_json(&["Citizen Guy"])).await;
    mount_endorsements(
        server,
        "le_libertia",
        endorsements_xml("le_libertia", &["standard_guy", "citizen_guy"]),
    )
    .await;
    mount_census_page(
        server,
        "europeia",
        1,
        census_page_xml(&[
            ("le_libertia", 1, 80),
            ("base_breaker", 2, 30),
            ("standard_guy", 3, 30),
            ("citizen_guy", 4, 40),
            ("excluded_nation", 5, 99),
            ("quiet_one", 6, 5),
        ]),
    )
    .await;
    mount_census_page(
        server,
        "europeia",
        21,
        census_page_xml(&[("tail_nation", 21, 0), ("never_seen", 22, 44)]),
    )
    .await;
}
