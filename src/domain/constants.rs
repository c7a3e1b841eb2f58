//! Stable defaults shared by the CLI surface and the config layer.

/// NationStates API endpoint. Every query goes through this single CGI path.
pub const DEFAULT_API_BASE: &str = "https://www.nationstates.net/cgi-bin/api.cgi";

/// Google Sheets REST endpoint for the citizen roster.
pub const DEFAULT_SHEETS_BASE: &str = "https://sheets.googleapis.com";

/// Citizen roster spreadsheet and cell range.
pub const DEFAULT_SPREADSHEET_ID: &str = "1Zi2HtQuykoWV2P36B61J_eBnhSgj3VyDWFUbtbYWyTo";
pub const DEFAULT_SHEET_RANGE: &str = "Citizens!C2:C";

pub const DEFAULT_DELEGATE: &str = "le_libertia";
pub const DEFAULT_REGION: &str = "europeia";

pub const DEFAULT_BASE_CAP: u32 = 10;
pub const DEFAULT_STANDARD_CAP: u32 = 25;
pub const DEFAULT_CITIZEN_CAP: u32 = 50;

/// Census scale 66 is the WA endorsements ranking.
pub const ENDORSEMENT_SCALE: u32 = 66;

/// Census ranks are served in fixed pages of 20, offsets 1, 21, 41, ...
pub const CENSUS_PAGE_SIZE: u32 = 20;

/// Reports keep only the worst offenders.
pub const TOP_VIOLATORS: usize = 20;

/// Pause after each NationStates request, per API rate limit rules.
pub const DEFAULT_DELAY_MS: u64 = 1000;
