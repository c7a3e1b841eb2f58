use std::collections::HashSet;

use crate::ns::NsClient;
use crate::services::config::{canonical_nation, RunConfig};
use crate::services::scan::{rank_violators, scan_region, ScanOptions};
use crate::services::{report, storage};
use crate::sheets;

/// Variant B: rank nations over their cap. The delegate itself is skipped
/// during classification.
pub fn run(cfg: &RunConfig) -> anyhow::Result<()> {
    let citizens: HashSet<String> =
        sheets::fetch_citizens(&cfg.sheets_base, &cfg.spreadsheet_id, &cfg.sheet_range, &cfg.key)?
            .iter()
            .map(|n| canonical_nation(n))
            .collect();

    let ns = NsClient::new(&cfg.api_base, &cfg.user, cfg.delay_ms)?;
    let delegate_endorsers: HashSet<String> =
        ns.endorsements(&cfg.delegate)?.into_iter().collect();

    let opts = ScanOptions {
        region: &cfg.region,
        caps: cfg.caps,
        delegate: &cfg.delegate,
        skip_delegate: true,
        exclude: &cfg.exclude,
    };
    let ranked = rank_violators(scan_region(&ns, &opts, &delegate_endorsers, &citizens)?);

    storage::audit(
        "violators",
        serde_json::json!({ "region": cfg.region, "violators": ranked.len() }),
    );

    if ranked.is_empty() {
        if cfg.json {
            report::print_json(&ranked)?;
        } else {
            println!("No endocap violators.");
        }
        return Ok(());
    }

    if cfg.json {
        report::print_json(&ranked)?;
    } else {
        eprintln!("Writing output to output.txt");
        report::write_violators(&cfg.out_dir, &ranked)?;
    }
    Ok(())
}
