use std::collections::HashSet;

use crate::ns::NsClient;
use crate::services::aggregate::collect_endorsers;
use crate::services::config::{canonical_nation, RunConfig};
use crate::services::scan::{rank_violators, scan_region, ScanOptions};
use crate::services::{report, storage};
use crate::sheets;

/// Variant A: find the violator set, then invert the relationship and rank
/// who endorses it. The delegate is classified like any other nation here.
pub fn run(cfg: &RunConfig, verbose: bool) -> anyhow::Result<()> {
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
        skip_delegate: false,
        exclude: &cfg.exclude,
    };
    let ranked = rank_violators(scan_region(&ns, &opts, &delegate_endorsers, &citizens)?);

    if ranked.is_empty() {
        storage::audit(
            "endorsers",
            serde_json::json!({ "region": cfg.region, "violators": 0 }),
        );
        if cfg.json {
            report::print_json(&ranked)?;
        } else {
            println!("No endocap violators.");
        }
        return Ok(());
    }

    let endorsers = collect_endorsers(&ns, &ranked)?;

    storage::audit(
        "endorsers",
        serde_json::json!({
            "region": cfg.region,
            "violators": ranked.len(),
            "endorsers": endorsers.len()
        }),
    );

    if cfg.json {
        report::print_json(&endorsers)?;
    } else if verbose {
        eprintln!("Writing output to output.txt");
        report::write_endorsers_verbose(&cfg.out_dir, &endorsers)?;
    } else {
        eprintln!("Writing output to output.csv");
        report::write_endorsers_csv(&cfg.out_dir, &endorsers)?;
    }
    Ok(())
}
