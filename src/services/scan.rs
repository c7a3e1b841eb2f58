use std::collections::HashSet;

use crate::domain::constants::{CENSUS_PAGE_SIZE, TOP_VIOLATORS};
use crate::domain::models::{Caps, CensusEntry, Violator};
use crate::ns::NsClient;

/// Knobs for one region scan. `skip_delegate` is the only behavioral
/// difference between the violators and endorsers modes: the violators
/// report leaves the delegate itself out, the endorsers report does not.
pub struct ScanOptions<'a> {
    pub region: &'a str,
    pub caps: Caps,
    pub delegate: &'a str,
    pub skip_delegate: bool,
    pub exclude: &'a HashSet<String>,
}

/// Tier classification for a single census entry. Membership checks build
/// on each other, so branch order is load-bearing: a nation that does not
/// endorse the delegate is held to the base cap even if it is a citizen.
pub fn classify(
    name: &str,
    score: u32,
    caps: &Caps,
    delegate_endorsers: &HashSet<String>,
    citizens: &HashSet<String>,
) -> Option<Violator> {
    let cap = if !delegate_endorsers.contains(name) {
        caps.base
    } else if !citizens.contains(name) {
        caps.standard
    } else {
        caps.citizen
    };
    if score > cap {
        Some(Violator {
            name: name.to_string(),
            over_by: score - cap,
        })
    } else {
        None
    }
}

pub struct PageOutcome {
    pub violators: Vec<Violator>,
    pub reached_zero: bool,
}

/// Classify one census page. A score of exactly 0 is the end-of-list
/// sentinel: everything from that entry on is discarded, including the rest
/// of the page.
pub fn sift_page(
    entries: &[CensusEntry],
    opts: &ScanOptions<'_>,
    delegate_endorsers: &HashSet<String>,
    citizens: &HashSet<String>,
) -> PageOutcome {
    let mut violators = Vec::new();
    for entry in entries {
        if entry.score == 0 {
            return PageOutcome {
                violators,
                reached_zero: true,
            };
        }
        if opts.exclude.contains(&entry.name)
            || (opts.skip_delegate && entry.name == opts.delegate)
        {
            continue;
        }
        if let Some(v) = classify(&entry.name, entry.score, &opts.caps, delegate_endorsers, citizens)
        {
            violators.push(v);
        }
    }
    PageOutcome {
        violators,
        reached_zero: false,
    }
}

/// Walk the census ranking page by page until the zero-score sentinel.
/// There is no other upper bound; a malformed or empty page propagates as a
/// fetch failure and aborts the run.
pub fn scan_region(
    client: &NsClient,
    opts: &ScanOptions<'_>,
    delegate_endorsers: &HashSet<String>,
    citizens: &HashSet<String>,
) -> anyhow::Result<Vec<Violator>> {
    let mut violators = Vec::new();
    let mut start = 1;
    loop {
        eprintln!(
            "Checking nations {} through {}...",
            start,
            start + CENSUS_PAGE_SIZE - 1
        );
        let entries = client.census_page(opts.region, start)?;
        let outcome = sift_page(&entries, opts, delegate_endorsers, citizens);
        violators.extend(outcome.violators);
        if outcome.reached_zero {
            return Ok(violators);
        }
        start += CENSUS_PAGE_SIZE;
    }
}

/// Worst offenders first. The sort is stable, so nations over by the same
/// amount keep their census rank order.
pub fn rank_violators(mut violators: Vec<Violator>) -> Vec<Violator> {
    violators.sort_by(|a, b| b.over_by.cmp(&a.over_by));
    violators.truncate(TOP_VIOLATORS);
    violators
}
