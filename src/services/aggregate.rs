use std::collections::HashMap;

use crate::domain::models::{Endorser, Violator};
use crate::ns::NsClient;

/// Weighted tally of who endorses the violator set. Each (violator,
/// endorsement list) pair adds `100 / lists.len()` to every endorser on the
/// list, so the final percentage is the share of violators that nation
/// endorses, regardless of the order the lists arrive in. Endorsers are
/// kept in first-seen order so the descending sort breaks ties
/// deterministically.
pub fn tally_endorsers(lists: &[(String, Vec<String>)]) -> Vec<Endorser> {
    if lists.is_empty() {
        return Vec::new();
    }
    let step = 100.0 / lists.len() as f64;
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<Endorser> = Vec::new();

    for (violator, endorsers) in lists {
        for name in endorsers {
            let idx = *index.entry(name.clone()).or_insert_with(|| {
                tally.push(Endorser {
                    name: name.clone(),
                    percentage: 0.0,
                    endorsing: Vec::new(),
                });
                tally.len() - 1
            });
            tally[idx].endorsing.push(violator.clone());
            tally[idx].percentage += step;
        }
    }

    tally.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    tally
}

/// Fetch every violator's endorsement list (one request plus the fixed
/// delay each) and fold them into the weighted ranking.
pub fn collect_endorsers(
    client: &NsClient,
    violators: &[Violator],
) -> anyhow::Result<Vec<Endorser>> {
    let mut lists = Vec::with_capacity(violators.len());
    for v in violators {
        eprintln!("Checking endorsements for {}...", v.name);
        lists.push((v.name.clone(), client.endorsements(&v.name)?));
    }
    Ok(tally_endorsers(&lists))
}
