use std::cmp::Reverse;

use crate::matching::normalize::parse_leading_years;
use crate::models::PeerProfile;

/// Caller-side cohort selection: up to `limit` peers by tenure, longest first.
///
/// Peers without a parseable tenure sort last; ties keep input order.
/// `compare_with_peers` never calls this; choosing the cohort is the caller's job.
pub fn select_top_peers(peers: &[PeerProfile], limit: usize) -> Vec<PeerProfile> {
    let mut ranked: Vec<&PeerProfile> = peers.iter().collect();
    ranked.sort_by_key(|p| Reverse(p.tenure.as_deref().and_then(parse_leading_years)));
    ranked.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_peer(id: &str, tenure: Option<&str>) -> PeerProfile {
        PeerProfile {
            id: id.to_string(),
            tenure: tenure.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(peers: &[PeerProfile]) -> Vec<&str> {
        peers.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_longest_tenure_first_unknown_last() {
        let peers = vec![
            make_peer("a", Some("2 years")),
            make_peer("b", None),
            make_peer("c", Some("5 years")),
            make_peer("d", Some("unknown")),
            make_peer("e", Some("2 yrs")),
        ];
        let selected = select_top_peers(&peers, 10);
        assert_eq!(ids(&selected), vec!["c", "a", "e", "b", "d"]);
    }

    #[test]
    fn test_out_of_range_tenure_sorts_with_unknown() {
        let peers = vec![
            make_peer("huge", Some("99999999999 years")),
            make_peer("max", Some("4294967295 years")),
            make_peer("one", Some("1 year")),
        ];
        let selected = select_top_peers(&peers, 10);
        assert_eq!(ids(&selected), vec!["max", "one", "huge"]);
    }

    #[test]
    fn test_limit_truncates() {
        let peers: Vec<PeerProfile> = (0..12)
            .map(|i| make_peer(&format!("p{i}"), Some(&format!("{i} years"))))
            .collect();
        let selected = select_top_peers(&peers, 10);
        assert_eq!(selected.len(), 10);
        assert_eq!(selected[0].id, "p11");
    }
}
