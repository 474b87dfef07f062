//! Point-in-time aggregations over a ledger snapshot.
//!
//! Every function here is pure: same snapshot, same `now`, same result.
//! Time-based functions take `now` explicitly so callers (and tests) control
//! the clock. All functions are total over well-formed input; dangling
//! reference ids degrade to "unknown/excluded" instead of failing.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;
use crate::models::reference::ReferenceItem;
use crate::models::requisition::{Requisition, RequisitionStatus};
use crate::models::stage::PipelineStage;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Service-level target for how long a requisition may stay open.
pub const SLA_DAYS: i64 = 30;
pub const SLA_WARNING_DAYS: i64 = 25;

/// Whole days between two instants, rounded up. Symmetric and non-negative.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let ms = (b - a).num_milliseconds().abs();
    (ms + DAY_MS - 1) / DAY_MS
}

/// Whole days elapsed since `timestamp`, rounded down (toward negative
/// infinity for future instants). Absent timestamps count as 0 days.
pub fn days_since(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match timestamp {
        Some(t) => (now - t).num_milliseconds().div_euclid(DAY_MS),
        None => 0,
    }
}

/// Mean days from creation to closure over requisitions that are Closed with
/// a closure timestamp, rounded to the nearest day. `None` means "no data":
/// nothing has closed yet. A requisition closed without any hire still
/// counts; this measures time to close.
pub fn average_time_to_hire(requisitions: &[Requisition]) -> Option<i64> {
    let closed: Vec<(DateTime<Utc>, DateTime<Utc>)> = requisitions
        .iter()
        .filter(|r| r.status == RequisitionStatus::Closed)
        .filter_map(|r| r.closed_at.map(|closed_at| (r.created_at, closed_at)))
        .collect();

    if closed.is_empty() {
        return None;
    }

    let total: i64 = closed
        .iter()
        .map(|(created, closed)| days_between(*created, *closed))
        .sum();
    Some((total as f64 / closed.len() as f64).round() as i64)
}

/// Requisitions matching `status` whose relevant timestamp falls within the
/// trailing window: `created_at` for Open, `closed_at` for Closed. `OnHold`
/// has no timestamp semantics and always counts zero.
pub fn requisitions_count_by_period(
    requisitions: &[Requisition],
    window_days: i64,
    status: RequisitionStatus,
    now: DateTime<Utc>,
) -> usize {
    let cutoff = now - Duration::days(window_days);
    requisitions
        .iter()
        .filter(|r| match status {
            RequisitionStatus::Open => {
                r.status == RequisitionStatus::Open && r.created_at >= cutoff
            }
            RequisitionStatus::Closed => {
                r.status == RequisitionStatus::Closed
                    && r.closed_at.map_or(false, |closed| closed >= cutoff)
            }
            RequisitionStatus::OnHold => false,
        })
        .count()
}

/// Candidate count per source name. Candidates whose source id matches no
/// known source are excluded, not bucketed as "unknown".
pub fn candidate_source_distribution(
    candidates: &[Candidate],
    sources: &[ReferenceItem],
) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for candidate in candidates {
        if let Some(source) = sources.iter().find(|s| s.id == candidate.source_id) {
            *distribution.entry(source.name.clone()).or_insert(0) += 1;
        }
    }
    distribution
}

/// Applications on currently-Open requisitions, bucketed by current stage
/// (the last history entry). Every stage bucket is present, zero or not;
/// dropping the terminal buckets is a separate step, see
/// [`without_terminal_stages`].
pub fn active_candidate_funnel(
    requisitions: &[Requisition],
    candidates: &[Candidate],
) -> BTreeMap<PipelineStage, usize> {
    let open_ids: HashSet<i64> = requisitions
        .iter()
        .filter(|r| r.is_open())
        .map(|r| r.id)
        .collect();

    let mut funnel: BTreeMap<PipelineStage, usize> =
        PipelineStage::ALL.iter().map(|s| (*s, 0)).collect();

    for candidate in candidates {
        for application in &candidate.applications {
            if open_ids.contains(&application.requisition_id) {
                *funnel.entry(application.current_stage()).or_insert(0) += 1;
            }
        }
    }
    funnel
}

/// Presentation filter: the funnel without its Hired/Rejected buckets.
pub fn without_terminal_stages(
    funnel: &BTreeMap<PipelineStage, usize>,
) -> BTreeMap<PipelineStage, usize> {
    funnel
        .iter()
        .filter(|(stage, _)| !stage.is_terminal())
        .map(|(stage, count)| (*stage, *count))
        .collect()
}

/// Open-requisition count per recruiter name. Sparse: recruiters with zero
/// open requisitions are absent so charts only render active bars.
pub fn open_requisitions_by_recruiter(
    requisitions: &[Requisition],
    recruiters: &[ReferenceItem],
) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for requisition in requisitions.iter().filter(|r| r.is_open()) {
        if let Some(recruiter) = recruiters.iter().find(|rec| rec.id == requisition.recruiter_id) {
            *distribution.entry(recruiter.name.clone()).or_insert(0) += 1;
        }
    }
    distribution
}

/// Application count per requisition id. Zero-filled: every requisition is a
/// key, unlike the sparse recruiter distribution.
pub fn candidates_per_requisition(
    requisitions: &[Requisition],
    candidates: &[Candidate],
) -> BTreeMap<i64, usize> {
    let mut counts: BTreeMap<i64, usize> =
        requisitions.iter().map(|r| (r.id, 0)).collect();
    for candidate in candidates {
        for application in &candidate.applications {
            if let Some(count) = counts.get_mut(&application.requisition_id) {
                *count += 1;
            }
        }
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    OnTrack,
    Warning,
    Late,
}

/// Late past the 30-day target, Warning from day 25 through day 30.
pub fn sla_status(days_open: i64) -> SlaStatus {
    if days_open > SLA_DAYS {
        SlaStatus::Late
    } else if days_open >= SLA_WARNING_DAYS {
        SlaStatus::Warning
    } else {
        SlaStatus::OnTrack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::Application;
    use crate::models::requisition::{RequisitionPriority, RequisitionReason};

    fn now() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().unwrap()
    }

    fn requisition(
        id: i64,
        status: RequisitionStatus,
        created_days_ago: i64,
        closed_days_ago: Option<i64>,
        recruiter_id: i64,
    ) -> Requisition {
        Requisition {
            id,
            title: format!("Requisition {}", id),
            department_id: 1,
            region_id: 1,
            recruiter_id,
            priority: RequisitionPriority::Medium,
            reason: RequisitionReason::NewHeadcount,
            status,
            description: String::new(),
            created_at: now() - Duration::days(created_days_ago),
            closed_at: closed_days_ago.map(|d| now() - Duration::days(d)),
        }
    }

    fn candidate(id: i64, source_id: i64, applications: Vec<Application>) -> Candidate {
        Candidate {
            id,
            name: format!("Candidate {}", id),
            email: format!("candidate{}@example.com", id),
            phone: String::new(),
            role: String::new(),
            location: String::new(),
            avatar_url: String::new(),
            source_id,
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            resume: String::new(),
            applications,
        }
    }

    fn application(requisition_id: i64, stages: &[PipelineStage]) -> Application {
        Application {
            requisition_id,
            history: stages
                .iter()
                .enumerate()
                .map(|(i, stage)| crate::models::candidate::StageEntry {
                    stage: *stage,
                    date: now() - Duration::days(10 - i as i64),
                })
                .collect(),
        }
    }

    #[test]
    fn days_between_rounds_up_and_is_symmetric() {
        let a = now();
        let b = a + Duration::hours(36);
        assert_eq!(days_between(a, b), 2);
        assert_eq!(days_between(b, a), 2);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn days_since_rounds_down_and_defaults_to_zero() {
        assert_eq!(days_since(Some(now() - Duration::hours(132)), now()), 5);
        assert_eq!(days_since(None, now()), 0);
        // Future instants floor toward negative infinity.
        assert_eq!(days_since(Some(now() + Duration::hours(12)), now()), -1);
    }

    #[test]
    fn average_time_to_hire_distinguishes_no_data_from_zero() {
        assert_eq!(average_time_to_hire(&[]), None);

        let only_open = [requisition(1, RequisitionStatus::Open, 40, None, 1)];
        assert_eq!(average_time_to_hire(&only_open), None);

        // Closed without a closure timestamp does not count either.
        let no_timestamp = [requisition(1, RequisitionStatus::Closed, 40, None, 1)];
        assert_eq!(average_time_to_hire(&no_timestamp), None);
    }

    #[test]
    fn average_time_to_hire_rounds_the_mean() {
        let requisitions = [
            requisition(1, RequisitionStatus::Closed, 40, Some(30), 1), // 10 days
            requisition(2, RequisitionStatus::Closed, 40, Some(25), 1), // 15 days
        ];
        assert_eq!(average_time_to_hire(&requisitions), Some(13));
    }

    #[test]
    fn count_by_period_uses_the_matching_timestamp() {
        let requisitions = [
            requisition(1, RequisitionStatus::Open, 5, None, 1),
            requisition(2, RequisitionStatus::Open, 45, None, 1),
            requisition(3, RequisitionStatus::Closed, 60, Some(3), 1),
            requisition(4, RequisitionStatus::Closed, 60, Some(40), 1),
        ];
        assert_eq!(
            requisitions_count_by_period(&requisitions, 7, RequisitionStatus::Open, now()),
            1
        );
        assert_eq!(
            requisitions_count_by_period(&requisitions, 30, RequisitionStatus::Open, now()),
            1
        );
        assert_eq!(
            requisitions_count_by_period(&requisitions, 7, RequisitionStatus::Closed, now()),
            1
        );
        assert_eq!(
            requisitions_count_by_period(&requisitions, 30, RequisitionStatus::Closed, now()),
            1
        );
    }

    #[test]
    fn count_by_period_includes_the_window_boundary() {
        let requisitions = [requisition(1, RequisitionStatus::Open, 7, None, 1)];
        assert_eq!(
            requisitions_count_by_period(&requisitions, 7, RequisitionStatus::Open, now()),
            1
        );
    }

    #[test]
    fn source_distribution_excludes_unknown_sources() {
        let sources = [
            ReferenceItem {
                id: 1,
                name: "Referral".to_string(),
            },
            ReferenceItem {
                id: 2,
                name: "LinkedIn".to_string(),
            },
        ];
        let candidates = [
            candidate(1, 1, Vec::new()),
            candidate(2, 1, Vec::new()),
            candidate(3, 99, Vec::new()), // dangling source id
        ];
        let distribution = candidate_source_distribution(&candidates, &sources);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution.get("Referral"), Some(&2));
    }

    #[test]
    fn funnel_scopes_to_open_requisitions_and_zero_fills_stages() {
        let requisitions = [
            requisition(1, RequisitionStatus::Open, 10, None, 1),
            requisition(2, RequisitionStatus::Closed, 60, Some(20), 1),
        ];
        let candidates = [
            candidate(
                1,
                1,
                vec![application(1, &[PipelineStage::Applied, PipelineStage::Interview])],
            ),
            // On a closed requisition: invisible to the funnel.
            candidate(2, 1, vec![application(2, &[PipelineStage::Hired])]),
        ];

        let funnel = active_candidate_funnel(&requisitions, &candidates);
        assert_eq!(funnel.len(), 6);
        assert_eq!(funnel.get(&PipelineStage::Interview), Some(&1));
        assert_eq!(funnel.get(&PipelineStage::Applied), Some(&0));
        assert_eq!(funnel.get(&PipelineStage::Hired), Some(&0));

        let active = without_terminal_stages(&funnel);
        assert_eq!(active.len(), 4);
        assert!(!active.contains_key(&PipelineStage::Hired));
        assert!(!active.contains_key(&PipelineStage::Rejected));
    }

    #[test]
    fn recruiter_distribution_is_sparse() {
        let recruiters = [
            ReferenceItem {
                id: 1,
                name: "Ana".to_string(),
            },
            ReferenceItem {
                id: 2,
                name: "Bruno".to_string(),
            },
            ReferenceItem {
                id: 3,
                name: "Carla".to_string(),
            },
        ];
        let requisitions = [requisition(1, RequisitionStatus::Open, 10, None, 1)];

        let distribution = open_requisitions_by_recruiter(&requisitions, &recruiters);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution.get("Ana"), Some(&1));
    }

    #[test]
    fn candidates_per_requisition_is_zero_filled() {
        let requisitions = [
            requisition(1, RequisitionStatus::Open, 10, None, 1),
            requisition(2, RequisitionStatus::Open, 10, None, 1),
            requisition(3, RequisitionStatus::Open, 10, None, 1),
        ];
        let candidates = [
            candidate(1, 1, vec![application(1, &[PipelineStage::Applied])]),
            candidate(2, 1, vec![application(1, &[PipelineStage::Applied])]),
            candidate(3, 1, vec![application(2, &[PipelineStage::Applied])]),
        ];

        let counts = candidates_per_requisition(&requisitions, &candidates);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&3), Some(&0));
    }

    #[test]
    fn sla_classification_boundaries() {
        assert_eq!(sla_status(24), SlaStatus::OnTrack);
        assert_eq!(sla_status(25), SlaStatus::Warning);
        assert_eq!(sla_status(30), SlaStatus::Warning);
        assert_eq!(sla_status(31), SlaStatus::Late);
    }
}
