//! Placement policy — the accept/decline predicate and the
//! termination check.

use std::collections::HashSet;

use skiff_model::{Offer, Task};

/// True iff no tracked task already runs on the offer's host.
///
/// This is the only check performed at accept time; resource adequacy
/// is discovered lazily during task building (an offer without two
/// usable ports fails there and is declined).
pub fn is_acceptable(offer: &Offer, tracked: &HashSet<Task>) -> bool {
    tracked.iter().all(|task| task.hostname != offer.hostname)
}

/// True iff the tracked set is exactly at the replica target.
///
/// Exact equality, not `>=`: the state machine declines offers once
/// the target is met, so the tracked set never exceeds it. If it ever
/// did, the gate would never fire.
pub fn has_reached_target(tracked: &HashSet<Task>, target: usize) -> bool {
    tracked.len() == target
}

#[cfg(test)]
mod tests {
    use skiff_model::Resource;

    use super::*;

    fn tracked(hosts: &[&str]) -> HashSet<Task> {
        hosts
            .iter()
            .map(|host| Task::new(*host, format!("searchd_{host}_t")))
            .collect()
    }

    fn offer_from(host: &str) -> Offer {
        Offer::new("offer-1", host, "agent-1", vec![Resource::cpus(1.0)])
    }

    #[test]
    fn fresh_host_is_acceptable() {
        let tasks = tracked(&["worker-1", "worker-2"]);
        assert!(is_acceptable(&offer_from("worker-3"), &tasks));
    }

    #[test]
    fn duplicate_host_is_rejected_regardless_of_offer_content() {
        let tasks = tracked(&["worker-1"]);

        let plain = offer_from("worker-1");
        let rich = Offer::new(
            "offer-2",
            "worker-1",
            "agent-9",
            vec![
                Resource::cpus(64.0),
                Resource::mem(1048576.0),
                Resource::port_range(1, 65535),
            ],
        );

        assert!(!is_acceptable(&plain, &tasks));
        assert!(!is_acceptable(&rich, &tasks));
    }

    #[test]
    fn empty_tracked_set_accepts_anything() {
        assert!(is_acceptable(&offer_from("worker-1"), &HashSet::new()));
    }

    #[test]
    fn target_check_is_exact_equality() {
        assert!(!has_reached_target(&tracked(&["a", "b"]), 3));
        assert!(has_reached_target(&tracked(&["a", "b", "c"]), 3));
        // Over target the gate must not fire.
        assert!(!has_reached_target(&tracked(&["a", "b", "c", "d"]), 3));
    }

    #[test]
    fn zero_target_is_met_immediately() {
        assert!(has_reached_target(&HashSet::new(), 0));
    }
}
