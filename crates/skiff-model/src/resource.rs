//! Typed resources and the slicing helpers used during task building.
//!
//! An offer carries a heterogeneous resource list: named scalar
//! quantities (cpus, mem, disk) and named sets of inclusive integer
//! intervals (port ranges). Task building slices that list two ways:
//! the scalar subset is accepted as-is, and two ports are picked
//! greedily from the ranged resources.

use serde::{Deserialize, Serialize};

/// A typed resource in an offer or a task spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    /// A named scalar quantity, e.g. `cpus = 2.0`.
    Scalar { name: String, value: f64 },
    /// A named set of inclusive integer intervals, e.g. port ranges.
    Range {
        name: String,
        ranges: Vec<(u64, u64)>,
    },
}

impl Resource {
    pub fn cpus(value: f64) -> Self {
        Resource::Scalar {
            name: "cpus".to_string(),
            value,
        }
    }

    pub fn mem(value: f64) -> Self {
        Resource::Scalar {
            name: "mem".to_string(),
            value,
        }
    }

    pub fn disk(value: f64) -> Self {
        Resource::Scalar {
            name: "disk".to_string(),
            value,
        }
    }

    /// A `ports` resource spanning one inclusive interval.
    pub fn port_range(begin: u64, end: u64) -> Self {
        Resource::Range {
            name: "ports".to_string(),
            ranges: vec![(begin, end)],
        }
    }

    /// A `ports` resource holding exactly one port.
    pub fn single_port(port: u64) -> Self {
        Self::port_range(port, port)
    }

    pub fn name(&self) -> &str {
        match self {
            Resource::Scalar { name, .. } => name,
            Resource::Range { name, .. } => name,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Resource::Scalar { .. })
    }
}

/// The scalar subset of an offered resource list, order preserved.
pub fn partition_scalars(resources: &[Resource]) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| r.is_scalar())
        .cloned()
        .collect()
}

/// Greedily pick up to two ports from the ranged resources.
///
/// Scans ranges in offer order; each interval contributes its `begin`,
/// and `begin + 1` as well when the interval spans more than one value
/// and a slot remains. Returning fewer than two ports is a valid
/// result, not a failure — callers must check the count.
pub fn select_ports(resources: &[Resource]) -> Vec<u64> {
    let mut ports = Vec::with_capacity(2);
    for resource in resources {
        let Resource::Range { ranges, .. } = resource else {
            continue;
        };
        for &(begin, end) in ranges {
            if ports.len() == 2 {
                return ports;
            }
            ports.push(begin);
            if ports.len() < 2 && begin != end {
                ports.push(begin + 1);
            }
        }
    }
    ports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_scalars_preserves_order() {
        let resources = vec![
            Resource::port_range(31000, 32000),
            Resource::cpus(2.0),
            Resource::port_range(40000, 40001),
            Resource::mem(1024.0),
            Resource::port_range(50000, 50000),
        ];

        let scalars = partition_scalars(&resources);

        assert_eq!(
            scalars,
            vec![Resource::cpus(2.0), Resource::mem(1024.0)]
        );
    }

    #[test]
    fn select_ports_takes_one_from_single_value_range() {
        // First range is a single value, so only its begin is usable;
        // the second port comes from the next range.
        let resources = vec![
            Resource::port_range(31000, 31000),
            Resource::port_range(32000, 32050),
        ];

        assert_eq!(select_ports(&resources), vec![31000, 32000]);
    }

    #[test]
    fn select_ports_takes_two_from_wide_range() {
        let resources = vec![Resource::port_range(9000, 9001)];
        assert_eq!(select_ports(&resources), vec![9000, 9001]);
    }

    #[test]
    fn select_ports_without_ranges_is_empty() {
        let resources = vec![Resource::cpus(1.0), Resource::mem(512.0)];
        assert!(select_ports(&resources).is_empty());
    }

    #[test]
    fn select_ports_short_count_is_valid() {
        // A single one-value range yields one port, not an error.
        let resources = vec![Resource::port_range(31000, 31000)];
        assert_eq!(select_ports(&resources), vec![31000]);
    }

    #[test]
    fn select_ports_stops_at_two() {
        let resources = vec![
            Resource::port_range(9000, 9100),
            Resource::port_range(10000, 10100),
        ];

        assert_eq!(select_ports(&resources), vec![9000, 9001]);
    }

    #[test]
    fn select_ports_ignores_scalars() {
        let resources = vec![
            Resource::cpus(4.0),
            Resource::port_range(7000, 7000),
            Resource::disk(2048.0),
            Resource::port_range(8000, 8000),
        ];

        assert_eq!(select_ports(&resources), vec![7000, 8000]);
    }

    #[test]
    fn multi_interval_range_resource() {
        let resources = vec![Resource::Range {
            name: "ports".to_string(),
            ranges: vec![(5000, 5000), (6000, 6010)],
        }];

        assert_eq!(select_ports(&resources), vec![5000, 6000]);
    }

    #[test]
    fn resource_json_shape() {
        let json = serde_json::to_value(Resource::cpus(2.0)).unwrap();
        assert_eq!(json["type"], "scalar");
        assert_eq!(json["name"], "cpus");

        let json = serde_json::to_value(Resource::single_port(9200)).unwrap();
        assert_eq!(json["type"], "range");
        assert_eq!(json["ranges"][0][0], 9200);
    }
}
