//! Joins today's readings onto every location and evaluates the risk rule.

use crate::parameter::Parameter;
use crate::record::{DailyRecord, Location, MergedLocation};
use serde::Serialize;

/// pH above this marks a location high-risk.
pub const RISK_PH_LIMIT: f64 = 7.5;
/// BOD above this marks a location high-risk.
pub const RISK_BOD_LIMIT: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn from_flag(flag: bool) -> RiskLevel {
        if flag {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    /// Marker fill color.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::High => "red",
            RiskLevel::Low => "green",
        }
    }
}

pub fn risk_flag(record: &DailyRecord) -> bool {
    record.ph > RISK_PH_LIMIT || record.bod > RISK_BOD_LIMIT
}

/// Parameters of `record` that tripped the risk rule, in rule order.
pub fn risk_reasons(record: &DailyRecord) -> Vec<Parameter> {
    let mut reasons = Vec::new();
    if record.ph > RISK_PH_LIMIT {
        reasons.push(Parameter::Ph);
    }
    if record.bod > RISK_BOD_LIMIT {
        reasons.push(Parameter::Bod);
    }
    reasons
}

/// One merged entry per location, all carrying the same readings.
pub fn merge_locations(locations: &[Location], today: &DailyRecord) -> Vec<MergedLocation> {
    let flag = risk_flag(today);
    locations
        .iter()
        .map(|location| MergedLocation {
            id: location.id,
            name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            date: today.date,
            ph: today.ph,
            dissolved_oxygen: today.dissolved_oxygen,
            bod: today.bod,
            total_coliform: today.total_coliform,
            risk_flag: flag,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn locations() -> Vec<Location> {
        vec![
            Location { id: 1, name: "Rishikesh".into(), latitude: 30.0869, longitude: 78.2676 },
            Location { id: 2, name: "Varanasi".into(), latitude: 25.3176, longitude: 82.9739 },
            Location { id: 3, name: "Patna".into(), latitude: 25.5941, longitude: 85.1376 },
        ]
    }

    fn reading(ph: f64, bod: f64) -> DailyRecord {
        DailyRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            ph,
            dissolved_oxygen: 6.0,
            bod,
            total_coliform: 200,
        }
    }

    #[test]
    fn high_ph_alone_turns_every_marker_red() {
        let merged = merge_locations(&locations(), &reading(7.8, 1.0));
        assert_eq!(merged.len(), 3);
        for m in &merged {
            assert!(m.risk_flag);
            assert_eq!(RiskLevel::from_flag(m.risk_flag).color(), "red");
            assert_eq!(m.ph, 7.8);
            assert_eq!(m.total_coliform, 200);
        }
    }

    #[test]
    fn limits_are_exclusive() {
        assert!(!risk_flag(&reading(7.5, 2.5)));
        assert!(risk_flag(&reading(7.51, 2.5)));
        assert!(risk_flag(&reading(7.5, 2.51)));
        assert!(!risk_flag(&reading(6.0, 1.0)));
    }

    #[test]
    fn flag_matches_rule_for_a_grid_of_readings() {
        for ph_step in 0..=25 {
            for bod_step in 0..=20 {
                let ph = 6.0 + ph_step as f64 * 0.1;
                let bod = 1.0 + bod_step as f64 * 0.1;
                let merged = merge_locations(&locations(), &reading(ph, bod));
                let expected = ph > 7.5 || bod > 2.5;
                assert!(merged.iter().all(|m| m.risk_flag == expected), "ph {ph} bod {bod}");
            }
        }
    }

    #[test]
    fn reasons_list_tripped_parameters() {
        assert_eq!(risk_reasons(&reading(7.8, 2.9)), vec![Parameter::Ph, Parameter::Bod]);
        assert_eq!(risk_reasons(&reading(7.0, 2.9)), vec![Parameter::Bod]);
        assert!(risk_reasons(&reading(7.0, 2.0)).is_empty());
    }

    #[test]
    fn merged_keeps_location_identity() {
        let merged = merge_locations(&locations(), &reading(7.0, 2.0));
        assert_eq!(merged[1].name, "Varanasi");
        assert_eq!(merged[1].latitude, 25.3176);
        assert!(!merged[1].risk_flag);
    }

    #[test]
    fn no_locations_means_no_markers() {
        assert!(merge_locations(&[], &reading(8.0, 3.0)).is_empty());
    }
}
