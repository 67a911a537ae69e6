use crate::parameter::Parameter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of synthetic water-quality readings.
///
/// Continuous values carry two decimal places; coliform is a whole count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Day offset from today, plus one.
    pub id: i32,
    pub date: NaiveDate,
    pub ph: f64,
    /// Dissolved oxygen in mg/L
    pub dissolved_oxygen: f64,
    /// Biochemical oxygen demand in mg/L
    pub bod: f64,
    /// Total coliform in MPN/100 mL
    pub total_coliform: u32,
}

impl DailyRecord {
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Bod => self.bod,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::TotalColiform => f64::from(self.total_coliform),
        }
    }

    /// The value as the dashboard prints it.
    pub fn formatted_value(&self, parameter: Parameter) -> String {
        match parameter {
            Parameter::TotalColiform => self.total_coliform.to_string(),
            p => format!("{:.2}", self.value(p)),
        }
    }
}

/// A monitoring point along the river.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A location carrying today's readings and the derived risk flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedLocation {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: NaiveDate,
    pub ph: f64,
    pub dissolved_oxygen: f64,
    pub bod: f64,
    pub total_coliform: u32,
    pub risk_flag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DailyRecord {
        DailyRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            ph: 7.1,
            dissolved_oxygen: 6.25,
            bod: 2.0,
            total_coliform: 1234,
        }
    }

    #[test]
    fn value_selects_parameter() {
        let r = record();
        assert_eq!(r.value(Parameter::Ph), 7.1);
        assert_eq!(r.value(Parameter::DissolvedOxygen), 6.25);
        assert_eq!(r.value(Parameter::Bod), 2.0);
        assert_eq!(r.value(Parameter::TotalColiform), 1234.0);
    }

    #[test]
    fn formatted_value_pads_decimals() {
        let r = record();
        assert_eq!(r.formatted_value(Parameter::Ph), "7.10");
        assert_eq!(r.formatted_value(Parameter::Bod), "2.00");
        assert_eq!(r.formatted_value(Parameter::TotalColiform), "1234");
    }

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["date"], "2026-10-16");
        assert_eq!(json["dissolvedOxygen"], 6.25);
        assert_eq!(json["totalColiform"], 1234);
    }
}
