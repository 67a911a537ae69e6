use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart threshold for pH.
pub const PH_THRESHOLD: f64 = 7.5;
/// Chart threshold for biochemical oxygen demand (mg/L).
pub const BOD_THRESHOLD: f64 = 3.0;
/// Chart threshold for dissolved oxygen (mg/L).
pub const DO_THRESHOLD: f64 = 5.0;
/// Chart threshold for total coliform (MPN/100 mL).
pub const COLIFORM_THRESHOLD: f64 = 500.0;

/// A water-quality parameter that can be charted and listed.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    #[default]
    Ph,
    Bod,
    DissolvedOxygen,
    TotalColiform,
}

impl Parameter {
    /// All parameters in the order the dashboard offers them.
    pub const ALL: [Parameter; 4] = [
        Parameter::Ph,
        Parameter::Bod,
        Parameter::DissolvedOxygen,
        Parameter::TotalColiform,
    ];

    /// Short code used in DOM ids and URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Bod => "bod",
            Parameter::DissolvedOxygen => "do",
            Parameter::TotalColiform => "totalColiform",
        }
    }

    /// Label for the chart's y-axis and series title.
    pub fn axis_label(&self) -> String {
        self.code().to_uppercase()
    }

    /// Label shown next to the radio button.
    pub fn display_label(&self) -> &'static str {
        match self {
            Parameter::Ph => "PH",
            Parameter::Bod => "BOD",
            Parameter::DissolvedOxygen => "DO",
            Parameter::TotalColiform => "Total Coliform",
        }
    }

    /// The reference line drawn on the trend chart.
    pub fn threshold(&self) -> f64 {
        match self {
            Parameter::Ph => PH_THRESHOLD,
            Parameter::Bod => BOD_THRESHOLD,
            Parameter::DissolvedOxygen => DO_THRESHOLD,
            Parameter::TotalColiform => COLIFORM_THRESHOLD,
        }
    }

    pub fn from_code(code: &str) -> Option<Parameter> {
        Parameter::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Resolve an optional code, falling back to pH when it is absent or unknown.
    pub fn from_code_or_default(code: Option<&str>) -> Parameter {
        match code {
            Some(c) => Parameter::from_code(c).unwrap_or_else(|| {
                log::warn!("[GM] unknown parameter code {:?}, using pH", c);
                Parameter::default()
            }),
            None => Parameter::default(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}
