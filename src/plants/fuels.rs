use serde::{Deserialize, Serialize};

/// Market parameters shared by every plant in a request.
///
/// JSON keys carry their units (`"gas(euro/MWh)"`); the bare field names
/// are accepted as aliases.
///
/// # Examples
///
/// ```
/// use production_plan::plants::Fuels;
///
/// let fuels: Fuels = serde_json::from_str(
///     r#"{"gas(euro/MWh)": 13.4, "kerosine(euro/MWh)": 50.8, "co2(euro/ton)": 20, "wind(%)": 60}"#,
/// ).unwrap();
/// assert_eq!(fuels.wind_fraction(), 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuels {
    /// Gas price (€/MWh).
    #[serde(rename = "gas(euro/MWh)", alias = "gas")]
    pub gas: f64,
    /// Kerosine price (€/MWh).
    #[serde(rename = "kerosine(euro/MWh)", alias = "kerosine")]
    pub kerosine: f64,
    /// CO2 emission allowance price (€/ton). Not used in pricing.
    #[serde(rename = "co2(euro/ton)", alias = "co2")]
    pub co2: f64,
    /// Wind availability (percent, 0–100).
    #[serde(rename = "wind(%)", alias = "wind")]
    pub wind: f64,
}

impl Fuels {
    pub fn new(gas: f64, kerosine: f64, co2: f64, wind: f64) -> Self {
        Self {
            gas,
            kerosine,
            co2,
            wind,
        }
    }

    /// Wind availability as a fraction of installed capacity.
    pub fn wind_fraction(&self) -> f64 {
        self.wind / 100.0
    }
}
