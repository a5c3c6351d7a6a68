use serde::{Deserialize, Serialize};

/*----- */
// Balance
/*----- */
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub struct Balance {
    pub free: f64,
    pub used: f64,
    pub total: f64,
}

impl Balance {
    pub fn new(free: f64, used: f64, total: f64) -> Self {
        Self { free, used, total }
    }

    // Some venues report a single figure with no hold concept, in which case
    // the whole balance counts as free.
    pub fn from_total(total: f64) -> Self {
        Self {
            free: total,
            used: 0.0,
            total,
        }
    }
}

/*----- */
// Asset Balance
/*----- */
#[derive(Clone, PartialEq, PartialOrd, Debug, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset: String,
    pub balance: Balance,
}

impl AssetBalance {
    pub fn new(asset: String, balance: Balance) -> Self {
        Self { asset, balance }
    }
}
