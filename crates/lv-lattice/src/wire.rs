//! Wire payload produced by the external pricing service.
//!
//! The pricing backend responds with `{price, priceTree, valueTree}`; this
//! module mirrors that JSON shape and converts it into a shape-validated
//! [`Lattice`]. Only available with the `serde` feature.

use serde::{Deserialize, Serialize};

use crate::Lattice;
use lv_core::{Error, Real};

/// The `/tree` response of the pricing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeResponse {
    /// Present value at the root of the lattice.
    pub price: Real,
    /// Underlying price at each node, one level per time step.
    #[serde(rename = "priceTree")]
    pub price_tree: Vec<Vec<Real>>,
    /// Derived (option) value at each node, same shape as `price_tree`.
    #[serde(rename = "valueTree")]
    pub value_tree: Vec<Vec<Real>>,
}

impl TryFrom<LatticeResponse> for Lattice {
    type Error = Error;

    fn try_from(resp: LatticeResponse) -> Result<Self, Error> {
        Lattice::new(resp.price_tree, resp.value_tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_backend_shape() {
        let json = r#"{
            "price": 10.45,
            "priceTree": [[100.0], [110.0, 90.0]],
            "valueTree": [[10.45], [15.0, 2.0]]
        }"#;
        let resp: LatticeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.price_tree.len(), 2);

        let lattice = Lattice::try_from(resp).unwrap();
        assert_eq!(lattice.steps(), 1);
        assert_eq!(lattice.value(1, 0), 15.0);
    }

    #[test]
    fn conversion_rejects_mismatched_trees() {
        let resp = LatticeResponse {
            price: 0.0,
            price_tree: vec![vec![100.0], vec![110.0, 90.0]],
            value_tree: vec![vec![0.0]],
        };
        assert!(Lattice::try_from(resp).is_err());
    }
}
