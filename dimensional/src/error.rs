/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::unit::Unit;

/// The only failure in this algebra: an operation was requested
/// between units that do not denote the same dimension. Products and
/// powers of units always succeed (the algebra is closed under
/// compound units), so every error is a rejected conversion.
#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum UnitError {
    #[error("incompatible units: {0} <-> {1}")]
    Conversion(Unit, Unit),
}
