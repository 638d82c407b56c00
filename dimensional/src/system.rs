/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// The units of a measurement system: the seven base dimensions,
/// fixed at definition time, and the common compound dimensions
/// derived from them through the unit algebra.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UnitSystem {
    pub length: Unit,
    pub mass: Unit,
    pub time: Unit,
    pub current: Unit,
    pub temperature: Unit,
    pub amount: Unit,
    pub luminosity: Unit,

    pub frequency: Unit,
    pub velocity: Unit,
    pub acceleration: Unit,
    pub force: Unit,
    pub energy: Unit,
}

impl UnitSystem {
    pub fn new(
        length: Unit,
        mass: Unit,
        time: Unit,
        current: Unit,
        temperature: Unit,
        amount: Unit,
        luminosity: Unit,
    ) -> Self {
        let frequency = time.clone().inverse();
        let velocity = Unit::compound(length.clone(), frequency.clone());
        let acceleration =
            Unit::compound(velocity.clone(), frequency.clone());
        let force = Unit::compound(mass.clone(), acceleration.clone());
        let energy = Unit::compound(force.clone(), length.clone());
        UnitSystem {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminosity,
            frequency,
            velocity,
            acceleration,
            force,
            energy,
        }
    }
}
