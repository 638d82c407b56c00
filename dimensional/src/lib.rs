/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod canonical;
pub mod compare;
pub mod error;
pub mod list;
pub mod prefix;
pub mod quantity;
pub mod ratio;
pub mod si;
pub mod system;
pub mod tag;
pub mod unit;

pub use canonical::Canonical;
pub use compare::{
    compare_exponent, compare_tag, same_tag, similar_units, sum_exponent,
};
pub use error::UnitError;
pub use list::UnitList;
pub use prefix::SiPrefix;
pub use quantity::{Delta, Quantity};
pub use ratio::Ratio;
pub use system::UnitSystem;
pub use tag::Tag;
pub use unit::Unit;
