/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

/// Identity of a base dimension. This can be considered a unit's
/// "type": every unit derived from a fundamental unit carries that
/// unit's tag unchanged, and conversion is possible only between
/// units whose tags agree (compound units carry one tag per factor).
///
/// A tag is minted when a fundamental unit is defined and compared by
/// identity, never by structure; two fundamental units with distinct
/// names are distinct dimensions even if their derivations look alike.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Debug,
)]
#[serde(transparent)]
pub struct Tag(SmolStr);

impl Tag {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Tag(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag(SmolStr::new(name))
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
