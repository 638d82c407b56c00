/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::ops::Mul;

use super::tag::Tag;
use super::unit::Unit;

/// Canonical form of a unit expression: its flattened factor tags
/// mapped to their summed exponents. Derived on demand, never stored
/// in the unit itself.
///
/// Tags whose exponents sum to zero are kept in the map, so a
/// compound whose factors cancel (`time·frequency`) is dimensionless
/// but still distinguishable from the unit with no factors at all.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Canonical(BTreeMap<Tag, i32>);

impl Canonical {
    pub fn of(unit: &Unit) -> Self {
        Canonical(unit.factors().iter().fold(
            BTreeMap::new(),
            |mut map, factor| {
                if let Some(tag) = factor.tag() {
                    *map.entry(tag.clone()).or_insert(0) += factor.exponent();
                }
                map
            },
        ))
    }

    pub fn from_map(map: BTreeMap<Tag, i32>) -> Self {
        Canonical(map)
    }

    pub fn as_map(&self) -> &BTreeMap<Tag, i32> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &i32)> {
        self.0.iter()
    }

    /// The summed exponent for a tag; zero when absent.
    pub fn exponent(&self, tag: &Tag) -> i32 {
        self.0.get(tag).copied().unwrap_or(0)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.values().all(|n| *n == 0)
    }
}

impl Mul<Canonical> for Canonical {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Canonical(other.0.into_iter().fold(self.0, |mut map, (tag, n)| {
            *map.entry(tag).or_insert(0) += n;
            map
        }))
    }
}

impl Display for Canonical {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .filter(|(_, &p)| p > 0)
                .map(|(t, p)| format!("{}{}", t, superscript(*p)))
                .collect::<Vec<String>>()
                .join("\u{22c5}")
        )?;
        if self.0.iter().any(|(_, &p)| p < 0) {
            write!(
                f,
                "/{}",
                self.0
                    .iter()
                    .filter(|(_, &p)| p < 0)
                    .map(|(t, p)| format!("{}{}", t, superscript(-*p)))
                    .collect::<Vec<String>>()
                    .join("\u{22c5}")
            )?;
        }
        Ok(())
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

pub(crate) fn superscript(val: i32) -> String {
    if val != 1 {
        val.to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => '\u{207b}',
            })
            .collect()
    } else {
        "".to_string()
    }
}
