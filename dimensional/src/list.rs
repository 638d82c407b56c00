/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::mem;

use super::tag::Tag;
use super::unit::Unit;

/// An ordered sequence of unit descriptors: the substrate on which
/// compound units and the comparison algebra are built. The sequence
/// is a cons list with an explicit empty sentinel; all operations are
/// pure and return new sequences.
///
/// Order is insertion order. It is not significant for comparison
/// (which treats the sequence as a multiset) and only reaches the
/// numeric side through a commutative factor product, so it never
/// affects computed values.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub enum UnitList {
    #[default]
    Empty,
    Cons(Unit, Box<UnitList>),
}

impl UnitList {
    /// Push a unit onto the front of the sequence.
    pub fn push(self, unit: Unit) -> Self {
        UnitList::Cons(unit, Box::new(self))
    }

    /// The unit at the front of the sequence, if any.
    pub fn peek(&self) -> Option<&Unit> {
        match self {
            UnitList::Empty => None,
            UnitList::Cons(head, _) => Some(head),
        }
    }

    /// The sequence without its front element.
    pub fn pop(&self) -> Option<&UnitList> {
        match self {
            UnitList::Empty => None,
            UnitList::Cons(_, tail) => Some(tail),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            UnitList::Empty => 0,
            UnitList::Cons(_, tail) => 1 + tail.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, UnitList::Empty)
    }

    /// Find the first element structurally identical to `unit` and
    /// return the sequence from that position on; `None` if there is
    /// no such element.
    pub fn find_exact(&self, unit: &Unit) -> Option<&UnitList> {
        match self {
            UnitList::Empty => None,
            UnitList::Cons(head, tail) => match head == unit {
                true => Some(self),
                false => tail.find_exact(unit),
            },
        }
    }

    /// Find the first element carrying the same dimension tag as
    /// `unit` and return the sequence from that position on; `None`
    /// if there is no such element (or if `unit` is compound and has
    /// no single tag of its own).
    pub fn find_tag(&self, unit: &Unit) -> Option<&UnitList> {
        let tag = unit.tag()?;
        self.find_tag_impl(tag)
    }

    fn find_tag_impl(&self, tag: &Tag) -> Option<&UnitList> {
        match self {
            UnitList::Empty => None,
            UnitList::Cons(head, tail) => match head.tag() == Some(tag) {
                true => Some(self),
                false => tail.find_tag_impl(tag),
            },
        }
    }

    /// Remove every element for which `matches(unit, element)` holds.
    pub fn remove_matching(
        &self,
        unit: &Unit,
        matches: fn(&Unit, &Unit) -> bool,
    ) -> UnitList {
        match self {
            UnitList::Empty => UnitList::Empty,
            UnitList::Cons(head, tail) => {
                let rest = tail.remove_matching(unit, matches);
                match matches(unit, head) {
                    true => rest,
                    false => rest.push(head.clone()),
                }
            }
        }
    }

    /// Keep the first element of every `matches`-equivalence class,
    /// in order of first appearance.
    pub fn unique(&self, matches: fn(&Unit, &Unit) -> bool) -> UnitList {
        match self {
            UnitList::Empty => UnitList::Empty,
            UnitList::Cons(head, tail) => UnitList::Cons(
                head.clone(),
                Box::new(tail.remove_matching(head, matches).unique(matches)),
            ),
        }
    }

    /// Append `other` after the elements of this sequence.
    pub fn concat(self, other: UnitList) -> UnitList {
        match self {
            UnitList::Empty => other,
            UnitList::Cons(head, tail) => {
                UnitList::Cons(head, Box::new(tail.concat(other)))
            }
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self)
    }
}

impl FromIterator<Unit> for UnitList {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        let units: Vec<Unit> = iter.into_iter().collect();
        units
            .into_iter()
            .rev()
            .fold(UnitList::Empty, |list, unit| list.push(unit))
    }
}

pub struct Iter<'a>(&'a UnitList);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Unit;
    fn next(&mut self) -> Option<&'a Unit> {
        match self.0 {
            UnitList::Empty => None,
            UnitList::Cons(head, tail) => {
                self.0 = &**tail;
                Some(head)
            }
        }
    }
}

impl<'a> IntoIterator for &'a UnitList {
    type Item = &'a Unit;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct IntoIter(UnitList);

impl Iterator for IntoIter {
    type Item = Unit;
    fn next(&mut self) -> Option<Unit> {
        match mem::take(&mut self.0) {
            UnitList::Empty => None,
            UnitList::Cons(head, tail) => {
                self.0 = *tail;
                Some(head)
            }
        }
    }
}

impl IntoIterator for UnitList {
    type Item = Unit;
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}
