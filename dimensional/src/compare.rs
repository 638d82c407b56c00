/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Comparison of arbitrary unit expressions. Units are compared on
//! their canonical form: per dimension tag, the sum of the exponents
//! contributed by every factor carrying that tag. The factor order
//! chosen at construction time never matters.

use super::list::UnitList;
use super::unit::Unit;

/// Whether two units carry the same dimension tag. Compound units
/// have no single tag and never compare equal here; they are handled
/// by flattening in the expression-level comparisons below.
pub fn same_tag(a: &Unit, b: &Unit) -> bool {
    match (a.tag(), b.tag()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Sum of the exponents contributed to `unit`'s dimension tag by the
/// factors of `units`: the declared exponent for exponent units, 1
/// for any other unit. Zero if the tag does not occur at all.
pub fn sum_exponent(unit: &Unit, units: &UnitList) -> i32 {
    match units.find_tag(unit) {
        Some(UnitList::Cons(head, tail)) => {
            head.exponent() + sum_exponent(unit, tail)
        }
        _ => 0,
    }
}

/// Lexicographic comparison of per-tag exponent sums: for every tag
/// occurring in either operand, in a deterministic order, the first
/// non-zero difference between the operands' sums for that tag; 0 if
/// every tag balances.
pub fn compare_exponent(a: &Unit, b: &Unit) -> i32 {
    let units_a = a.factors();
    let units_b = b.factors();
    let all = units_a.clone().concat(units_b.clone()).unique(same_tag);
    for unit in all.iter() {
        let diff = sum_exponent(unit, &units_a) - sum_exponent(unit, &units_b);
        if diff != 0 {
            return diff;
        }
    }
    0
}

/// Dimensional equivalence: every tag occurring in either operand
/// must matter to both or to neither. A dimension whose exponents
/// cancel to zero counts as absent, so `length·length⁻¹·mass` is
/// tag-equivalent to `mass` but not to `length·mass`.
pub fn compare_tag(a: &Unit, b: &Unit) -> bool {
    let units_a = a.factors();
    let units_b = b.factors();
    let all = units_a.clone().concat(units_b.clone()).unique(same_tag);
    all.iter().all(|unit| {
        (sum_exponent(unit, &units_a) == 0)
            == (sum_exponent(unit, &units_b) == 0)
    })
}

/// True dimensional equality: the same dimensions with the same total
/// exponent per dimension. This predicate gates every implicit
/// conversion between quantities.
pub fn similar_units(a: &Unit, b: &Unit) -> bool {
    compare_tag(a, b) && compare_exponent(a, b) == 0
}
