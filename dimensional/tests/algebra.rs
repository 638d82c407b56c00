/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dimensional::prefix::milli;
use dimensional::{
    compare_exponent, compare_tag, same_tag, similar_units, sum_exponent,
    Canonical, Ratio, Unit, UnitList,
};

fn meter() -> Unit {
    Unit::fundamental("meter")
}

fn second() -> Unit {
    Unit::fundamental("second")
}

fn kilogram() -> Unit {
    Unit::fundamental("kilogram")
}

fn millimeter() -> Unit {
    milli(meter())
}

fn sq_meter() -> Unit {
    meter().pow(2)
}

fn meters2() -> Unit {
    Unit::compound(meter(), meter())
}

fn millimeters2() -> Unit {
    Unit::compound(millimeter(), millimeter())
}

#[test]
fn tag_comparisons() {
    assert!(compare_tag(&meter(), &millimeter()));
    assert!(compare_tag(&meters2(), &millimeters2()));
    assert!(compare_tag(&meters2(), &millimeter()));
    assert!(compare_tag(&millimeter(), &meters2()));
    assert!(compare_tag(&meters2(), &sq_meter()));
    assert!(!compare_tag(&meter(), &second()));
}

#[test]
fn exponent_comparisons() {
    assert_eq!(compare_exponent(&meter(), &millimeter()), 0);
    assert_eq!(compare_exponent(&meters2(), &millimeters2()), 0);
    assert_eq!(compare_exponent(&sq_meter(), &meters2()), 0);
    assert_eq!(compare_exponent(&meters2(), &sq_meter()), 0);
    assert_eq!(compare_exponent(&sq_meter(), &millimeter()), 1);
    assert_eq!(compare_exponent(&millimeter(), &sq_meter()), -1);
}

#[test]
fn similarity_is_commutative() {
    let pairs = [
        (meter(), millimeter()),
        (sq_meter(), meters2()),
        (meter(), second()),
        (Unit::compound(meter(), second().inverse()), meter()),
    ];
    for (a, b) in pairs {
        assert_eq!(similar_units(&a, &b), similar_units(&b, &a));
    }
}

#[test]
fn compounding_is_associative() {
    let left =
        Unit::compound(Unit::compound(meter(), second()), kilogram());
    let right =
        Unit::compound(meter(), Unit::compound(second(), kilogram()));
    assert!(similar_units(&left, &right));
}

#[test]
fn cancellation() {
    let forward = Unit::compound(meter(), meter().inverse());
    let backward = Unit::compound(meter().inverse(), meter());
    assert!(similar_units(&forward, &Unit::dimensionless()));
    assert!(similar_units(&backward, &Unit::dimensionless()));
    assert!(similar_units(&forward, &backward));
}

#[test]
fn exponents_add_over_the_same_base() {
    assert_eq!(
        Unit::compound(millimeter().pow(2), millimeter().pow(3)),
        millimeter().pow(5)
    );
    assert_eq!(
        Unit::compound(meter().pow(2), meter().pow(-2)),
        Unit::Exponent(Box::new(meter()), 0)
    );
}

#[test]
fn zero_sum_tags_count_as_absent() {
    let cancelled = Unit::compound(
        Unit::compound(meter(), meter().inverse()),
        kilogram(),
    );
    assert!(similar_units(&cancelled, &kilogram()));
    assert!(!compare_tag(&cancelled, &Unit::compound(meter(), kilogram())));
    assert!(!similar_units(
        &cancelled,
        &Unit::compound(meter(), kilogram())
    ));
}

#[test]
fn dimensionless_is_distinct_from_no_factors() {
    let cancelled = Unit::compound(second(), second().inverse());
    assert!(cancelled.canonical().is_dimensionless());
    assert!(Unit::dimensionless().canonical().is_dimensionless());
    assert_ne!(cancelled.canonical(), Unit::dimensionless().canonical());
    assert!(similar_units(&cancelled, &Unit::dimensionless()));
}

#[test]
fn canonical_of_product_is_product_of_canonicals() {
    let a = Unit::compound(meter(), second().inverse());
    let b = Unit::compound(kilogram(), meter());
    assert_eq!(
        Canonical::of(&Unit::compound(a.clone(), b.clone())),
        Canonical::of(&a) * Canonical::of(&b)
    );
}

#[test]
fn exponent_sums() {
    assert_eq!(sum_exponent(&meter(), &meters2().factors()), 2);
    assert_eq!(sum_exponent(&meter(), &second().factors()), 0);
    let velocity = Unit::compound(meter(), second().inverse());
    assert_eq!(sum_exponent(&second(), &velocity.factors()), -1);
}

#[test]
fn exponent_conversion_factor() {
    let sq_millimeter = millimeter().pow(2);
    assert_eq!(sq_millimeter.from_fundamental(1.0), 1_000_000.0);
}

#[test]
fn scaled_ratio_is_exact() {
    let unit = Unit::scaled(meter(), Ratio::new(1000, 1));
    assert_eq!(unit, millimeter());
}

#[test]
fn sequence_operations() {
    let list = UnitList::Empty
        .push(second())
        .push(millimeter())
        .push(meter());
    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.peek(), Some(&meter()));
    assert_eq!(list.pop().unwrap().peek(), Some(&millimeter()));

    assert!(list.find_exact(&second()).is_some());
    assert!(list.find_exact(&kilogram()).is_none());

    let at_tag = list.find_tag(&millimeter()).unwrap();
    assert_eq!(at_tag.peek(), Some(&meter()));
    assert_eq!(at_tag.len(), 3);

    let removed = list.remove_matching(&meter(), same_tag);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed.peek(), Some(&second()));

    let unique = list.unique(same_tag);
    assert_eq!(unique.len(), 2);
    assert_eq!(unique.peek(), Some(&meter()));
    assert_eq!(unique.pop().unwrap().peek(), Some(&second()));
}
