/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use dimensional::{similar_units, sum_exponent, Delta, Quantity, Ratio, Unit};

fn meter() -> Unit {
    Unit::fundamental("meter")
}

fn second() -> Unit {
    Unit::fundamental("second")
}

fn celsius() -> Unit {
    Unit::fundamental("celsius")
}

fn millimeter() -> Unit {
    Unit::scaled(meter(), Ratio::new(1000, 1))
}

fn fahrenheit() -> Unit {
    Unit::linear(celsius(), Ratio::new(9, 5), 32.0)
}

fn sq_meter() -> Unit {
    meter().pow(2)
}

fn sq_millimeter() -> Unit {
    millimeter().pow(2)
}

fn velocity() -> Unit {
    Unit::compound(meter(), second().inverse())
}

fn acceleration() -> Unit {
    Unit::compound(velocity(), second().inverse())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn scaled_unit_values() {
    assert_eq!(millimeter().from_fundamental(1.0), 1000.0);
    assert_eq!(millimeter().to_fundamental(1.0), 0.001);
}

#[test]
fn affine_unit_values() {
    assert_eq!(fahrenheit().to_fundamental(32.0), 0.0);
    assert_eq!(fahrenheit().from_fundamental(0.0), 32.0);
    assert_eq!(
        fahrenheit().to_fundamental(-40.0),
        fahrenheit().from_fundamental(-40.0)
    );
}

#[test]
fn exponent_unit_values() {
    assert_eq!(sq_millimeter().from_fundamental(1.0), 1_000_000.0);
    assert!(approx(sq_millimeter().to_fundamental(100.0), 0.0001));
}

#[test]
fn round_trip() {
    let units = [
        meter(),
        millimeter(),
        celsius(),
        fahrenheit(),
        sq_millimeter(),
        Unit::compound(millimeter(), second().inverse()),
    ];
    for unit in &units {
        for value in [-40.0, 0.0, 1.0, 273.15, 1234.5] {
            assert!(
                approx(unit.from_fundamental(unit.to_fundamental(value)), value),
                "round trip failed for {} at {}",
                unit,
                value
            );
        }
    }
}

#[test]
fn quantity_conversions() {
    let m4 = Quantity::new(1.0, meter());
    assert_eq!(m4.value(), 1.0);

    let m5 = Quantity::new(500.0, millimeter()).convert(&meter()).unwrap();
    assert_eq!(m5.value(), 0.5);

    let m6 = Quantity::new(3.5, sq_meter())
        .convert(&sq_millimeter())
        .unwrap();
    assert_eq!(m6.value(), 3_500_000.0);

    let f1 = Quantity::new(10.0, celsius()).convert(&fahrenheit()).unwrap();
    assert_eq!(f1.value(), 50.0);
}

#[test]
fn delta_conversions() {
    let m8 = Delta::new(50.0, millimeter()).convert(&meter()).unwrap();
    assert_eq!(m8.value(), 0.05);

    let f2 = Delta::new(10.0, celsius()).convert(&fahrenheit()).unwrap();
    assert_eq!(f2.value(), 18.0);
}

#[test]
fn incompatible_conversions_are_rejected() {
    assert!(Quantity::new(5.0, meter()).convert(&sq_millimeter()).is_err());
    assert!(Quantity::new(5.0, meter()).convert(&second()).is_err());
    assert!((Quantity::new(1.0, meter()) - Quantity::new(1.0, second()))
        .is_err());
    assert!((Quantity::new(1.0, meter()) + Delta::new(1.0, second())).is_err());
}

#[test]
fn conversion_idempotence() {
    let there = Quantity::new(123.0, millimeter()).convert(&meter()).unwrap();
    let back = there.convert(&millimeter()).unwrap();
    assert!(approx(back.value(), 123.0));
}

#[test]
fn additive_arithmetic() {
    let sum = (Delta::new(1.0, meter()) + Delta::new(500.0, millimeter()))
        .unwrap();
    assert_eq!(sum.value(), 1.5);

    let diff = (Quantity::new(5.0, meter())
        - Quantity::new(500.0, millimeter()))
    .unwrap();
    assert_eq!(diff.value(), 4.5);

    let moved = (Quantity::new(1.0, meter())
        + Delta::new(500.0, millimeter()))
    .unwrap();
    assert_eq!(moved.value(), 1.5);

    let commuted = (Delta::new(500.0, millimeter())
        + Quantity::new(1.0, meter()))
    .unwrap();
    assert_eq!(commuted.value(), 1.5);

    let negated = -Delta::new(3.0, meter());
    assert_eq!(negated.value(), -3.0);

    let scaled = Quantity::new(2.0, meter()) * 3.0;
    assert_eq!(scaled.value(), 6.0);
}

#[test]
fn multiplicative_arithmetic() {
    let m9 = (Quantity::new(100.0, millimeter()) * Quantity::new(5.0, meter()))
        .convert(&sq_meter())
        .unwrap();
    assert_eq!(m9.value(), 0.5);

    let m10_t = Unit::compound(sq_meter(), millimeter().inverse());
    assert!(similar_units(&m10_t, &meter()));

    let m10 = (m9 / Quantity::new(100.0, millimeter()))
        .convert(&meter())
        .unwrap();
    assert_eq!(m10.value(), 5.0);
}

#[test]
fn products_of_deltas_and_quantities() {
    assert_eq!(acceleration().factors().len(), 3);

    let velo1 = Unit::compound(second(), acceleration());
    let velo2 = Unit::compound(acceleration(), second());
    assert!(similar_units(&velo1, &velocity()));
    assert!(similar_units(&velo2, &velocity()));

    let p1 = Delta::new(1.0, second())
        * Delta::new(1.0, second())
        * Quantity::new(1.0, acceleration());
    let p2 = Delta::new(1.0, second()) * Quantity::new(1.0, velocity());
    assert_eq!(sum_exponent(&second(), &p1.unit().factors()), 0);
    assert!(similar_units(p1.unit(), p2.unit()));
    assert!(similar_units(p1.unit(), &meter()));
    assert!(similar_units(p2.unit(), &meter()));
}

#[test]
fn difference_unit_of_a_scaled_unit_is_itself() {
    assert_eq!(meter().difference_unit(), meter());
    assert_eq!(millimeter().difference_unit(), millimeter());
    assert!(similar_units(&meter(), &meter().difference_unit()));
}

#[test]
fn quantity_ordering() {
    let a = Quantity::new(1.0, meter());
    let b = Quantity::new(500.0, millimeter());
    assert_eq!(a.partial_cmp(&b).unwrap(), Some(Ordering::Greater));
    assert!(a.partial_cmp(&Quantity::new(1.0, second())).is_err());
}
