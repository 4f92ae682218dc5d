// Pattern: Builder + Director
// The same recipe produces a list of car parts or a human-readable car manual,
// depending on which builder the director is handed.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use tracing::debug;

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Car {
    parts: Vec<String>,
}

impl Car {
    fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Car parts: {:?}", self.parts)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Manual {
    parts: Vec<String>,
}

impl Manual {
    fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Manual parts: {:?}", self.parts)
    }
}

// ============================================================================
// Builder capability
// ============================================================================

/// The steps a director can sequence. Object safe, so recipes never see
/// the concrete builder.
pub trait CarAssembly {
    fn set_engine(&mut self, name: &str);
    fn set_seats(&mut self, count: i32);
}

pub trait Builder: CarAssembly {
    type Product;

    /// Hand over the product built so far and start a fresh one.
    fn product(&mut self) -> Self::Product;
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    car: Car,
}

impl CarBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarAssembly for CarBuilder {
    fn set_engine(&mut self, name: &str) {
        self.car.add(format!("Set {} Engine", name));
    }

    fn set_seats(&mut self, count: i32) {
        self.car.add(format!("Set {} Seats", count));
    }
}

impl Builder for CarBuilder {
    type Product = Car;

    fn product(&mut self) -> Car {
        let car = std::mem::take(&mut self.car);
        debug!(parts = car.parts.len(), "car retrieved, builder reset");
        car
    }
}

#[derive(Debug, Default)]
pub struct CarManualBuilder {
    manual: Manual,
}

impl CarManualBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Manual text for an engine name, matched case-insensitively.
pub fn engine_description(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "sport" => "The car have a good engine for sport competitions",
        "big one" => "The car have a very insatiable engine. You should by more fuel",
        _ => "The car have some engine, I think",
    }
}

/// Manual text for a seat count. Three seats get the generic line.
pub fn seats_description(count: i32) -> &'static str {
    match count {
        2 => "There are 3 doors in the car",
        4 => "There are 5 doors in the car",
        n if n > 4 => "There are many doors in the car",
        _ => "There should be some doors in the car, I think",
    }
}

impl CarAssembly for CarManualBuilder {
    fn set_engine(&mut self, name: &str) {
        self.manual.add(engine_description(name));
    }

    fn set_seats(&mut self, count: i32) {
        self.manual.add(seats_description(count));
    }
}

impl Builder for CarManualBuilder {
    type Product = Manual;

    fn product(&mut self) -> Manual {
        let manual = std::mem::take(&mut self.manual);
        debug!(parts = manual.parts.len(), "manual retrieved, builder reset");
        manual
    }
}

// ============================================================================
// Director
// ============================================================================

/// Named recipes a [`Director`] knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    SportEngine2Seats,
    BigEngine10Seats,
    SeatsOnly4,
}

impl Recipe {
    pub const ALL: [Recipe; 3] = [
        Recipe::BigEngine10Seats,
        Recipe::SportEngine2Seats,
        Recipe::SeatsOnly4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Recipe::SportEngine2Seats => "sport-engine-2-seats",
            Recipe::BigEngine10Seats => "big-engine-10-seats",
            Recipe::SeatsOnly4 => "seats-only-4",
        }
    }
}

/// Stateless: recipes only sequence builder steps, the caller collects the product.
pub struct Director;

impl Director {
    pub fn build_car_with_sport_engine(builder: &mut dyn CarAssembly) {
        builder.set_engine("Sport");
        builder.set_seats(2);
    }

    pub fn build_car_with_10_seats(builder: &mut dyn CarAssembly) {
        builder.set_engine("Big one");
        builder.set_seats(10);
    }

    pub fn build_car_only_with_seats(builder: &mut dyn CarAssembly) {
        builder.set_seats(4);
    }

    pub fn construct(recipe: Recipe, builder: &mut dyn CarAssembly) {
        debug!(recipe = recipe.name(), "running recipe");
        match recipe {
            Recipe::SportEngine2Seats => Self::build_car_with_sport_engine(builder),
            Recipe::BigEngine10Seats => Self::build_car_with_10_seats(builder),
            Recipe::SeatsOnly4 => Self::build_car_only_with_seats(builder),
        }
    }
}

// ============================================================================
// Demo
// ============================================================================

// Car parts: ["Set Big one Engine", "Set 10 Seats"]
// Manual parts: ["The car have a very insatiable engine. You should by more fuel", "There are many doors in the car"]
// Car parts: ["Set Sport Engine", "Set 2 Seats"]
// Manual parts: ["The car have a good engine for sport competitions", "There are 3 doors in the car"]
// Car parts: ["Set 4 Seats"]
// Manual parts: ["There are 5 doors in the car"]
// Car parts: ["Set 1 Seats", "Set minimal one Engine"]
// Manual parts: ["There should be some doors in the car, I think", "The car have some engine, I think"]
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let mut car_builder = CarBuilder::new();
    let mut manual_builder = CarManualBuilder::new();

    for recipe in Recipe::ALL {
        Director::construct(recipe, &mut car_builder);
        writeln!(out, "{}", car_builder.product())?;
        Director::construct(recipe, &mut manual_builder);
        writeln!(out, "{}", manual_builder.product())?;
    }

    // Builders work without a director too.
    car_builder.set_seats(1);
    car_builder.set_engine("minimal one");
    writeln!(out, "{}", car_builder.product())?;

    manual_builder.set_seats(1);
    manual_builder.set_engine("minimal one");
    writeln!(out, "{}", manual_builder.product())?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
