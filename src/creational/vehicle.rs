// Pattern: Builder (parts-supplier variant)
// Builders hand out ready-made parts; the director owns the assembly order.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wheel {
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Engine {
    pub horsepower: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Body {
    pub shape: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    body: Body,
    engine: Engine,
    wheels: Vec<Wheel>,
}

impl Vehicle {
    fn new(body: Body, engine: Engine) -> Self {
        Self {
            body,
            engine,
            wheels: Vec::new(),
        }
    }

    fn attach_wheel(&mut self, wheel: Wheel) {
        self.wheels.push(wheel);
    }

    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn specification(&self) -> Vec<String> {
        let mut lines = vec![
            format!("body: {}", self.body.shape),
            format!("engine horsepower: {}", self.engine.horsepower),
        ];
        if let Some(wheel) = self.wheels.first() {
            lines.push(format!("tire size: {}'", wheel.size));
        }
        lines
    }
}

pub trait VehicleBuilder {
    fn wheel(&self) -> Wheel;
    fn engine(&self) -> Engine;
    fn body(&self) -> Body;
}

pub struct JeepBuilder;

impl VehicleBuilder for JeepBuilder {
    fn wheel(&self) -> Wheel {
        Wheel { size: 22 }
    }

    fn engine(&self) -> Engine {
        Engine { horsepower: 400 }
    }

    fn body(&self) -> Body {
        Body {
            shape: "SUV".to_string(),
        }
    }
}

pub struct PassengerBuilder;

impl VehicleBuilder for PassengerBuilder {
    fn wheel(&self) -> Wheel {
        Wheel { size: 18 }
    }

    fn engine(&self) -> Engine {
        Engine { horsepower: 200 }
    }

    fn body(&self) -> Body {
        Body {
            shape: "simple one".to_string(),
        }
    }
}

pub const WHEEL_COUNT: usize = 4;

pub struct VehicleDirector {
    builder: Box<dyn VehicleBuilder>,
}

impl VehicleDirector {
    pub fn new(builder: Box<dyn VehicleBuilder>) -> Self {
        Self { builder }
    }

    pub fn set_builder(&mut self, builder: Box<dyn VehicleBuilder>) {
        self.builder = builder;
    }

    pub fn assemble(&self) -> Vehicle {
        let mut vehicle = Vehicle::new(self.builder.body(), self.builder.engine());
        for _ in 0..WHEEL_COUNT {
            vehicle.attach_wheel(self.builder.wheel());
        }
        debug!(body = %vehicle.body.shape, "vehicle assembled");
        vehicle
    }
}

// Jeep
// body: SUV
// engine horsepower: 400
// tire size: 22'
//
// Passenger
// body: simple one
// engine horsepower: 200
// tire size: 18'
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let mut director = VehicleDirector::new(Box::new(JeepBuilder));

    writeln!(out, "Jeep")?;
    for line in director.assemble().specification() {
        writeln!(out, "{}", line)?;
    }

    writeln!(out, "\nPassenger")?;
    director.set_builder(Box::new(PassengerBuilder));
    for line in director.assemble().specification() {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
