// Pattern: Adapter
// Gives unrelated types a common `do_it` without touching them. Everything
// else on the wrapped object stays reachable through `Deref`.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use std::ops::Deref;

pub struct Guitar {
    pub name: String,
}

impl Guitar {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn play(&self) -> String {
        "is playing a Jazz song".to_string()
    }
}

impl fmt::Display for Guitar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the {} guitar", self.name)
    }
}

pub struct Ear {
    side: &'static str,
}

impl Ear {
    pub fn new(is_left: bool) -> Self {
        Self {
            side: if is_left { "left" } else { "right" },
        }
    }

    pub fn side(&self) -> &'static str {
        self.side
    }

    pub fn listen(&self) -> String {
        "is listening".to_string()
    }
}

impl fmt::Display for Ear {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the {} ear", self.side)
    }
}

/// The interface the client code expects.
pub trait Performer: fmt::Display {
    fn do_it(&self) -> String;
}

pub struct Adapter<T> {
    obj: T,
    action: fn(&T) -> String,
}

impl<T> Adapter<T> {
    pub fn new(obj: T, action: fn(&T) -> String) -> Self {
        Self { obj, action }
    }

    pub fn into_inner(self) -> T {
        self.obj
    }
}

impl<T> Deref for Adapter<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.obj
    }
}

impl<T: fmt::Display> fmt::Display for Adapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.obj, f)
    }
}

impl<T: fmt::Display> Performer for Adapter<T> {
    fn do_it(&self) -> String {
        (self.action)(&self.obj)
    }
}

// the Fender guitar is playing a Jazz song
// the left ear is listening
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let performers: Vec<Box<dyn Performer>> = vec![
        Box::new(Adapter::new(Guitar::new("Fender"), Guitar::play)),
        Box::new(Adapter::new(Ear::new(true), Ear::listen)),
    ];

    for performer in &performers {
        writeln!(out, "{} {}", performer, performer.do_it())?;
    }
    Ok(())
}
