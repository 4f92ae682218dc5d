//! The table of every pattern and its demo, plus the runner the binary uses.

use crate::config::CatalogConfig;
use crate::creational::{
    abstract_factory, borg, builder, factory_method, prototype, simple_factory, singleton, vehicle,
};
use crate::error::{PatternError, Result};
use crate::structural::{adapter, bridge, composite, decorator};
use colored::Colorize;
use std::fmt;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Category::Creational => write!(f, "Creational Patterns"),
            Category::Structural => write!(f, "Structural Patterns"),
        }
    }
}

pub type DemoFn = fn(&CatalogConfig, &mut dyn Write) -> Result<()>;

pub struct PatternEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub demo: DemoFn,
}

pub static PATTERNS: &[PatternEntry] = &[
    PatternEntry {
        name: "simple-factory",
        title: "Simple Factory",
        category: Category::Creational,
        summary: "one function picks the product by a runtime key",
        demo: simple_factory::demo,
    },
    PatternEntry {
        name: "factory-method",
        title: "Factory Method",
        category: Category::Creational,
        summary: "subtypes decide which product a shared algorithm uses",
        demo: factory_method::demo,
    },
    PatternEntry {
        name: "abstract-factory",
        title: "Abstract Factory",
        category: Category::Creational,
        summary: "families of related products from one factory",
        demo: abstract_factory::demo,
    },
    PatternEntry {
        name: "builder",
        title: "Builder",
        category: Category::Creational,
        summary: "director recipes run against interchangeable builders",
        demo: builder::demo,
    },
    PatternEntry {
        name: "vehicle-builder",
        title: "Builder (parts supplier)",
        category: Category::Creational,
        summary: "builders supply parts, the director assembles them",
        demo: vehicle::demo,
    },
    PatternEntry {
        name: "prototype",
        title: "Prototype",
        category: Category::Creational,
        summary: "registry of exemplars cloned deeply with overrides",
        demo: prototype::demo,
    },
    PatternEntry {
        name: "singleton",
        title: "Singleton",
        category: Category::Creational,
        summary: "at most one instance, held by an explicit registry",
        demo: singleton::demo,
    },
    PatternEntry {
        name: "borg",
        title: "Borg",
        category: Category::Creational,
        summary: "many instances sharing one state",
        demo: borg::demo,
    },
    PatternEntry {
        name: "adapter",
        title: "Adapter",
        category: Category::Structural,
        summary: "wrap an object to give it the interface a client expects",
        demo: adapter::demo,
    },
    PatternEntry {
        name: "bridge",
        title: "Bridge",
        category: Category::Structural,
        summary: "remotes and devices vary independently",
        demo: bridge::demo,
    },
    PatternEntry {
        name: "composite",
        title: "Composite",
        category: Category::Structural,
        summary: "trees of objects treated like single objects",
        demo: composite::demo,
    },
    PatternEntry {
        name: "decorator",
        title: "Decorator",
        category: Category::Structural,
        summary: "stack behaviour by wrapping objects",
        demo: decorator::demo,
    },
];

pub fn find(name: &str) -> Result<&'static PatternEntry> {
    let key = name.trim().to_ascii_lowercase().replace('_', "-");
    PATTERNS
        .iter()
        .find(|entry| entry.name == key)
        .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
}

fn heading(text: &str, config: &CatalogConfig) -> String {
    if config.color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

pub fn list(config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    for category in [Category::Creational, Category::Structural] {
        writeln!(out, "{}", heading(&category.to_string(), config))?;
        for entry in PATTERNS.iter().filter(|entry| entry.category == category) {
            writeln!(out, "  {:<18} {}", entry.name, entry.summary)?;
        }
    }
    Ok(())
}

pub fn run_entry(entry: &PatternEntry, config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    info!(pattern = entry.name, "running demo");
    writeln!(out, "{}", heading(&format!("=== {} ===", entry.title), config))?;
    (entry.demo)(config, out)
}

/// Resolves every name before running anything, so a typo runs nothing.
pub fn run<S: AsRef<str>>(names: &[S], config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let entries = names
        .iter()
        .map(|name| find(name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        run_entry(entry, config, out)?;
    }
    Ok(())
}

pub fn run_all(config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let names: Vec<&str> = PATTERNS.iter().map(|entry| entry.name).collect();
    run(names.as_slice(), config, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> CatalogConfig {
        CatalogConfig {
            color: false,
            platform: Some("linux".to_string()),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = PATTERNS.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PATTERNS.len());
    }

    #[test]
    fn test_find_normalizes_name() {
        assert_eq!(find("Simple_Factory").unwrap().name, "simple-factory");
        assert!(matches!(find("flyweight"), Err(PatternError::UnknownPattern(_))));
    }

    #[test]
    fn test_typo_runs_nothing() {
        let mut out = Vec::new();
        let result = run(&["builder", "buildr"], &plain(), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_writes_heading() {
        let mut out = Vec::new();
        run(&["decorator"], &plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== Decorator ===\nSent through Email"));
    }

    #[test]
    fn test_list_groups_by_category() {
        let mut out = Vec::new();
        list(&plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let creational = text.find("Creational Patterns").unwrap();
        let structural = text.find("Structural Patterns").unwrap();
        let adapter = text.find("adapter").unwrap();
        assert!(creational < structural && structural < adapter);
    }

    #[test]
    fn test_run_all_on_mac_runs_every_demo() {
        let config = CatalogConfig {
            platform: Some("macos".to_string()),
            ..plain()
        };
        let mut out = Vec::new();
        run_all(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unsupported platform: 'MacOS'"));
        assert!(text.contains("Here are some instructions of how to draw mac button"));
        assert!(text.contains("=== Prototype ==="));
        assert!(text.contains("=== Decorator ==="));
    }

    #[test]
    fn test_run_all_succeeds() {
        let mut out = Vec::new();
        run_all(&plain(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for entry in PATTERNS {
            assert!(text.contains(&format!("=== {} ===", entry.title)));
        }
    }
}
