// Pattern: Singleton
// The single instance lives in an explicit registry. The first `connect`
// wins; later calls get the same instance back and their parameters are ignored.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub host: String,
    pub port: u16,
    pub password: String,
}

impl Connection {
    pub fn new(host: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            password: password.into(),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Connection(host='{}', port={}, password='{}')",
            self.host, self.port, self.password
        )
    }
}

#[derive(Debug)]
pub struct Database {
    connection: Connection,
}

impl Database {
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The process-wide registry. Never reset; use a local
    /// [`DatabaseRegistry`] where teardown matters.
    pub fn global() -> &'static DatabaseRegistry {
        static REGISTRY: DatabaseRegistry = DatabaseRegistry::new();
        &REGISTRY
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DB params: {}", self.connection)
    }
}

/// Holds at most one [`Database`]. Pass it to whoever needs the instance.
#[derive(Debug, Default)]
pub struct DatabaseRegistry {
    instance: OnceLock<Database>,
}

impl DatabaseRegistry {
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
        }
    }

    pub fn connect(&self, connection: Connection) -> &Database {
        let mut created = false;
        let db = self.instance.get_or_init(|| {
            created = true;
            Database { connection }
        });
        if !created {
            debug!("database already connected, ignoring new parameters");
        }
        db
    }

    pub fn get(&self) -> Option<&Database> {
        self.instance.get()
    }

    pub fn is_connected(&self) -> bool {
        self.instance.get().is_some()
    }

    /// Teardown: drops the instance so the next `connect` creates a new one.
    pub fn reset(&mut self) -> Option<Database> {
        self.instance.take()
    }
}

// DB params: Connection(host='localhost', port=3306, password='123')
// DB params: Connection(host='localhost', port=3306, password='123')
// true
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let registry = DatabaseRegistry::new();
    let db1 = registry.connect(Connection::new("localhost", 3306, "123"));
    let db2 = registry.connect(Connection::new("localhost", 22156, "root"));

    writeln!(out, "{}\n{}", db1, db2)?;
    writeln!(out, "{}", std::ptr::eq(db1, db2))?;
    Ok(())
}
