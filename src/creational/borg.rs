// Pattern: Borg (monostate)
// Many handles, one state. Handles are distinct objects but every one of
// them reads and writes the same status cell.

use crate::config::CatalogConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

pub const NOT_CONNECTED: &str = "not connected";

/// The state every handle shares. Clone it to hand it to another handle.
#[derive(Debug, Clone, Default)]
pub struct SharedStatus(Rc<RefCell<String>>);

impl SharedStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

pub trait StatusHandle {
    fn shared(&self) -> &SharedStatus;

    fn status(&self) -> String {
        self.shared().0.borrow().clone()
    }

    fn set_status(&self, status: &str) {
        *self.shared().0.borrow_mut() = status.to_string();
    }
}

#[derive(Debug)]
pub struct SqlDatabase {
    shared: SharedStatus,
}

impl SqlDatabase {
    /// Joining the collective resets everyone to "not connected".
    pub fn new(shared: &SharedStatus) -> Self {
        let db = Self {
            shared: shared.clone(),
        };
        db.set_status(NOT_CONNECTED);
        db
    }
}

impl StatusHandle for SqlDatabase {
    fn shared(&self) -> &SharedStatus {
        &self.shared
    }
}

impl fmt::Display for SqlDatabase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.status())
    }
}

#[derive(Debug)]
pub struct PostgreSql {
    inner: SqlDatabase,
}

impl PostgreSql {
    pub fn new(shared: &SharedStatus) -> Self {
        Self {
            inner: SqlDatabase::new(shared),
        }
    }
}

impl StatusHandle for PostgreSql {
    fn shared(&self) -> &SharedStatus {
        self.inner.shared()
    }
}

impl fmt::Display for PostgreSql {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// db1: connected, db2: connected
// false
// db1: not connected, db2: not connected, db3: not connected
pub fn demo(_config: &CatalogConfig, out: &mut dyn Write) -> Result<()> {
    let shared = SharedStatus::new();
    let db1 = SqlDatabase::new(&shared);
    let db2 = SqlDatabase::new(&shared);

    db1.set_status("connecting");
    db2.set_status("connected");

    writeln!(out, "db1: {}, db2: {}", db1, db2)?;
    writeln!(out, "{}", std::ptr::eq(&db1, &db2))?;

    let db3 = PostgreSql::new(&shared);
    writeln!(out, "db1: {}, db2: {}, db3: {}", db1, db2, db3)?;
    Ok(())
}
