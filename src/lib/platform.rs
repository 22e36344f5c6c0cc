//! Multiprocessor platform.

use sqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

use Result;

/// A multiprocessor platform.
#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    /// The processing elements.
    pub elements: Vec<Element>,
}

/// A processing element.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// The identifier.
    pub id: usize,
    /// The power consumption per task kind.
    pub power: Vec<f64>,
}

impl Platform {
    /// Create a platform.
    #[inline]
    pub fn new(elements: Vec<Element>) -> Platform {
        Platform { elements: elements }
    }

    /// Read a platform from a database.
    ///
    /// The database is expected to contain a table called `power` with three
    /// columns: `element_id`, `kind`, and `value`, giving the power consumed
    /// by a processing element when running a task of a particular kind.
    pub fn collect<T: AsRef<Path>>(path: T) -> Result<Platform> {
        info!(target: "Platform", "Reading the power table from {:?}...", path.as_ref());
        let backend = ok!(Connection::open(path));
        let platform = try!(Platform::read(&backend));
        info!(target: "Platform", "Found {} processing elements.", platform.elements.len());
        Ok(platform)
    }

    fn read(backend: &Connection) -> Result<Platform> {
        let mut data = try!(read_power(backend));
        let mut ids = data.keys().map(|&id| id).collect::<Vec<_>>();
        ids.sort();
        let mut elements = vec![];
        for id in ids {
            if id as usize != elements.len() {
                raise!("found a gap in the power table");
            }
            let power = data.remove(&id).unwrap();
            match elements.last() {
                Some(&Element { power: ref previous, .. }) if previous.len() != power.len() => {
                    raise!("found an inconsistent power table");
                },
                _ => {},
            }
            elements.push(Element::new(id as usize, power));
        }
        Ok(Platform::new(elements))
    }
}

impl Element {
    /// Create a processing element.
    #[inline]
    pub fn new(id: usize, power: Vec<f64>) -> Element {
        Element { id: id, power: power }
    }
}

fn read_power(backend: &Connection) -> Result<HashMap<i64, Vec<f64>>> {
    use sql::prelude::*;
    use sqlite::State;

    let mut data = HashMap::new();
    let statement = select_from("power").columns(&["element_id", "kind", "value"])
                                        .order_by(column("kind").ascend());
    let mut statement = ok!(backend.prepare(ok!(statement.compile())));
    while let State::Row = ok!(statement.next()) {
        let id = ok!(statement.read::<i64>(0));
        let kind = ok!(statement.read::<i64>(1));
        let value = ok!(statement.read::<f64>(2));
        let power = data.entry(id).or_insert_with(|| vec![]);
        if kind as usize != power.len() {
            raise!("found a gap in the power table");
        }
        power.push(value);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use assert;
    use sqlite::Connection;

    use platform::Platform;

    #[test]
    fn read() {
        let platform = Platform::read(&open()).unwrap();

        assert_eq!(platform.elements.len(), 2);
        for (i, element) in platform.elements.iter().enumerate() {
            assert_eq!(element.id, i);
        }
        assert::close(&platform.elements[0].power[..], &[5.0, 6.0][..], 1e-14);
        assert::close(&platform.elements[1].power[..], &[7.0, 8.0][..], 1e-14);
    }

    #[test]
    fn read_gap() {
        let backend = Connection::open(":memory:").unwrap();
        backend.execute("
            CREATE TABLE power (element_id INTEGER, kind INTEGER, value REAL);
            INSERT INTO power VALUES (0, 0, 5.0);
            INSERT INTO power VALUES (2, 0, 7.0);
        ").unwrap();

        assert!(Platform::read(&backend).is_err());
    }

    fn open() -> Connection {
        let backend = Connection::open(":memory:").unwrap();
        backend.execute("
            CREATE TABLE power (element_id INTEGER, kind INTEGER, value REAL);
            INSERT INTO power VALUES (0, 0, 5.0);
            INSERT INTO power VALUES (0, 1, 6.0);
            INSERT INTO power VALUES (1, 0, 7.0);
            INSERT INTO power VALUES (1, 1, 8.0);
        ").unwrap();
        backend
    }
}
