//! Application workload.

use sqlite::Connection;
use std::path::Path;

use Result;

/// An application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    /// The tasks.
    pub tasks: Vec<Task>,
}

/// A task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Task {
    /// The identifier.
    pub id: usize,
    /// The kind.
    pub kind: usize,
}

impl Application {
    /// Create an application.
    #[inline]
    pub fn new(tasks: Vec<Task>) -> Application {
        Application { tasks: tasks }
    }

    /// Read an application from a database.
    ///
    /// The database is expected to contain a table called `tasks` with two
    /// columns: `task_id` and `kind`, giving the kind of each task.
    pub fn collect<T: AsRef<Path>>(path: T) -> Result<Application> {
        info!(target: "Application", "Reading the tasks from {:?}...", path.as_ref());
        let backend = ok!(Connection::open(path));
        let application = try!(Application::read(&backend));
        info!(target: "Application", "Found {} tasks.", application.len());
        Ok(application)
    }

    /// Return the number of tasks.
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    fn read(backend: &Connection) -> Result<Application> {
        use sql::prelude::*;
        use sqlite::State;

        let mut tasks = vec![];
        let statement = select_from("tasks").columns(&["task_id", "kind"])
                                            .order_by(column("task_id").ascend());
        let mut statement = ok!(backend.prepare(ok!(statement.compile())));
        while let State::Row = ok!(statement.next()) {
            let id = ok!(statement.read::<i64>(0));
            let kind = ok!(statement.read::<i64>(1));
            if id as usize != tasks.len() {
                raise!("found a gap in the tasks");
            }
            tasks.push(Task::new(id as usize, kind as usize));
        }
        Ok(Application::new(tasks))
    }
}

impl Task {
    /// Create a task.
    #[inline]
    pub fn new(id: usize, kind: usize) -> Task {
        Task { id: id, kind: kind }
    }
}

#[cfg(test)]
mod tests {
    use sqlite::Connection;

    use application::{Application, Task};

    #[test]
    fn read() {
        let backend = Connection::open(":memory:").unwrap();
        backend.execute("
            CREATE TABLE tasks (task_id INTEGER, kind INTEGER);
            INSERT INTO tasks VALUES (1, 1);
            INSERT INTO tasks VALUES (0, 0);
            INSERT INTO tasks VALUES (2, 0);
        ").unwrap();

        let application = Application::read(&backend).unwrap();

        assert_eq!(application.len(), 3);
        assert_eq!(application.tasks, vec![Task::new(0, 0), Task::new(1, 1), Task::new(2, 0)]);
    }

    #[test]
    fn read_gap() {
        let backend = Connection::open(":memory:").unwrap();
        backend.execute("
            CREATE TABLE tasks (task_id INTEGER, kind INTEGER);
            INSERT INTO tasks VALUES (0, 0);
            INSERT INTO tasks VALUES (2, 1);
        ").unwrap();

        assert!(Application::read(&backend).is_err());
    }
}
