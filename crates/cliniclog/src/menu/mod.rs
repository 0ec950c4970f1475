//! Interactive front-desk session.
//!
//! A [`Session`] drives a [`RecordStore`] from a line-oriented text menu. It
//! owns its input and output handles, so the same loop serves a terminal and
//! an in-memory buffer.

mod option;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::ClinicConfig;
use crate::error::{Error, Result};
use crate::record::{Field, VisitRecord};
use crate::report;
use crate::store::RecordStore;

pub use option::{MenuOption, UnknownOption};

/// Printed once the loop ends.
pub const TERMINATED: &str = "Student Clinical Record System has been Terminated.";

const CREATED: &str = "Student Record Successfully Created!";
const DELETED: &str = "Student Record Successfully Deleted!";
const UPDATED: &str = " Clinical Student Record Successfully Updated!";
const DELETE_MISSING: &str = "SR-Code does not Exist!";
const UPDATE_MISSING: &str = "SR-Code Does not Exist!";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A menu session over a record store.
#[derive(Debug)]
pub struct Session<R, W> {
    store: RecordStore,
    clinic: ClinicConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session.
    pub fn new(store: RecordStore, clinic: ClinicConfig, input: R, output: W) -> Self {
        Self {
            store,
            clinic,
            input,
            output,
        }
    }

    /// Tear the session down, returning the store and the output handle.
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until Exit is chosen or input runs out.
    ///
    /// Missing records, a full table and rejected field values are reported
    /// to the clerk and do not end the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "Session started with {} of {} slots in use",
            self.store.len(),
            self.store.capacity()
        );
        self.print_banner()?;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Select Option >> ")? else {
                debug!("Input closed at menu prompt");
                break;
            };

            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(UnknownOption(input)) => {
                    debug!("Ignoring menu input {:?}", input);
                    continue;
                }
            };

            if self.dispatch(option)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "{TERMINATED}")?;
        self.output.flush()?;
        info!("Session ended with {} records", self.store.len());
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Flow> {
        debug!("Selected {:?}", option);
        match option {
            MenuOption::Create => self.create(),
            MenuOption::Search => self.search(),
            MenuOption::List => self.list(),
            MenuOption::Delete => self.delete(),
            MenuOption::Update => self.update(),
            MenuOption::Exit => Ok(Flow::Exit),
        }
    }

    fn create(&mut self) -> Result<Flow> {
        if self.store.is_full() {
            let capacity = self.store.capacity();
            warn!("Create refused: table is full");
            writeln!(
                self.output,
                "Record table is full (capacity {capacity}). Delete a record first."
            )?;
            return Ok(Flow::Continue);
        }

        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };

        match self.store.create(record) {
            Ok(_) => writeln!(self.output, "{CREATED}")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(code) = self.prompt("Search by SR-Code >> ")? else {
            return Ok(Flow::Exit);
        };

        let found = self.store.search(&code);
        debug!("Search for {} matched {} records", code, found.len());
        let table = report::table(report::SEARCH_TITLE, &found);
        self.output.write_all(table.as_bytes())?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        let table = report::table(report::LIST_TITLE, &self.store.list());
        self.output.write_all(table.as_bytes())?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(code) = self.prompt("Delete by SR-Code >> ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.delete(&code) {
            Ok(_) => writeln!(self.output, "{DELETED}")?,
            Err(err) if err.is_not_found() => {
                writeln!(self.output, "{DELETE_MISSING}")?;
                writeln!(self.output, "{}", report::rule('='))?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(code) = self.prompt("Search by SR-Code >> ")? else {
            return Ok(Flow::Exit);
        };

        if !self.store.contains(&code) {
            writeln!(self.output, "{UPDATE_MISSING}")?;
            return Ok(Flow::Continue);
        }

        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };

        match self.store.update(&code, record) {
            Ok(_) => {
                writeln!(self.output, "{UPDATED}")?;
                writeln!(self.output, "{}", report::rule('='))?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    /// Print a recoverable store error for the clerk.
    fn report(&mut self, err: &Error) -> Result<()> {
        if err.is_validation() {
            warn!("Rejected entry: {}", err);
            writeln!(self.output, "Invalid entry: {err}")?;
        } else {
            writeln!(self.output, "{err}")?;
        }
        Ok(())
    }

    /// Prompt for all seven fields. `None` means input ran out part-way.
    fn read_record(&mut self) -> Result<Option<VisitRecord>> {
        let mut values: [String; 7] = Default::default();
        for (field, value) in Field::ALL.into_iter().zip(values.iter_mut()) {
            match self.prompt(&format!("{}: ", field.label()))? {
                Some(line) => *value = line,
                None => return Ok(None),
            }
        }
        Ok(Some(VisitRecord::from_values(values)))
    }

    /// Write `text` and read one line, without its line ending.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD instead of ending the session
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n{} ", self.clinic.name, self.clinic.campus)?;
        writeln!(self.output, "{}", report::rule(':'))?;
        writeln!(self.output, "Menu:")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        for option in MenuOption::ALL {
            writeln!(self.output, "{option}")?;
        }
        writeln!(self.output, "{}", report::rule(':'))?;
        Ok(())
    }
}
