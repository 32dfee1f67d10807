//! Interactive calculator loop.
//!
//! One operation per iteration: read an operator token and two
//! operands, compute, report the value or a classified error, then ask
//! whether to continue. Failed operations are recorded to the error
//! sink and never abort the loop.

use crate::errlog::{ErrorRecord, ErrorSink};
use crate::{calculate, parse_operand, parse_operation, Operation, Result, Value};
use std::io::{BufRead, Write};

/// Response that keeps the loop running at the continuation prompt
const AFFIRMATIVE: &str = "yes";

/// Interactive calculator session over line-oriented streams.
///
/// Generic over its reader and writer so sessions can run against
/// in-memory buffers in tests; the sink is passed in explicitly rather
/// than reached through global state.
pub struct Repl<'a, R, W> {
    reader: R,
    writer: W,
    sink: &'a mut dyn ErrorSink,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(reader: R, writer: W, sink: &'a mut dyn ErrorSink) -> Self {
        Self {
            reader,
            writer,
            sink,
        }
    }

    /// Run the calculator loop until the user declines to continue.
    ///
    /// Every operation-level failure is classified, reported, recorded
    /// and survived; only hard failures on the session's own streams
    /// escape.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.writer, "Welcome to the math operations calculator!")?;

        loop {
            match self.perform_operation() {
                Ok(value) => writeln!(self.writer, "Result: {}", value)?,
                Err(err) => {
                    writeln!(self.writer, "Error: {}", err.user_message())?;
                    tracing::debug!("Operation failed: {}", err);
                    self.sink.record(&ErrorRecord::new(&err));
                }
            }

            write!(self.writer, "\nPerform another operation? (yes/no): ")?;
            self.writer.flush()?;
            let response = self.read_line()?;
            if !response.eq_ignore_ascii_case(AFFIRMATIVE) {
                break;
            }
        }

        writeln!(self.writer, "Program finished.")?;
        Ok(())
    }

    /// One operation cycle: operator, two operands, compute
    fn perform_operation(&mut self) -> Result<Value> {
        let op = self.read_operation()?;
        let lhs = self.read_operand("Enter the first number: ")?;
        let rhs = self.read_operand("Enter the second number: ")?;
        calculate(op, lhs, rhs)
    }

    fn read_operation(&mut self) -> Result<Operation> {
        writeln!(self.writer, "\nSelect an operation:")?;
        writeln!(self.writer, "1. Addition (+)")?;
        writeln!(self.writer, "2. Subtraction (-)")?;
        writeln!(self.writer, "3. Multiplication (*)")?;
        writeln!(self.writer, "4. Division (/)")?;
        write!(self.writer, "Enter the operation symbol: ")?;
        self.writer.flush()?;

        let token = self.read_line()?;
        parse_operation(&token)
    }

    fn read_operand(&mut self, prompt: &str) -> Result<f64> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let text = self.read_line()?;
        parse_operand(&text)
    }

    /// Read one trimmed line.
    ///
    /// End-of-input reads as an empty line, so a closed stdin drains
    /// through the normal validation path and then stops at the
    /// continuation prompt instead of spinning.
    fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
