//! Interactive command loop.
//!
//! The dispatcher owns the terminal protocol: it prompts for the source
//! voltage, reads single-character commands, prompts for their follow-up
//! values, and recovers every domain error into a printed message. Generic
//! over the reader and writer so whole sessions can be scripted in tests.

use crate::circuit::Circuit;
use crate::command::Command;
use crate::error::Result;
use crate::output;
use std::io::{BufRead, Write};

const COMMAND_PROMPT: &str = "Enter a command (I, R, C, V, P, Q): ";

/// The command dispatcher, bound to one input and one output stream.
pub struct Repl<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run a full session: banner, voltage prompt, command loop, shutdown
    /// report.
    ///
    /// `preset_voltage` skips the startup prompt when set. End-of-input on
    /// the reader behaves like `Q`, so remaining resistors are still
    /// reported and released. Only terminal I/O failures propagate; every
    /// domain error becomes a printed message and the loop continues.
    pub fn run(&mut self, preset_voltage: Option<i64>) -> Result<()> {
        writeln!(self.output, "Welcome to our circuit simulator")?;

        let voltage = match preset_voltage {
            Some(v) => v,
            None => match self.read_i64("What is the source of the voltage?\n")? {
                Some(v) => v,
                None => return Ok(()),
            },
        };
        tracing::debug!(voltage, "session started");
        let mut circuit = Circuit::new(voltage);

        loop {
            let line = match self.read_line(COMMAND_PROMPT)? {
                Some(line) => line,
                None => break,
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let Some(cmd) = Command::parse(trimmed) else {
                writeln!(
                    self.output,
                    "Unknown command {:?}; expected one of I, R, C, V, P, Q",
                    trimmed
                )?;
                continue;
            };
            tracing::debug!(?cmd, "dispatching command");
            match cmd {
                Command::Insert => self.handle_insert(&mut circuit)?,
                Command::Remove => self.handle_remove(&mut circuit)?,
                Command::Current => self.handle_current(&circuit)?,
                Command::Voltage => self.handle_voltage(&circuit)?,
                Command::Print => self.handle_print(&circuit)?,
                Command::Quit => break,
            }
        }

        self.handle_quit(&mut circuit)
    }

    fn handle_insert(&mut self, circuit: &mut Circuit) -> Result<()> {
        let resistance = loop {
            match self.read_i64("What's the value of the resistor: ")? {
                None => return Ok(()),
                Some(v) if v <= 0 => {
                    writeln!(self.output, "Resistance must be a positive integer.")?;
                }
                Some(v) => break v,
            }
        };
        let Some(line) = self.read_line("What's the label of the resistor: ")? else {
            return Ok(());
        };
        let label = line.trim();
        match circuit.registry_mut().insert(label, resistance) {
            Ok(()) => tracing::debug!(label, resistance, "inserted resistor"),
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn handle_remove(&mut self, circuit: &mut Circuit) -> Result<()> {
        let prompt = "What's the label of the resistor you want to remove: ";
        let Some(line) = self.read_line(prompt)? else {
            return Ok(());
        };
        match circuit.registry_mut().remove(line.trim()) {
            Ok(entry) => tracing::debug!(label = %entry.label, "removed resistor"),
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn handle_current(&mut self, circuit: &Circuit) -> Result<()> {
        match circuit.current() {
            Ok(amps) => output::write_current(&mut self.output, amps)?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn handle_voltage(&mut self, circuit: &Circuit) -> Result<()> {
        let prompt = "What's the label of the resistor you want to find the voltage across: ";
        let Some(line) = self.read_line(prompt)? else {
            return Ok(());
        };
        match circuit.voltage_across(line.trim()) {
            Ok(volts) => output::write_voltage(&mut self.output, volts)?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn handle_print(&mut self, circuit: &Circuit) -> Result<()> {
        for entry in circuit.registry().iter() {
            output::write_resistor(&mut self.output, entry)?;
        }
        Ok(())
    }

    /// Shutdown report: every remaining resistor is printed ascending and
    /// released.
    fn handle_quit(&mut self, circuit: &mut Circuit) -> Result<()> {
        writeln!(self.output, "Removing all resistors in the circuit ...")?;
        for entry in circuit.registry_mut().clear() {
            output::write_resistor(&mut self.output, &entry)?;
        }
        Ok(())
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt for an integer, re-prompting until one parses. `None` at end
    /// of input.
    fn read_i64(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    writeln!(self.output, "{:?} is not a valid integer.", line.trim())?;
                }
            }
        }
    }
}
