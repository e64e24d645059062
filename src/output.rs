//! User-facing result formatting.
//!
//! Format:
//! ```text
//! R1	10 Ohms
//! The current in the circuit is 4.000000A
//! Voltage across resistor is 40.000000V
//! ```

use crate::error::Result;
use crate::registry::ResistorEntry;
use std::io::Write;

/// Write one resistor as `<label>\t<resistance> Ohms`.
pub fn write_resistor<W: Write>(writer: &mut W, entry: &ResistorEntry) -> Result<()> {
    writeln!(writer, "{}\t{} Ohms", entry.label, entry.resistance)?;
    Ok(())
}

/// Write the circuit current with 6 decimal digits and an `A` suffix.
pub fn write_current<W: Write>(writer: &mut W, amps: f64) -> Result<()> {
    writeln!(writer, "The current in the circuit is {:.6}A", amps)?;
    Ok(())
}

/// Write a voltage drop with 6 decimal digits and a `V` suffix.
pub fn write_voltage<W: Write>(writer: &mut W, volts: f64) -> Result<()> {
    writeln!(writer, "Voltage across resistor is {:.6}V", volts)?;
    Ok(())
}
