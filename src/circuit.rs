//! Series circuit state and Ohm's-law computations.
//!
//! A `Circuit` couples the source voltage with the resistor registry. In a
//! series circuit every resistor carries the same current, so
//! current = V / R_total and the drop across one resistor is current * R.

use crate::error::{OhmlineError, Result};
use crate::registry::Registry;

/// The simulated series circuit: one voltage source plus the registry.
#[derive(Debug)]
pub struct Circuit {
    source_voltage: i64,
    registry: Registry,
}

impl Circuit {
    /// Create a circuit with the given source voltage and no resistors.
    pub fn new(source_voltage: i64) -> Self {
        Self {
            source_voltage,
            registry: Registry::new(),
        }
    }

    /// Source voltage in volts.
    pub fn source_voltage(&self) -> i64 {
        self.source_voltage
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Circuit current in amperes: source voltage / total resistance.
    ///
    /// Fails with `ZeroResistance` when the total resistance is zero (empty
    /// circuit included) rather than dividing into infinity.
    pub fn current(&self) -> Result<f64> {
        let total = self.registry.total_resistance();
        if total == 0 {
            return Err(OhmlineError::ZeroResistance);
        }
        Ok(self.source_voltage as f64 / total as f64)
    }

    /// Voltage drop in volts across the named resistor.
    ///
    /// Fails with `NotFound` before any computation when the label is absent.
    pub fn voltage_across(&self, label: &str) -> Result<f64> {
        let entry = self
            .registry
            .find(label)
            .ok_or_else(|| OhmlineError::NotFound(label.to_string()))?;
        Ok(self.current()? * entry.resistance as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_resistor_series_scenario() {
        // 120V across R1=10 and R2=20 in series: I = 120/30 = 4A,
        // V(R1) = 40V, V(R2) = 80V.
        let mut circuit = Circuit::new(120);
        circuit.registry_mut().insert("R1", 10).unwrap();
        circuit.registry_mut().insert("R2", 20).unwrap();

        assert_abs_diff_eq!(circuit.current().unwrap(), 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(circuit.voltage_across("R1").unwrap(), 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(circuit.voltage_across("R2").unwrap(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_current_of_empty_circuit_is_zero_resistance_error() {
        let circuit = Circuit::new(120);
        assert!(matches!(
            circuit.current(),
            Err(OhmlineError::ZeroResistance)
        ));
    }

    #[test]
    fn test_voltage_across_unknown_label_is_not_found() {
        let mut circuit = Circuit::new(120);
        circuit.registry_mut().insert("R1", 10).unwrap();
        let err = circuit.voltage_across("R9").unwrap_err();
        assert!(matches!(err, OhmlineError::NotFound(label) if label == "R9"));
    }

    #[test]
    fn test_voltage_lookup_checks_label_before_division() {
        // Unknown label on an empty circuit reports NotFound, not
        // ZeroResistance.
        let circuit = Circuit::new(120);
        assert!(matches!(
            circuit.voltage_across("R1"),
            Err(OhmlineError::NotFound(_))
        ));
    }
}
