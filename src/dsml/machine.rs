//! Compiled machine representation
//!
//! Lowers a validated model into a dense, index-addressed runtime machine:
//! every state, input, and output gets a stable index in declaration
//! order, and each state owns a transition row with one cell per declared
//! input. Stepping is an O(1) row lookup, never a name search.
//!
//! The machine owns copies of all symbol strings and is immutable once
//! built; the model it was compiled from can be dropped.

use std::fmt;

use serde::Serialize;

use crate::dsml::error::MachineError;
use crate::dsml::model::Model;

/// One transition-row cell: the next state's index and the index of the
/// emitted output, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MachineCell {
    pub next_state: usize,
    pub output: Option<usize>,
}

/// A compiled state: its symbol, final flag, and a transition row indexed
/// by input index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineState {
    pub symbol: String,
    pub is_final: bool,
    pub row: Vec<MachineCell>,
}

/// The compiled, immutable machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Machine {
    inputs: Vec<String>,
    outputs: Vec<String>,
    states: Vec<MachineState>,
    entry: usize,
}

impl Machine {
    /// Compile a validated model into a machine.
    ///
    /// The model must have passed [`crate::dsml::validation::validate`];
    /// violated preconditions surface as a [`MachineError`], never as a
    /// silently incomplete machine.
    pub fn compile(model: &Model) -> Result<Machine, MachineError> {
        // Re-check the validator's guarantees rather than assuming them.
        if model.states().is_empty()
            || model.inputs().is_empty()
            || !model.has_entry()
            || model.transitions().len() != model.states().len() * model.inputs().len()
        {
            return Err(MachineError::UnvalidatedModel);
        }

        let inputs: Vec<String> = model
            .inputs()
            .iter()
            .map(|io| io.symbol.clone())
            .collect();
        let outputs: Vec<String> = model
            .outputs()
            .iter()
            .map(|io| io.symbol.clone())
            .collect();

        let mut entry = None;
        let mut states = Vec::with_capacity(model.states().len());

        for (state_index, state) in model.states().iter().enumerate() {
            if state.is_entry {
                entry = Some(state_index);
            }

            let mut row = Vec::with_capacity(inputs.len());
            for input_index in 0..inputs.len() {
                let transition =
                    model
                        .find_transition(state_index, input_index)
                        .ok_or_else(|| MachineError::MissingTransition {
                            state: state.symbol.clone(),
                            input: inputs[input_index].clone(),
                        })?;
                row.push(MachineCell {
                    next_state: transition.to_state,
                    output: transition.output,
                });
            }

            states.push(MachineState {
                symbol: state.symbol.clone(),
                is_final: state.is_final,
                row,
            });
        }

        let entry = entry.ok_or(MachineError::UnvalidatedModel)?;

        Ok(Machine {
            inputs,
            outputs,
            states,
            entry,
        })
    }

    /// Index of the designated entry state.
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// The designated entry state.
    pub fn entry_state(&self) -> &MachineState {
        &self.states[self.entry]
    }

    /// All compiled states, in declaration order.
    pub fn states(&self) -> &[MachineState] {
        &self.states
    }

    /// The state at `index`. Indices come from the machine itself
    /// (entry, row cells); an out-of-range index is a caller defect.
    pub fn state(&self, index: usize) -> &MachineState {
        &self.states[index]
    }

    /// Input symbols, in declaration order; positions are input indices.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Output symbols, in declaration order; positions are output indices.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Resolve an input symbol to its index.
    pub fn input_index(&self, symbol: &str) -> Option<usize> {
        self.inputs.iter().position(|input| input == symbol)
    }

    /// The row cell for (state, input): next state and optional output.
    /// O(1) by construction.
    pub fn step(&self, state: usize, input: usize) -> MachineCell {
        self.states[state].row[input]
    }
}

impl fmt::Display for Machine {
    /// Human-readable rendering: every state with its entry/final markers
    /// and its full transition row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "machine: {} states, {} inputs, {} outputs",
            self.states.len(),
            self.inputs.len(),
            self.outputs.len()
        )?;

        for (index, state) in self.states.iter().enumerate() {
            write!(f, "state {}: {}", index, state.symbol)?;
            if index == self.entry {
                write!(f, " entry")?;
            }
            if state.is_final {
                write!(f, " final")?;
            }
            writeln!(f)?;

            for (input_index, cell) in state.row.iter().enumerate() {
                let output = match cell.output {
                    Some(output_index) => self.outputs[output_index].as_str(),
                    None => "-",
                };
                writeln!(
                    f,
                    "  {} -> {} / {}",
                    self.inputs[input_index], self.states[cell.next_state].symbol, output
                )?;
            }
        }

        Ok(())
    }
}
