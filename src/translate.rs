/*!

  Builds the SCOAP view of a netlist in a single pass over its lines.

*/

use crate::{
    error::{Error, Result},
    gate::{GateExpr, GateKind, GateOutput, GateRecord},
    line::{DeclKind, Declaration, FlipFlopInstance, GateInstance, Line, classify},
    nets::{CONST1_NAME, NetId, NetIdMap, expand_bus},
};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// A declared primary input or output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct Port {
    /// Net name, bit-indexed for buses
    pub name: String,
    /// The net's id
    pub id: NetId,
}

/// Everything gathered from a netlist, ready to be emitted
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct Translation {
    nets: NetIdMap,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    gates: Vec<GateRecord>,
    gate_outputs: BTreeMap<String, GateOutput>,
}

impl Translation {
    /// Creates an empty translation with only the constant nets
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and translates the netlist at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Translates a netlist from `reader`. `path` is only used in error messages.
    /// `\n`, `\r\n` and a bare `\r` all end a line.
    pub fn from_reader(reader: impl BufRead, path: impl AsRef<Path>) -> Result<Self> {
        let mut translation = Self::new();
        let mut lineno = 0;
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io(path.as_ref(), e))?;
            for line in line.split('\r') {
                lineno += 1;
                translation.translate_line(lineno, line)?;
            }
        }
        log::info!(
            "Translated {} nets, {} inputs, {} outputs, {} gates",
            translation.nets.len(),
            translation.inputs.len(),
            translation.outputs.len(),
            translation.gates.len()
        );
        Ok(translation)
    }

    /// Translates one line. `lineno` is 1-based and only used for diagnostics.
    pub fn translate_line(&mut self, lineno: usize, line: &str) -> Result<()> {
        match classify(line) {
            Line::Blank | Line::Comment(_) => {}
            Line::Declaration(decl) => self.handle_declaration(lineno, &decl)?,
            Line::PrimitiveGate(gate) => self.handle_gate(&gate),
            Line::FlipFlop(ff) => {
                if !self.handle_flip_flop(&ff) {
                    log::debug!(
                        "line {lineno}: skipping flip-flop '{}' without Q, D and CK",
                        ff.name
                    );
                }
            }
            Line::Unrecognized(text) => {
                log::debug!("line {lineno}: skipping unrecognized statement '{text}'");
            }
        }
        Ok(())
    }

    /// Registers every net in `decl` and records inputs and outputs as ports
    pub fn handle_declaration(&mut self, lineno: usize, decl: &Declaration) -> Result<()> {
        let names: Vec<String> = match decl.range {
            Some((msb, lsb)) => decl
                .names
                .iter()
                .flat_map(|base| expand_bus(base, msb, lsb))
                .collect(),
            None => decl.names.iter().map(|n| n.to_string()).collect(),
        };

        for name in names {
            let id = self.nets.get_net_id(&name);
            let ports = match decl.kind {
                DeclKind::Input => &mut self.inputs,
                DeclKind::Output => &mut self.outputs,
                DeclKind::Wire => continue,
            };
            match id {
                Some(id) => ports.push(Port { name, id }),
                None => return Err(Error::UnmappedPort { line: lineno, name }),
            }
        }
        Ok(())
    }

    /// Records a primitive gate. The first port is the driven net.
    pub fn handle_gate(&mut self, gate: &GateInstance) {
        let Some((out_net, in_nets)) = gate.ports.split_first() else {
            return;
        };
        let output = self.nets.operand(out_net);
        let inputs = in_nets.iter().map(|n| self.nets.operand(n)).collect();
        self.record(
            gate.name,
            out_net,
            GateExpr {
                output,
                kind: GateKind::Primitive(gate.gate_type),
                inputs,
            },
        );
    }

    /// Records a flip-flop as a `dffcr` cell. Returns `false` and records
    /// nothing if `Q`, `D` or `CK` is not connected.
    pub fn handle_flip_flop(&mut self, ff: &FlipFlopInstance) -> bool {
        let (Some(q), Some(d), Some(ck)) = (
            ff.connection("Q"),
            ff.connection("D"),
            ff.connection("CK"),
        ) else {
            return false;
        };
        let rn = ff.connection("RN").unwrap_or(CONST1_NAME);
        let sn = ff.connection("SN").unwrap_or(CONST1_NAME);

        let output = self.nets.operand(q);
        let inputs = [d, ck, rn, sn]
            .into_iter()
            .map(|n| self.nets.operand(n))
            .collect();
        self.record(
            ff.name,
            q,
            GateExpr {
                output,
                kind: GateKind::Dffcr,
                inputs,
            },
        );
        true
    }

    fn record(&mut self, instance: &str, driven_net: &str, expr: GateExpr) {
        self.gate_outputs.insert(
            instance.to_string(),
            GateOutput {
                net: driven_net.to_string(),
                operand: expr.output,
            },
        );
        self.gates.push(GateRecord {
            driven_net: driven_net.to_string(),
            expr,
        });
    }

    /// Returns the net id map
    pub fn nets(&self) -> &NetIdMap {
        &self.nets
    }

    /// Returns the declared inputs in declaration order
    pub fn inputs(&self) -> &[Port] {
        &self.inputs
    }

    /// Returns the declared outputs in declaration order
    pub fn outputs(&self) -> &[Port] {
        &self.outputs
    }

    /// Returns the gate records in netlist order
    pub fn gates(&self) -> &[GateRecord] {
        &self.gates
    }

    /// Returns the instance-to-output map, sorted by instance name
    pub fn gate_outputs(&self) -> impl Iterator<Item = (&str, &GateOutput)> {
        self.gate_outputs.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[cfg(feature = "serde")]
    /// Serializes the translation to a writer as pretty JSON.
    pub fn serialize(
        &self,
        writer: impl std::io::Write,
    ) -> std::result::Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}

impl std::str::FromStr for Translation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes(), "<string>")
    }
}

#[test]
fn test_duplicate_instance_name_last_wins() {
    let t: Translation = "and g1(a, b, c);\nor g1(d, b, c);".parse().unwrap();
    assert_eq!(t.gates().len(), 2);
    let outputs: Vec<_> = t.gate_outputs().collect();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].1.net, "d");
}

#[test]
fn test_wire_dont_care_is_ignored() {
    let t: Translation = "wire x;".parse().unwrap();
    assert_eq!(t.nets().len(), 2);
    assert!(t.inputs().is_empty());
}

#[test]
fn test_bare_carriage_return_ends_a_line() {
    let t: Translation = "input a;\routput b;\rand g1(b, a, a);\r".parse().unwrap();
    let names: Vec<&str> = t.nets().iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["1'b0", "1'b1", "a", "b"]);
    assert_eq!(t.inputs().len(), 1);
    assert_eq!(t.outputs().len(), 1);
    assert_eq!(t.gates()[0].expr.to_string(), "3=and(2,2)");
}

#[test]
fn test_mixed_line_endings_keep_line_numbers() {
    let err = "input a;\r\nwire b;\routput x;\n"
        .parse::<Translation>()
        .unwrap_err();
    assert!(matches!(err, Error::UnmappedPort { line: 3, .. }));
}
