/*!

  Gate types and the expressions they render to in the SCOAP format.

*/

use crate::nets::Operand;

/// A primitive boolean gate understood by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub enum GateType {
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `xor`
    Xor,
    /// `xnor`
    Xnor,
    /// `nor`
    Nor,
    /// `nand`
    Nand,
    /// `buf`
    Buf,
}

impl GateType {
    /// All primitive gate types
    pub const ALL: [GateType; 8] = [
        GateType::And,
        GateType::Or,
        GateType::Not,
        GateType::Xor,
        GateType::Xnor,
        GateType::Nor,
        GateType::Nand,
        GateType::Buf,
    ];

    /// The keyword used for this gate in a Verilog netlist
    pub fn verilog_name(&self) -> &'static str {
        match self {
            GateType::And => "and",
            GateType::Or => "or",
            GateType::Not => "not",
            GateType::Xor => "xor",
            GateType::Xnor => "xnor",
            GateType::Nor => "nor",
            GateType::Nand => "nand",
            GateType::Buf => "buf",
        }
    }

    /// The token used for this gate in the SCOAP format
    pub fn scoap_name(&self) -> &'static str {
        match self {
            GateType::Buf => "buff",
            other => other.verilog_name(),
        }
    }
}

impl std::str::FromStr for GateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateType::ALL
            .into_iter()
            .find(|g| g.verilog_name() == s)
            .ok_or_else(|| format!("Unknown gate type '{s}'"))
    }
}

/// The kind of cell a gate expression describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub enum GateKind {
    /// A primitive gate
    Primitive(GateType),
    /// A D flip-flop with clock, active-low reset and active-low set
    Dffcr,
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateKind::Primitive(g) => write!(f, "{}", g.scoap_name()),
            GateKind::Dffcr => write!(f, "dffcr"),
        }
    }
}

/// A single SCOAP gate line: `<out>=<kind>(<in>,...)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct GateExpr {
    /// The driven net
    pub output: Operand,
    /// The cell kind
    pub kind: GateKind,
    /// Input operands, order matters
    pub inputs: Vec<Operand>,
}

impl std::fmt::Display for GateExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}(", self.output, self.kind)?;
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{input}")?;
        }
        write!(f, ")")
    }
}

/// A translated gate, kept in netlist order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct GateRecord {
    /// Name of the net the gate drives
    pub driven_net: String,
    /// The rendered gate
    pub expr: GateExpr,
}

/// Where an instance's output goes, for the gate mapping report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct GateOutput {
    /// Name of the output net
    pub net: String,
    /// The output net's operand
    pub operand: Operand,
}

#[test]
fn test_buf_renders_as_buff() {
    use crate::nets::NetId;
    let mut map = crate::nets::NetIdMap::new();
    let a = map.operand("a");
    let y = map.operand("y");
    let expr = GateExpr {
        output: y,
        kind: GateKind::Primitive("buf".parse().unwrap()),
        inputs: vec![a],
    };
    assert_eq!(expr.to_string(), "3=buff(2)");
    assert_eq!(y.net_id(), Some(map.get("y").unwrap()));
    assert_ne!(y.net_id(), Some(NetId::CONST1));
}

#[test]
fn test_unknown_gate_type() {
    assert!("buff".parse::<GateType>().is_err());
    assert!("AND".parse::<GateType>().is_err());
    assert_eq!("xnor".parse::<GateType>(), Ok(GateType::Xnor));
}
