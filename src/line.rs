/*!

  Classifies netlist lines into the statements the translator understands.

  Lines are tested in a fixed order: blank, comment, declaration, primitive
  gate, flip-flop. The first shape that fits wins; anything else is
  [Line::Unrecognized].

*/

use crate::gate::GateType;

/// Keyword that introduces a flip-flop instance
pub const DFF_KEYWORD: &str = "dff";

/// The kind of a net declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    /// `input`
    Input,
    /// `output`
    Output,
    /// `wire`
    Wire,
}

impl DeclKind {
    const ALL: [DeclKind; 3] = [DeclKind::Input, DeclKind::Output, DeclKind::Wire];

    /// The Verilog keyword for this declaration
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclKind::Input => "input",
            DeclKind::Output => "output",
            DeclKind::Wire => "wire",
        }
    }
}

/// `input [3:0] a, b;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Which kind of net is declared
    pub kind: DeclKind,
    /// The `[msb:lsb]` range as written, if any
    pub range: Option<(usize, usize)>,
    /// Declared base names, trimmed, empty entries dropped
    pub names: Vec<&'a str>,
}

/// `and g1(y, a, b);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateInstance<'a> {
    /// The primitive
    pub gate_type: GateType,
    /// Instance name
    pub name: &'a str,
    /// Positional connections, output first
    pub ports: Vec<&'a str>,
}

/// `dff r1(.Q(q), .D(d), .CK(clk));`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipFlopInstance<'a> {
    /// Instance name
    pub name: &'a str,
    /// Named connections `(port, net)` in the order written
    pub connections: Vec<(&'a str, &'a str)>,
}

impl<'a> FlipFlopInstance<'a> {
    /// Returns the net connected to `port`. The last connection wins if a port is repeated.
    pub fn connection(&self, port: &str) -> Option<&'a str> {
        self.connections
            .iter()
            .rev()
            .find(|(p, _)| *p == port)
            .map(|(_, net)| *net)
    }
}

/// A classified netlist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only
    Blank,
    /// A `//` comment
    Comment(&'a str),
    /// A net declaration
    Declaration(Declaration<'a>),
    /// A primitive gate instance
    PrimitiveGate(GateInstance<'a>),
    /// A flip-flop instance
    FlipFlop(FlipFlopInstance<'a>),
    /// Anything else
    Unrecognized(&'a str),
}

/// Classifies one line of a netlist. Surrounding whitespace is ignored.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(comment) = line.strip_prefix("//") {
        return Line::Comment(comment);
    }
    if let Some(decl) = parse_declaration(line) {
        return Line::Declaration(decl);
    }
    if let Some(gate) = parse_gate(line) {
        return Line::PrimitiveGate(gate);
    }
    if let Some(ff) = parse_flip_flop(line) {
        return Line::FlipFlop(ff);
    }
    Line::Unrecognized(line)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits off the leading run of word characters
fn split_word(s: &str) -> (&str, &str) {
    let end = s.find(|c| !is_word_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses a leading `[<digits>:<digits>]`, returning the endpoints and the rest
fn parse_range(s: &str) -> Option<((usize, usize), &str)> {
    let s = s.strip_prefix('[')?;
    let (body, rest) = s.split_once(']')?;
    let (msb, lsb) = body.split_once(':')?;
    let digits = |d: &str| {
        if !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()) {
            d.parse::<usize>().ok()
        } else {
            None
        }
    };
    Some(((digits(msb)?, digits(lsb)?), rest))
}

fn parse_declaration(line: &str) -> Option<Declaration<'_>> {
    let (kind, rest) = DeclKind::ALL
        .into_iter()
        .find_map(|k| line.strip_prefix(k.keyword()).map(|rest| (k, rest)))?;
    let rest = rest.trim_start();
    let (range, rest) = match parse_range(rest) {
        Some((range, rest)) => (Some(range), rest),
        None => (None, rest),
    };
    // Names run up to the last terminator
    let (names, _) = rest.rsplit_once(';')?;
    let names = names
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();
    Some(Declaration { kind, range, names })
}

/// Matches `<keyword><ws>+<name>(<body>);`, returning the keyword, name and body.
/// The body ends at the first `);`.
fn parse_instance(line: &str) -> Option<(&str, &str, &str)> {
    let ws = line.find(char::is_whitespace)?;
    let (keyword, rest) = line.split_at(ws);
    let (name, rest) = split_word(rest.trim_start());
    if name.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix('(')?;
    let (body, _) = rest.split_once(");")?;
    Some((keyword, name, body))
}

fn parse_gate(line: &str) -> Option<GateInstance<'_>> {
    let (keyword, name, body) = parse_instance(line)?;
    let gate_type = keyword.parse::<GateType>().ok()?;
    let ports = body.split(',').map(str::trim).collect();
    Some(GateInstance {
        gate_type,
        name,
        ports,
    })
}

/// Collects every `.<port>(<net>)` in `body`
fn named_connections(body: &str) -> Vec<(&str, &str)> {
    let mut connections = Vec::new();
    let mut rest = body;
    while let Some(dot) = rest.find('.') {
        let after = &rest[dot + 1..];
        match parse_named_connection(after) {
            Some((port, net, tail)) => {
                connections.push((port, net.trim()));
                rest = tail;
            }
            None => rest = after,
        }
    }
    connections
}

fn parse_named_connection(s: &str) -> Option<(&str, &str, &str)> {
    let (port, rest) = split_word(s);
    if port.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix('(')?;
    let (net, tail) = rest.split_once(')')?;
    if net.is_empty() {
        return None;
    }
    Some((port, net, tail))
}

fn parse_flip_flop(line: &str) -> Option<FlipFlopInstance<'_>> {
    if !line.starts_with(DFF_KEYWORD) {
        return None;
    }
    let (keyword, name, body) = parse_instance(line)?;
    if keyword != DFF_KEYWORD {
        return None;
    }
    Some(FlipFlopInstance {
        name,
        connections: named_connections(body),
    })
}

#[test]
fn test_declaration_keyword_is_a_prefix() {
    let Line::Declaration(decl) = classify("wire[1:0]a;") else {
        panic!("expected a declaration");
    };
    assert_eq!(decl.kind, DeclKind::Wire);
    assert_eq!(decl.range, Some((1, 0)));
    assert_eq!(decl.names, vec!["a"]);
}

#[test]
fn test_declaration_needs_terminator() {
    assert_eq!(classify("input a"), Line::Unrecognized("input a"));
}

#[test]
fn test_named_connections_skip_malformed() {
    let conns = named_connections(".Q(q), .(bad), .D( d ), .CK()");
    assert_eq!(conns, vec![("Q", "q"), ("D", "d")]);
}
