/*!

  Net identifiers and the allocator that hands them out.

*/

use std::collections::HashMap;

/// Name of the constant logical 0 net
pub const CONST0_NAME: &str = "1'b0";
/// Name of the constant logical 1 net
pub const CONST1_NAME: &str = "1'b1";
/// Port name for an open (don't-care) connection
pub const DONT_CARE_NAME: &str = "x";

/// A dense integer id assigned to a net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct NetId(usize);

impl NetId {
    /// The id of the constant `1'b0` net
    pub const CONST0: NetId = NetId(0);
    /// The id of the constant `1'b1` net
    pub const CONST1: NetId = NetId(1);

    /// Returns the id as an integer
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved port connection: either a net or the open symbol `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub enum Operand {
    /// A connection to a net with an id
    Net(NetId),
    /// No connection
    DontCare,
}

impl Operand {
    /// Returns the net id, if the operand is connected
    pub fn net_id(&self) -> Option<NetId> {
        match self {
            Operand::Net(id) => Some(*id),
            Operand::DontCare => None,
        }
    }
}

impl From<Option<NetId>> for Operand {
    fn from(id: Option<NetId>) -> Self {
        id.map_or(Operand::DontCare, Operand::Net)
    }
}

impl From<NetId> for Operand {
    fn from(id: NetId) -> Self {
        Operand::Net(id)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Net(id) => write!(f, "{id}"),
            Operand::DontCare => write!(f, "{DONT_CARE_NAME}"),
        }
    }
}

/// Maps net names to dense ids in first-seen order.
///
/// The constants `1'b0` and `1'b1` always hold ids 0 and 1. Every other net
/// gets the next free id the first time it is mentioned, and keeps it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
pub struct NetIdMap {
    /// Name to id lookup
    #[cfg_attr(feature = "serde", serde(skip))]
    ids: HashMap<String, NetId>,
    /// Names indexed by id
    names: Vec<String>,
}

impl Default for NetIdMap {
    fn default() -> Self {
        Self::new()
    }
}

impl NetIdMap {
    /// Creates a map holding only the two constant nets
    pub fn new() -> Self {
        let mut map = Self {
            ids: HashMap::new(),
            names: Vec::new(),
        };
        map.insert(CONST0_NAME);
        map.insert(CONST1_NAME);
        map
    }

    fn insert(&mut self, name: &str) -> NetId {
        let id = NetId(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Returns the id of `name`, allocating one if the net is new.
    /// Returns `None` for the don't-care symbol `x`, which is never stored.
    pub fn get_net_id(&mut self, name: &str) -> Option<NetId> {
        if name == DONT_CARE_NAME {
            return None;
        }
        match self.ids.get(name) {
            Some(id) => Some(*id),
            None => Some(self.insert(name)),
        }
    }

    /// Resolves `name` to an [Operand], allocating as [NetIdMap::get_net_id] does
    pub fn operand(&mut self, name: &str) -> Operand {
        self.get_net_id(name).into()
    }

    /// Looks up `name` without allocating
    pub fn get(&self, name: &str) -> Option<NetId> {
        self.ids.get(name).copied()
    }

    /// Returns the name that was assigned `id`
    pub fn name_of(&self, id: NetId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Returns the number of nets, constants included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: the constants are present from the start
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns an iterator over `(name, id)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, NetId)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), NetId(i)))
    }
}

/// Expands a bus declaration into one bit-indexed name per bit, lowest index first.
/// The endpoints may be given in either order.
pub fn expand_bus(base: &str, msb: usize, lsb: usize) -> Vec<String> {
    let (lo, hi) = if msb < lsb { (msb, lsb) } else { (lsb, msb) };
    (lo..=hi).map(|i| format!("{base}[{i}]")).collect()
}

#[test]
fn test_constants_are_seeded() {
    let map = NetIdMap::new();
    assert_eq!(map.get(CONST0_NAME), Some(NetId::CONST0));
    assert_eq!(map.get(CONST1_NAME), Some(NetId::CONST1));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_dont_care_is_not_stored() {
    let mut map = NetIdMap::new();
    assert_eq!(map.get_net_id("x"), None);
    assert_eq!(map.get("x"), None);
    assert_eq!(map.len(), 2);
    assert_eq!(map.operand("x").to_string(), "x");
}

#[test]
fn test_expand_bus_normalizes_endpoints() {
    let expected = vec!["foo[0]", "foo[1]", "foo[2]", "foo[3]"];
    assert_eq!(expand_bus("foo", 3, 0), expected);
    assert_eq!(expand_bus("foo", 0, 3), expected);
    assert_eq!(expand_bus("bar", 5, 5), vec!["bar[5]"]);
}
