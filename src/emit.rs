/*!

  Writers for the SCOAP netlist and the two lookup tables.

*/

use crate::{
    error::{Error, Result},
    nets::{DONT_CARE_NAME, NetId},
    translate::Translation,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes the SCOAP tool input: the fixed constant inputs, then the declared
/// inputs and outputs, then one line per gate.
pub fn write_scoap_format(t: &Translation, mut w: impl Write) -> std::io::Result<()> {
    writeln!(w, "input({})", NetId::CONST0)?;
    writeln!(w, "input({})", NetId::CONST1)?;
    writeln!(w, "input({DONT_CARE_NAME})")?;

    for port in t.inputs() {
        writeln!(w, "input({})", port.id)?;
        writeln!(w, "#{}  input {}", port.name, port.id)?;
    }

    for port in t.outputs() {
        writeln!(w, "output({})", port.id)?;
        writeln!(w, "#{}  output {}", port.name, port.id)?;
    }

    for gate in t.gates() {
        writeln!(w, "{}", gate.expr)?;
    }
    w.flush()
}

/// Writes `<net> -> <id>` for every net, in ascending id order
pub fn write_net_mapping(t: &Translation, mut w: impl Write) -> std::io::Result<()> {
    for (name, id) in t.nets().iter() {
        writeln!(w, "{name} -> {id}")?;
    }
    w.flush()
}

/// Writes `<instance> -> <net> (ID: <id>)` for every gate, sorted by instance name
pub fn write_gate_mapping(t: &Translation, mut w: impl Write) -> std::io::Result<()> {
    for (instance, output) in t.gate_outputs() {
        writeln!(w, "{instance} -> {} (ID: {})", output.net, output.operand)?;
    }
    w.flush()
}

/// The three output paths for one design
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    /// The SCOAP netlist
    pub scoap_format: PathBuf,
    /// The net-to-id table
    pub net_mapping: PathBuf,
    /// The gate-to-output table
    pub gate_mapping: PathBuf,
}

impl OutputFiles {
    /// Names the outputs for `design` inside `dir`
    pub fn new(dir: impl AsRef<Path>, design: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            scoap_format: dir.join(format!("scoap_format{design}.txt")),
            net_mapping: dir.join(format!("net_mapping{design}.txt")),
            gate_mapping: dir.join(format!("gate_output_mapping{design}.txt")),
        }
    }

    /// Creates (or truncates) all three files and writes `t` into them
    pub fn write(&self, t: &Translation) -> Result<()> {
        write_file(&self.scoap_format, |w| write_scoap_format(t, w))?;
        write_file(&self.net_mapping, |w| write_net_mapping(t, w))?;
        write_file(&self.gate_mapping, |w| write_gate_mapping(t, w))?;
        Ok(())
    }

    /// Returns the paths in the order they are written
    pub fn paths(&self) -> [&Path; 3] {
        [
            self.scoap_format.as_path(),
            self.net_mapping.as_path(),
            self.gate_mapping.as_path(),
        ]
    }
}

fn write_file<F>(path: &Path, emit: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    emit(&mut writer).map_err(|e| Error::io(path, e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[test]
fn test_output_file_names() {
    let files = OutputFiles::new("out", "7");
    assert_eq!(files.scoap_format, Path::new("out/scoap_format7.txt"));
    assert_eq!(files.net_mapping, Path::new("out/net_mapping7.txt"));
    assert_eq!(files.gate_mapping, Path::new("out/gate_output_mapping7.txt"));
}
