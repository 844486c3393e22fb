use scoap_netlist::Translation;
use scoap_netlist::assert_lines_eq;
use scoap_netlist::emit::{OutputFiles, write_gate_mapping, write_net_mapping, write_scoap_format};

fn render(
    t: &Translation,
    emit: fn(&Translation, &mut Vec<u8>) -> std::io::Result<()>,
) -> String {
    let mut out = Vec::new();
    emit(t, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn scoap(t: &Translation) -> String {
    render(t, |t, w| write_scoap_format(t, w))
}

fn net_mapping(t: &Translation) -> String {
    render(t, |t, w| write_net_mapping(t, w))
}

fn gate_mapping(t: &Translation) -> String {
    render(t, |t, w| write_gate_mapping(t, w))
}

#[test]
fn simple_and() {
    let t: Translation = "input a;\noutput b;\nand g1(b, a, a);".parse().unwrap();
    assert_eq!(
        scoap(&t),
        "input(0)\ninput(1)\ninput(x)\ninput(2)\n#a  input 2\noutput(3)\n#b  output 3\n3=and(2,2)\n"
    );
    assert_eq!(net_mapping(&t), "1'b0 -> 0\n1'b1 -> 1\na -> 2\nb -> 3\n");
    assert_eq!(gate_mapping(&t), "g1 -> b (ID: 3)\n");
}

#[test]
fn empty_netlist() {
    let t = Translation::new();
    assert_eq!(scoap(&t), "input(0)\ninput(1)\ninput(x)\n");
    assert_eq!(net_mapping(&t), "1'b0 -> 0\n1'b1 -> 1\n");
    assert_eq!(gate_mapping(&t), "");
}

#[test]
fn sequential_design() {
    let netlist = "
        // counter bit
        input clk, rst_n;
        input [1:0] en;
        output q;
        wire d, n1;

        and g10(n1, en[0], en[1]);
        xor g2(d, n1, q);
        dff r0(.D(d), .CK(clk), .RN(rst_n), .Q(q));
    ";
    let t: Translation = netlist.parse().unwrap();
    assert_lines_eq!(
        scoap(&t),
        "input(0)
         input(1)
         input(x)
         input(2)
         #clk  input 2
         input(3)
         #rst_n  input 3
         input(4)
         #en[0]  input 4
         input(5)
         #en[1]  input 5
         output(6)
         #q  output 6
         8=and(4,5)
         7=xor(8,6)
         6=dffcr(7,2,3,1)"
    );
    assert_lines_eq!(
        net_mapping(&t),
        "1'b0 -> 0
         1'b1 -> 1
         clk -> 2
         rst_n -> 3
         en[0] -> 4
         en[1] -> 5
         q -> 6
         d -> 7
         n1 -> 8"
    );
    // Instance names sort as strings
    assert_lines_eq!(
        gate_mapping(&t),
        "g10 -> n1 (ID: 8)
         g2 -> d (ID: 7)
         r0 -> q (ID: 6)"
    );
}

#[test]
fn dont_care_output_in_gate_mapping() {
    let t: Translation = "not g1(x, a);".parse().unwrap();
    assert_eq!(gate_mapping(&t), "g1 -> x (ID: x)\n");
    assert_eq!(scoap(&t).lines().last(), Some("x=not(2)"));
}

#[test]
fn files_are_written_and_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let netlist_path = dir.path().join("design3.v");
    std::fs::write(
        &netlist_path,
        "input a;\noutput b;\nand g1(b, a, a);\nbuf g0(c, b);\n",
    )
    .unwrap();

    let files = OutputFiles::new(dir.path(), "3");
    let t = Translation::from_file(&netlist_path).unwrap();
    files.write(&t).unwrap();
    let first: Vec<Vec<u8>> = files
        .paths()
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();

    let t = Translation::from_file(&netlist_path).unwrap();
    files.write(&t).unwrap();
    let second: Vec<Vec<u8>> = files
        .paths()
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first[2].clone()).unwrap(),
        "g0 -> c (ID: 4)\ng1 -> b (ID: 3)\n"
    );
    assert!(dir.path().join("scoap_format3.txt").exists());
    assert!(dir.path().join("net_mapping3.txt").exists());
    assert!(dir.path().join("gate_output_mapping3.txt").exists());
}

#[test]
fn missing_netlist_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Translation::from_file(dir.path().join("nope.v")).unwrap_err();
    assert!(matches!(err, scoap_netlist::Error::Io { .. }));
    assert!(err.to_string().contains("nope.v"));
}

#[cfg(feature = "serde")]
#[test]
fn serialize_json() {
    let t: Translation = "input a;\nbuf g1(y, a);".parse().unwrap();
    let mut out = Vec::new();
    t.serialize(&mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["nets"]["names"][2], "a");
    assert_eq!(json["inputs"][0]["id"], 2);
    assert_eq!(json["gate_outputs"]["g1"]["net"], "y");
}
