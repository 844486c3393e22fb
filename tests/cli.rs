use std::process::Command;

fn scoap_netlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scoap-netlist"))
}

#[test]
fn wrong_argument_count_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let status = scoap_netlist()
        .current_dir(dir.path())
        .arg("design1.v")
        .output()
        .unwrap();
    assert_eq!(status.status.code(), Some(1));
    assert!(!status.stderr.is_empty());

    let status = scoap_netlist()
        .current_dir(dir.path())
        .args(["a.v", "1", "extra"])
        .output()
        .unwrap();
    assert_eq!(status.status.code(), Some(1));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn writes_outputs_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("design7.v"),
        "module top(a, b);\ninput a;\noutput b;\nand g1(b, a, a);\nendmodule\n",
    )
    .unwrap();

    let output = scoap_netlist()
        .current_dir(dir.path())
        .args(["design7.v", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let scoap = std::fs::read_to_string(dir.path().join("scoap_format7.txt")).unwrap();
    assert!(scoap.contains("input(2)\n"));
    assert!(scoap.ends_with("output(3)\n#b  output 3\n3=and(2,2)\n"));
    let nets = std::fs::read_to_string(dir.path().join("net_mapping7.txt")).unwrap();
    assert_eq!(nets, "1'b0 -> 0\n1'b1 -> 1\na -> 2\nb -> 3\n");
    let gates = std::fs::read_to_string(dir.path().join("gate_output_mapping7.txt")).unwrap();
    assert_eq!(gates, "g1 -> b (ID: 3)\n");
}

#[test]
fn out_dir_option() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let netlist = dir.path().join("d.v");
    std::fs::write(&netlist, "input a;\n").unwrap();

    let output = scoap_netlist()
        .arg(&netlist)
        .arg("2")
        .arg("--out-dir")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(out.join("scoap_format2.txt").exists());
}

#[test]
fn missing_netlist_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = scoap_netlist()
        .current_dir(dir.path())
        .args(["missing.v", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.v"));
}

#[test]
fn design_number_may_start_with_a_hyphen() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("d.v"), "input a;\n").unwrap();

    let output = scoap_netlist()
        .current_dir(dir.path())
        .args(["d.v", "-1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("scoap_format-1.txt").exists());
    assert!(dir.path().join("net_mapping-1.txt").exists());
    assert!(dir.path().join("gate_output_mapping-1.txt").exists());
}
