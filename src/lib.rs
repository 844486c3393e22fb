#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, unreachable_pub)]
/*!

`scoap-netlist`

Translates a structural gate-level Verilog netlist into the input format of a
SCOAP testability tool. Only `input`/`output`/`wire` declarations, the
primitive gates `and`, `or`, `not`, `xor`, `xnor`, `nor`, `nand`, `buf`, and
named-port `dff` instances are understood; every other line is skipped.

## Example

```
use scoap_netlist::{Translation, emit::write_scoap_format};

let t: Translation = "input a;\noutput b;\nand g1(b, a, a);".parse().unwrap();
let mut out = Vec::new();
write_scoap_format(&t, &mut out).unwrap();
assert_eq!(
    String::from_utf8(out).unwrap(),
    "input(0)\ninput(1)\ninput(x)\ninput(2)\n#a  input 2\noutput(3)\n#b  output 3\n3=and(2,2)\n"
);
```

*/

pub mod emit;
pub mod error;
pub mod gate;
pub mod line;
pub mod nets;
pub mod translate;
pub mod util;

pub use error::{Error, Result};
pub use translate::Translation;
