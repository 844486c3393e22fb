use clap::Parser;
use clap::error::ErrorKind;
use scoap_netlist::{Translation, emit::OutputFiles};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input gate-level netlist
    #[arg(allow_hyphen_values = true)]
    netlist: PathBuf,
    /// Design number, used to name the output files
    #[arg(allow_hyphen_values = true)]
    design: String,
    /// Directory to write the output files into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Log skipped lines and progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let level = if args.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();

    let files = OutputFiles::new(&args.out_dir, &args.design);
    let result = Translation::from_file(&args.netlist).and_then(|t| files.write(&t));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
