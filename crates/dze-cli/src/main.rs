use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dze-cli",
    about = "Bulk-edit DayZ types.xml spawn economy from a YAML change list",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Apply a YAML change list to a types.xml and write the result
    Apply(ApplyArgs),
    /// Dump type entries of a file or directory as JSON
    Dump(DumpArgs),
    /// Create a timestamped zip backup of a file or directory
    Backup(BackupArgs),
}

#[derive(ClapArgs, Debug)]
struct ApplyArgs {
    /// Path to the YAML configuration file
    config: PathBuf,
    /// The types.xml to edit
    #[arg(long, default_value = "types.xml")]
    types: PathBuf,
    /// Output path for the edited document
    #[arg(long, default_value = "types.updated.xml")]
    out: PathBuf,
    /// Zip the types file next to it before writing the output
    #[arg(long, default_value_t = false)]
    backup: bool,
}

#[derive(ClapArgs, Debug)]
struct DumpArgs {
    /// File or directory to dump (defaults to types.xml)
    path: Option<PathBuf>,
    /// Only show entries with this exact name
    #[arg(long)]
    name: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct BackupArgs {
    /// File or directory to archive
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Apply(a) => cmd_apply(a),
        Cmd::Dump(a) => cmd_dump(a),
        Cmd::Backup(a) => cmd_backup(a),
    }
}

fn cmd_apply(args: ApplyArgs) {
    // The input file is never written; refuse an output path aliasing it.
    if args.out == args.types {
        eprintln!("error: --out must differ from --types");
        std::process::exit(2);
    }
    let cfg = dze_core::load_config(&args.config).unwrap_or_else(|e| {
        eprintln!("config error: {}", e);
        std::process::exit(2);
    });
    let mut doc = dze_core::read_types(&args.types).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(3);
    });
    if args.backup {
        let zip = dze_core::backup::zip_backup(&args.types).unwrap_or_else(|e| {
            eprintln!("backup error: {}", e);
            std::process::exit(6);
        });
        println!("backup: {}", zip.display());
    }
    let report = dze_core::apply_config(&mut doc, &cfg).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(4);
    });
    for name in &report.unmatched {
        println!("Warning: item '{}' not found in {}", name, args.types.display());
    }
    dze_core::write_types(&doc, &args.out).unwrap_or_else(|e| {
        eprintln!("error writing: {}", e);
        std::process::exit(5);
    });
    println!("updated {} type entries -> {}", report.updated, args.out.display());
}

fn cmd_dump(args: DumpArgs) {
    let path = args.path.unwrap_or_else(|| PathBuf::from("types.xml"));
    let name = args.name.as_deref();
    let p = path.as_path();
    let res = if p.is_file() {
        dze_core::json::dump_file_json(p, name)
    } else if p.is_dir() {
        dze_core::json::dump_dir_map_json(p, name)
    } else {
        Err(dze_core::Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not found: {}", p.display()),
        )))
    };
    match res {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

fn cmd_backup(args: BackupArgs) {
    match dze_core::backup::zip_backup(&args.path) {
        Ok(dest) => println!("{}", dest.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}
