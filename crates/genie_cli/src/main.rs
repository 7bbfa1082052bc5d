use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use genie_core::core_api::{Engine, Session};
use genie_core::{storage, validate};
use genie_render::{
    FieldSelection, render_json_full, render_json_selected, render_selected_pairs, render_summary,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.sav")]
    path: PathBuf,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    rival: bool,
    #[arg(long)]
    id: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    coins: bool,
    #[arg(long)]
    badges: bool,
    #[arg(long)]
    location: bool,
    #[arg(long)]
    playtime: bool,
    #[arg(long)]
    pokedex: bool,
    #[arg(long = "hall-of-fame")]
    hall_of_fame: bool,
    #[arg(long)]
    boxes: bool,
    #[arg(long)]
    flags: bool,
    #[arg(long)]
    checksums: bool,
    #[arg(long)]
    json: bool,
    /// Skip creating the "(BACKUP) " copy next to the input.
    #[arg(long = "no-backup")]
    no_backup: bool,
    /// Recompute every checksum and write the result to --output or the "(EDITED) " path.
    #[arg(long = "fix-checksums")]
    fix_checksums: bool,
    #[arg(long)]
    output: Option<PathBuf>,
    /// Refuse saves that are not exactly 32 KiB.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            name: self.name,
            rival: self.rival,
            id: self.id,
            money: self.money,
            coins: self.coins,
            badges: self.badges,
            location: self.location,
            playtime: self.playtime,
            pokedex: self.pokedex,
            hall_of_fame: self.hall_of_fame,
            boxes: self.boxes,
            flags: self.flags,
            checksums: self.checksums,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.output.is_some() && !cli.fix_checksums {
        eprintln!("--output requires --fix-checksums");
        process::exit(2);
    }
    if cli
        .output
        .as_deref()
        .is_some_and(|out| same_file(out, &cli.path))
    {
        eprintln!("--output must not be the input save");
        process::exit(2);
    }

    let fields = cli.field_selection();
    let quiet = cli.json || fields.is_any_selected();

    let backup = if cli.no_backup {
        None
    } else {
        Some(storage::backup_file(&cli.path).unwrap_or_else(|e| fatal(&e)))
    };

    let bytes = storage::load_bytes(&cli.path).unwrap_or_else(|e| fatal(&e));
    let mut session = Engine::new()
        .with_strict_size(cli.strict)
        .open_bytes(bytes)
        .unwrap_or_else(|e| fatal(&e));

    if cli.fix_checksums {
        let out_path = cli
            .output
            .clone()
            .unwrap_or_else(|| storage::edited_path(&cli.path));
        write_fixed(&mut session, &out_path);
        if !quiet {
            println!("Wrote repaired save to {}", out_path.display());
        }
    }

    if cli.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&session, &fields)
        } else {
            render_json_full(&session)
        }
        .unwrap_or_else(|e| fatal(&e));
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("[FATAL] could not render JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_any_selected() {
        let pairs = render_selected_pairs(&session, &fields).unwrap_or_else(|e| fatal(&e));
        for (key, value) in pairs {
            println!("{key}={value}");
        }
        return;
    }

    print_header(&cli.path, backup.as_deref(), &session);
    let summary = render_summary(&session).unwrap_or_else(|e| fatal(&e));
    println!("{summary}");
}

fn write_fixed(session: &mut Session, out_path: &Path) {
    session.fix_checksums().unwrap_or_else(|e| fatal(&e));
    storage::write_bytes(out_path, session.as_bytes()).unwrap_or_else(|e| fatal(&e));
    tracing::info!(path = %out_path.display(), "checksums repaired");
}

fn print_header(input: &Path, backup: Option<&Path>, session: &Session) {
    println!("Input:  {}", input.display());
    match backup {
        Some(path) => println!("Backup: {}", path.display()),
        None => println!("Backup: (skipped)"),
    }
    println!("Size:   {:#x} bytes", session.len());

    if !validate::has_expected_size(session.buffer()) {
        println!("[WARN] Save size is not 0x8000 (32KB). This may not be a Gen I save.");
    }

    let verdict = if session.has_valid_main_checksum() {
        "VALID"
    } else {
        "INVALID"
    };
    println!("Main Checksum: {verdict}");
    println!();
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    eprintln!("[FATAL] {err}");
    process::exit(1);
}
