//! # escpos CLI
//!
//! Command-line front end for composing ESC/POS payloads.
//!
//! ## Usage
//!
//! ```bash
//! # Encode stdin as a receipt and write the payload to a file
//! echo "Café 3.50" | escpos render --charset WPC1252 --cut --output job.bin
//!
//! # Centered, bold, hex dump to stdout
//! printf 'THANK YOU\n' | escpos render --align center --bold --hex
//!
//! # Inspect the command buffer
//! echo hi | escpos render --dump-json
//!
//! # List character sets and printer presets
//! escpos list
//! ```
//!
//! Set `RUST_LOG=debug` to log the buffered commands.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use escpos_builder::{
    CharacterSet, EscPosError, Printer, PrinterConfig,
    protocol::{
        commands::{CashDrawerPin, CutMode},
        text::Align,
    },
};

/// escpos - ESC/POS receipt payload builder
#[derive(Parser, Debug)]
#[command(name = "escpos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log buffered commands to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode lines from stdin into a printer payload
    Render {
        /// Printer preset (see `escpos list`)
        #[arg(long, default_value = "generic")]
        printer: String,

        /// Character set, overriding the preset's (e.g. PC437_USA, WPC1252)
        #[arg(long)]
        charset: Option<CharacterSet>,

        /// Text alignment
        #[arg(long, value_enum, default_value_t = AlignArg::Left)]
        align: AlignArg,

        /// Print in bold
        #[arg(long)]
        bold: bool,

        /// Feed and cut after the text
        #[arg(long)]
        cut: bool,

        /// Open the cash drawer after printing
        #[arg(long, value_enum)]
        drawer: Option<DrawerArg>,

        /// Write the payload to FILE instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print a hex dump instead of raw bytes
        #[arg(long, conflicts_with = "dump_json")]
        hex: bool,

        /// Print the command buffer as JSON instead of raw bytes
        #[arg(long)]
        dump_json: bool,
    },

    /// List character sets and printer presets
    List,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignArg {
    Left,
    Center,
    Right,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Align::Left,
            AlignArg::Center => Align::Center,
            AlignArg::Right => Align::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DrawerArg {
    Pin2,
    Pin5,
}

impl From<DrawerArg> for CashDrawerPin {
    fn from(arg: DrawerArg) -> Self {
        match arg {
            DrawerArg::Pin2 => CashDrawerPin::Pin2,
            DrawerArg::Pin5 => CashDrawerPin::Pin5,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), EscPosError> {
    match command {
        Commands::List => {
            println!("Character sets:");
            for set in CharacterSet::ALL {
                println!("  {:<24} {:<12} n={}", set.name(), set.encoding(), set.byte());
            }
            println!("\nPrinter presets:");
            for preset in PrinterConfig::PRESETS {
                println!("  {:<24} {}", preset.name, preset.character_set);
            }
            Ok(())
        }
        Commands::Render {
            printer,
            charset,
            align,
            bold,
            cut,
            drawer,
            output,
            hex,
            dump_json,
        } => {
            let mut config = PrinterConfig::by_name(&printer)?;
            if let Some(set) = charset {
                config = config.with_character_set(set);
            }

            let mut job = Printer::with_config(config);
            job.initialize()
                .set_character_set(config.character_set)
                .set_align(align.into())
                .set_text_bold(bold);

            for line in io::stdin().lock().lines() {
                job.text_line(&line?)?;
            }

            if bold {
                job.set_text_bold(false);
            }
            if cut {
                job.cut_with(CutMode::FeedFull(0));
            }
            if let Some(pin) = drawer {
                job.cashdraw(pin.into());
            }
            job.debug();

            let payload = if dump_json {
                serde_json::to_vec_pretty(job.commands())?
            } else if hex {
                hex_dump(&job.data()).into_bytes()
            } else {
                job.data()
            };

            match output {
                Some(path) => std::fs::write(&path, &payload)?,
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&payload)?;
                    stdout.flush()?;
                }
            }
            Ok(())
        }
    }
}

/// 16 bytes per line, offset first
fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in data.chunks(16).enumerate() {
        let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02X}")).collect();
        out.push_str(&format!("{:08X}  {}\n", row * 16, bytes.join(" ")));
    }
    out
}
