//! XM23 simulator CLI.
//!
//! This binary provides a single entry point for running and inspecting XM23 programs. It performs:
//! 1. **Run:** Load an S-record or raw image, run until a stop condition or Ctrl-C, then dump state.
//! 2. **Disassemble:** Print a listing of every word in a loaded image.
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` (default `info`; `--trace` enables `trace`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;
use xm23_core::common::SimError;
use xm23_core::config::Config;
use xm23_core::isa::disasm::disassemble;
use xm23_core::sim::loader::{self, ImageFormat};
use xm23_core::sim::{Simulator, install_interrupt_handler};
use xm23_core::soc::System;

#[derive(Parser, Debug)]
#[command(
    name = "xm23",
    author,
    version,
    about = "XM23 fetch-decode-execute simulator",
    long_about = "Run or disassemble XM23 program images.\n\nExamples:\n  xm23 run program.xme\n  xm23 run --max-cycles 1000 --break 0x0120 program.xme\n  xm23 run --format bin --load-address 0x100 program.bin\n  xm23 disasm program.xme"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load an image and run it until a stop condition or Ctrl-C.
    Run {
        /// Program image (S-records or raw binary).
        file: PathBuf,

        /// Image format; detected from the extension if omitted.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Base address for raw binaries (hex with 0x, or decimal).
        #[arg(long, value_parser = parse_address)]
        load_address: Option<u16>,

        /// Override the start PC after loading.
        #[arg(long, value_parser = parse_address)]
        start_pc: Option<u16>,

        /// Stop after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Stop when PC reaches this address (repeatable).
        #[arg(long = "break", value_parser = parse_address)]
        breakpoints: Vec<u16>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// JSON configuration file; flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a disassembly listing of an image.
    Disasm {
        /// Program image (S-records or raw binary).
        file: PathBuf,

        /// Image format; detected from the extension if omitted.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Base address for raw binaries.
        #[arg(long, value_parser = parse_address, default_value = "0")]
        load_address: u16,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// Motorola S-records.
    Srec,
    /// Raw bytes.
    Bin,
}

impl FormatArg {
    fn resolve(format: Option<FormatArg>, path: &Path) -> ImageFormat {
        match format {
            Some(FormatArg::Srec) => ImageFormat::SRecord,
            Some(FormatArg::Bin) => ImageFormat::Binary,
            None => ImageFormat::detect(path),
        }
    }
}

/// Parses a 16-bit address given as `0x`-prefixed hex or decimal.
fn parse_address(text: &str) -> Result<u16, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid address '{text}': {e}"))
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    let result = match cli.command {
        Commands::Run {
            file,
            format,
            load_address,
            start_pc,
            max_cycles,
            breakpoints,
            trace,
            config,
        } => cmd_run(RunArgs {
            file,
            format,
            load_address,
            start_pc,
            max_cycles,
            breakpoints,
            trace,
            config,
        }),
        Commands::Disasm {
            file,
            format,
            load_address,
        } => cmd_disasm(&file, format, load_address),
    };

    if let Err(e) = result {
        eprintln!("\n[!] error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct RunArgs {
    file: PathBuf,
    format: Option<FormatArg>,
    load_address: Option<u16>,
    start_pc: Option<u16>,
    max_cycles: Option<u64>,
    breakpoints: Vec<u16>,
    trace: bool,
    config: Option<PathBuf>,
}

/// Loads the image, runs it, and prints the stop reason, registers, and stats.
fn cmd_run(args: RunArgs) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(addr) = args.load_address {
        config.memory.load_address = addr;
    }
    if let Some(limit) = args.max_cycles {
        config.general.max_cycles = Some(limit);
    }
    config.general.breakpoints.extend(args.breakpoints);
    config.general.trace_instructions |= args.trace;

    let mut sim = Simulator::new(System::new(), &config);
    let format = FormatArg::resolve(args.format, &args.file);
    let load_address = config.memory.load_address;
    let image = loader::load_program(&mut sim.cpu, &args.file, format, load_address)?;
    if let Some(pc) = args.start_pc {
        sim.cpu.regs.set_pc(pc);
    }

    let limit = match config.general.max_cycles {
        Some(n) => n.to_string(),
        None => "none".to_string(),
    };
    let bytes = image.byte_count();
    println!("[*] Running {} ({} bytes)", args.file.display(), bytes);
    println!(
        "    Start PC: {:#06x}  Max cycles: {}  Breakpoints: {}",
        sim.cpu.regs.pc(),
        limit,
        config.general.breakpoints.len()
    );

    install_interrupt_handler(sim.run_flag())?;
    let reason = sim.run();

    println!("\n[*] Stopped: {} (clock = {})", reason, sim.cpu.clock);
    sim.cpu.regs.dump();
    sim.cpu.stats.print();
    Ok(())
}

/// Prints `address: word  mnemonic` for every word of every segment.
fn cmd_disasm(file: &Path, format: Option<FormatArg>, load_address: u16) -> Result<(), SimError> {
    let format = FormatArg::resolve(format, file);
    let image = loader::load_image(file, format, load_address)?;

    if !image.name.is_empty() {
        println!("; {}", image.name);
    }
    for (base, data) in &image.segments {
        for (i, pair) in data.chunks(2).enumerate() {
            let address = base.wrapping_add((i * 2) as u16);
            let word = u16::from_le_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]);
            println!("{:04x}: {:04x}  {}", address, word, disassemble(word));
        }
    }
    if let Some(start) = image.start {
        println!("; start {:#06x}", start);
    }
    Ok(())
}
