use std::{
    collections::HashSet,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use zorrosvg::{BatchOptions, FileOutcome, GammaTarget, LumaChannel, MaskMode, SourceFile};

#[derive(Parser, Debug)]
#[command(name = "zorrosvg", version)]
struct Cli {
    /// Log skipped files and per-file results.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode transparent images into ZorroSVG documents.
    Encode(EncodeArgs),
    /// Rasterize an SVG document into a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Input files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write outputs here instead of next to each input. Passthrough files are copied too.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Batch options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JPEG quality (1-100).
    #[arg(long)]
    quality: Option<u8>,

    /// Gamma exponent.
    #[arg(long)]
    gamma: Option<f64>,

    /// Composite halves that receive the gamma curve.
    #[arg(long, value_enum)]
    gamma_target: Option<GammaTargetChoice>,

    /// Channel the filter reads alpha from.
    #[arg(long, value_enum)]
    channel: Option<ChannelChoice>,

    /// Binary mask: alpha >= T becomes opaque, everything else transparent.
    #[arg(long)]
    threshold: Option<u8>,

    /// Extensions to encode (repeatable); others pass through.
    #[arg(long = "ext")]
    extensions: Vec<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input SVG.
    input: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GammaTargetChoice {
    None,
    Color,
    Mask,
    Both,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ChannelChoice {
    Red,
    Green,
    Blue,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Encode(args) => cmd_encode(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<BatchOptions> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let opts: BatchOptions = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(opts)
}

fn batch_options(args: &EncodeArgs) -> anyhow::Result<BatchOptions> {
    let mut opts = match &args.config {
        Some(path) => read_config(path)?,
        None => BatchOptions::default(),
    };
    if let Some(q) = args.quality {
        opts.encode.quality = q;
    }
    if let Some(g) = args.gamma {
        opts.encode.gamma_exponent = g;
    }
    if let Some(t) = args.gamma_target {
        opts.encode.gamma_target = match t {
            GammaTargetChoice::None => GammaTarget::None,
            GammaTargetChoice::Color => GammaTarget::Color,
            GammaTargetChoice::Mask => GammaTarget::Mask,
            GammaTargetChoice::Both => GammaTarget::Both,
        };
    }
    if let Some(c) = args.channel {
        opts.encode.channel = match c {
            ChannelChoice::Red => LumaChannel::Red,
            ChannelChoice::Green => LumaChannel::Green,
            ChannelChoice::Blue => LumaChannel::Blue,
        };
    }
    if let Some(t) = args.threshold {
        opts.encode.mask_mode = MaskMode::Threshold(t);
    }
    if !args.extensions.is_empty() {
        opts.extensions = args
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
    }
    opts.encode.validate()?;
    Ok(opts)
}

fn destination(out_dir: Option<&Path>, path: &Path) -> anyhow::Result<PathBuf> {
    match out_dir {
        Some(dir) => {
            let name = path
                .file_name()
                .with_context(|| format!("input '{}' has no file name", path.display()))?;
            Ok(dir.join(name))
        }
        None => Ok(path.to_path_buf()),
    }
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let opts = batch_options(&args)?;

    let mut files = Vec::with_capacity(args.inputs.len());
    let mut unreadable = 0usize;
    for path in &args.inputs {
        if path.is_dir() {
            files.push(SourceFile::empty(path));
            continue;
        }
        match SourceFile::read(path) {
            Ok(file) => files.push(file),
            Err(err) => {
                tracing::error!(error = %err, "read failed");
                unreadable += 1;
            }
        }
    }

    let out_dir = args.out_dir.as_deref();
    let report = zorrosvg::run_batch(files, &opts);

    let mut writes: Vec<(PathBuf, &[u8])> = Vec::new();
    for outcome in &report.outcomes {
        match outcome {
            Ok(FileOutcome::Encoded { path, svg, .. }) => {
                writes.push((destination(out_dir, path)?, svg.as_bytes()));
            }
            Ok(FileOutcome::Passthrough(file)) => {
                if let (Some(dir), Some(contents)) = (out_dir, file.contents.as_deref()) {
                    writes.push((destination(Some(dir), &file.path)?, contents));
                }
            }
            Err(_) => {}
        }
    }

    if let Some(dir) = out_dir {
        let mut seen = HashSet::with_capacity(writes.len());
        for (dest, _) in &writes {
            if !seen.insert(dest.as_path()) {
                anyhow::bail!(
                    "several inputs map to '{}' in --out-dir; rename them or drop --out-dir",
                    dest.display()
                );
            }
        }
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
    }

    for (dest, bytes) in &writes {
        std::fs::write(dest, bytes).with_context(|| format!("write '{}'", dest.display()))?;
        eprintln!("wrote {}", dest.display());
    }

    eprintln!("{}", report.summary());
    let failed = report.failed() + unreadable;
    if failed > 0 {
        anyhow::bail!("{failed} file(s) failed to encode");
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("read svg '{}'", args.input.display()))?;
    let raster = zorrosvg::rasterize_svg(&bytes)
        .with_context(|| format!("rasterize '{}'", args.input.display()))?;
    let png = zorrosvg::encode_png(&raster)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
