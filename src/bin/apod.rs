use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "apod", version, about = "Astronomy Picture of the Day, captioned")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch today's picture, burn in its explanation and store it.
    Daily(DailyArgs),
    /// Burn a caption into a local JPEG.
    Annotate(AnnotateArgs),
}

#[derive(Parser, Debug)]
struct DailyArgs {
    /// Directory the picture is written into.
    #[arg(long, env = "APOD_LOCAL_STORE_LOCATION")]
    store: Option<PathBuf>,

    /// api.nasa.gov key; DEMO_KEY when unset.
    #[arg(long, env = "APOD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct AnnotateArgs {
    /// Input JPEG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JPEG path.
    #[arg(long)]
    out: PathBuf,

    /// Caption text.
    #[arg(long, conflicts_with = "caption_file", required_unless_present = "caption_file")]
    caption: Option<String>,

    /// Read the caption from a UTF-8 text file.
    #[arg(long)]
    caption_file: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Annotation options as JSON; explicit flags below take precedence.
    #[arg(long)]
    options: Option<String>,

    /// Where the caption block starts.
    #[arg(long, value_enum)]
    placement: Option<PlacementChoice>,

    /// Glyph magnification of the 8x8 face (1-64).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(apod::MAX_FONT_SCALE)))]
    scale: Option<u32>,

    /// JPEG quality of the output (1-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlacementChoice {
    Center,
    TopLeft,
}

impl From<PlacementChoice> for apod::Placement {
    fn from(p: PlacementChoice) -> Self {
        match p {
            PlacementChoice::Center => Self::Center,
            PlacementChoice::TopLeft => Self::TopLeft,
        }
    }
}

impl StyleArgs {
    fn to_options(&self) -> anyhow::Result<apod::AnnotateOptions> {
        let mut opts = match &self.options {
            Some(json) => apod::AnnotateOptions::from_json(json)?,
            None => apod::AnnotateOptions::default(),
        };
        if let Some(p) = self.placement {
            opts.placement = p.into();
        }
        if let Some(s) = self.scale {
            opts.font_scale = s;
        }
        if let Some(q) = self.quality {
            opts.quality = q;
        }
        Ok(opts)
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Daily(args) => cmd_daily(args),
        Command::Annotate(args) => cmd_annotate(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_daily(args: DailyArgs) -> anyhow::Result<()> {
    let store = args
        .store
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| apod::ApodError::config("no storage location defined"))?;

    let annotator = apod::Annotator::new(args.style.to_options()?);
    let client = apod::ApodClient::new(args.api_key.as_deref())?;

    let path = apod::fetch_and_store(&client, &store, &annotator)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_annotate(args: AnnotateArgs) -> anyhow::Result<()> {
    let caption = match (&args.caption, &args.caption_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("read caption '{}'", path.display()))?,
        (None, None) => anyhow::bail!("either --caption or --caption-file is required"),
    };

    let input = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;

    let annotator = apod::Annotator::new(args.style.to_options()?);
    let output = annotator
        .annotate(&input, &caption)
        .with_context(|| format!("annotate '{}'", args.in_path.display()))?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, output)
        .with_context(|| format!("write jpeg '{}'", args.out.display()))?;

    tracing::info!(words = caption.split_whitespace().count(), "annotated");
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
