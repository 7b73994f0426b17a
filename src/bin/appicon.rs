use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "appicon", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to `generate` driven by Xcode build settings.
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write AppIcon.appiconset into the asset catalog.
    Generate(GenerateArgs),
    /// Print Contents.json for the requested idioms without rendering.
    Manifest(ManifestArgs),
    /// Render the icon once at a given size.
    Preview(PreviewArgs),
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Asset catalog directory (overrides SCRIPT_OUTPUT_FILE_0).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Device family list such as "1,2" (overrides TARGETED_DEVICE_FAMILY).
    #[arg(long)]
    device_family: Option<String>,

    /// Project root (overrides PROJECT_DIR).
    #[arg(long)]
    project_dir: Option<PathBuf>,

    /// Project name (overrides PROJECT).
    #[arg(long)]
    project: Option<String>,

    /// Include Mac Catalyst sizes; `--mac-catalyst=false` turns them off (overrides
    /// SUPPORTS_MACCATALYST).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    mac_catalyst: Option<bool>,
}

impl ConfigArgs {
    fn sources(&self) -> appicon::ConfigSources {
        appicon::ConfigSources {
            assets_dir: self.assets.clone(),
            device_family: self.device_family.clone(),
            project_dir: self.project_dir.clone(),
            project: self.project.clone(),
            mac_catalyst: self.mac_catalyst,
        }
    }
}

#[derive(Parser, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Icon descriptor JSON; the built-in icon is used when omitted.
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,

    /// Render sizes concurrently.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct ManifestArgs {
    /// Device family list such as "1,2" (overrides TARGETED_DEVICE_FAMILY).
    #[arg(long)]
    device_family: Option<String>,

    /// Include Mac Catalyst sizes; `--mac-catalyst=false` turns them off (overrides
    /// SUPPORTS_MACCATALYST).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    mac_catalyst: Option<bool>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Width and height in pixels.
    #[arg(long, default_value_t = 1024)]
    size: u32,

    /// Icon descriptor JSON; the built-in icon is used when omitted.
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Clip to the home-screen rounded square.
    #[arg(long)]
    mask: bool,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum BackendChoice {
    #[default]
    Cpu,
}

impl From<BackendChoice> for appicon::BackendKind {
    fn from(choice: BackendChoice) -> Self {
        match choice {
            BackendChoice::Cpu => appicon::BackendKind::Cpu,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Xcode surfaces stderr lines starting with "error:" in the issue navigator.
    if let Err(e) = try_main(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        None => cmd_generate(GenerateArgs::default()),
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::Manifest(args)) => cmd_manifest(args),
        Some(Command::Preview(args)) => cmd_preview(args),
    }
}

fn load_icon(path: Option<&Path>) -> anyhow::Result<appicon::IconDescriptor> {
    match path {
        Some(p) => appicon::IconDescriptor::from_path(p)
            .with_context(|| format!("load icon descriptor '{}'", p.display())),
        None => Ok(appicon::default_icon()),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let sources = appicon::ConfigSources::from_env().override_with(args.config.sources());
    let config = sources.resolve()?;
    let icon = load_icon(args.icon.as_deref())?;

    let set = appicon::IconSet::new(&config.idioms, icon);
    let opts = appicon::WriteOpts {
        backend: args.backend.into(),
        settings: appicon::RenderSettings::default(),
        parallel: args.parallel,
    };
    let report = set
        .write(&config.assets_dir, &opts)
        .with_context(|| format!("write icon set into '{}'", config.assets_dir.display()))?;

    eprintln!(
        "wrote {} ({} images)",
        report.dir.display(),
        report.images.len()
    );
    Ok(())
}

fn cmd_manifest(args: ManifestArgs) -> anyhow::Result<()> {
    let overrides = appicon::ConfigSources {
        device_family: args.device_family,
        mac_catalyst: args.mac_catalyst,
        ..appicon::ConfigSources::default()
    };
    let idioms = appicon::ConfigSources::from_env()
        .override_with(overrides)
        .resolve_idioms()?;

    let table = appicon::SizeTable::for_idioms(&idioms);
    let bytes = appicon::Manifest::from_table(&table).to_json_bytes()?;
    std::io::stdout()
        .write_all(&bytes)
        .context("write manifest to stdout")?;
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let icon = load_icon(args.icon.as_deref())?;
    let settings = appicon::RenderSettings {
        home_screen_mask: args.mask,
        ..appicon::RenderSettings::default()
    };

    let mut backend = appicon::create_backend(args.backend.into(), settings)?;
    let image = backend.render(&icon, args.size, args.size)?;
    let png = appicon::encode_png(&image)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
