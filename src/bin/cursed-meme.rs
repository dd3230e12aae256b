use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cursed_meme::{
    CaptionMode, CaptionSource as _, FallbackCaptions, FontSource, GlitchSettings, PresetCaptions,
    Project, Renderer, SeededRandom,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cursed-meme", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a meme as a PNG.
    Render(RenderArgs),
    /// Print a caption pair.
    Captions(CaptionsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Source image. Without one the "upload image" placeholder is rendered.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Project JSON supplying defaults for every other flag.
    #[arg(long)]
    project: Option<PathBuf>,

    /// Top caption.
    #[arg(long)]
    top: Option<String>,

    /// Bottom caption.
    #[arg(long)]
    bottom: Option<String>,

    /// RGB chaos intensity (0-100).
    #[arg(long)]
    rgb_chaos: Option<i32>,

    /// Scanline intensity (0-100).
    #[arg(long)]
    scanlines: Option<i32>,

    /// VHS corruption intensity (0-100).
    #[arg(long)]
    vhs: Option<i32>,

    /// Resolution crunch intensity (0-100).
    #[arg(long)]
    crunch: Option<i32>,

    /// Saturation boost (0-100).
    #[arg(long)]
    saturation: Option<i32>,

    /// Replace all five intensities with random values.
    #[arg(long)]
    randomize: bool,

    /// Seed for the random stages. Derived from the inputs when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Font file for captions (overrides CURSED_MEME_FONT and the project).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path. Defaults to `cursed-meme-<millis>.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also print the PNG as a `data:` URI on stdout.
    #[arg(long)]
    data_uri: bool,

    /// Print diagnostics about the caption font (family name + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct CaptionsArgs {
    /// Phrase table: delusional, shadow or boomer.
    #[arg(long, default_value_t = CaptionMode::Delusional)]
    mode: CaptionMode,

    /// Seed for the pick.
    #[arg(long)]
    seed: Option<u64>,

    /// Use the small local fallback tables instead of a mode.
    #[arg(long, conflicts_with = "parse")]
    fallback: bool,

    /// Parse `TOP: ... BOTTOM: ...` generated text instead of picking.
    #[arg(long)]
    parse: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Captions(args) => cmd_captions(args),
    }
}

fn build_project(args: &RenderArgs) -> anyhow::Result<Project> {
    let mut project = match &args.project {
        Some(p) => Project::from_path(p)?,
        None => Project::default(),
    };

    if let Some(image) = &args.image {
        project.image = Some(image.clone());
    }
    if let Some(top) = &args.top {
        project.captions.top = top.clone();
    }
    if let Some(bottom) = &args.bottom {
        project.captions.bottom = bottom.clone();
    }
    let g = &mut project.glitch;
    for (slot, flag) in [
        (&mut g.rgb_chaos, args.rgb_chaos),
        (&mut g.scanlines, args.scanlines),
        (&mut g.vhs_corruption, args.vhs),
        (&mut g.jpeg_crunch, args.crunch),
        (&mut g.saturation, args.saturation),
    ] {
        if let Some(v) = flag {
            *slot = v;
        }
    }
    if args.seed.is_some() {
        project.seed = args.seed;
    }

    if args.randomize {
        let mut rng = project.seed.map_or_else(SeededRandom::from_entropy, |s| {
            SeededRandom::new(s.rotate_left(17))
        });
        project.glitch = GlitchSettings::randomized(&mut rng);
        eprintln!("randomized glitch settings: {:?}", project.glitch);
    }
    Ok(project)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let project = build_project(&args)?;

    let image_bytes = project
        .image
        .as_ref()
        .map(|p| std::fs::read(p).with_context(|| format!("read image '{}'", p.display())))
        .transpose()?;
    let source = image_bytes
        .as_deref()
        .map(cursed_meme::decode_image)
        .transpose()?;
    let seed = project.effective_seed(image_bytes.as_deref());

    let font_source = match &args.font {
        Some(p) => FontSource::File(p.clone()),
        None => project.font_source(),
    };
    let mut renderer = Renderer::from_font_source(&font_source)?;
    if args.dump_fonts {
        dump_font_diagnostics(&renderer, &font_source);
    }

    let frame = renderer.render_new(
        source.as_ref(),
        &project.captions,
        &project.glitch,
        &mut SeededRandom::new(seed),
    )?;

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(cursed_meme::default_export_name()));
    // The data URI goes out first so a failed file write still leaves the image on stdout.
    if args.data_uri {
        println!("{}", cursed_meme::to_data_uri(&frame)?);
    }
    if let Err(e) = cursed_meme::save_png(&frame, &out) {
        if !args.data_uri {
            eprintln!("hint: re-run with --data-uri to get the image without touching the disk");
        }
        return Err(e).with_context(|| format!("export '{}'", out.display()));
    }
    eprintln!("wrote {} (seed {seed})", out.display());
    Ok(())
}

fn cmd_captions(args: CaptionsArgs) -> anyhow::Result<()> {
    let mut rng = args
        .seed
        .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
    let pair = if let Some(text) = &args.parse {
        cursed_meme::parse_generated(text)
    } else if args.fallback {
        FallbackCaptions.captions(&mut rng)
    } else {
        PresetCaptions::new(args.mode).captions(&mut rng)
    };
    println!("TOP: {}", pair.top);
    println!("BOTTOM: {}", pair.bottom);
    Ok(())
}

fn dump_font_diagnostics(renderer: &Renderer, source: &FontSource) {
    eprintln!("caption font diagnostics:");
    match source {
        FontSource::System => eprintln!("  source:  system"),
        FontSource::File(p) => eprintln!("  source:  {}", p.display()),
    }
    match renderer.painter().font() {
        Some(font) => {
            eprintln!("  family:  {}", font.family());
            eprintln!("  index:   {}", font.index());
            eprintln!("  sha256:  {}", font.sha256_hex());
        }
        None => eprintln!("  family:  <none, captions disabled>"),
    }
}
