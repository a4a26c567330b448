use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spotlight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite the overlay mask and write it as a PNG.
    Mask(MaskArgs),
    /// Print the resolved focus circle and enter/exit animations as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct ScreenArgs {
    /// Screen width in pixels.
    #[arg(long)]
    width: u32,

    /// Screen height in pixels.
    #[arg(long)]
    height: u32,

    /// Height of the fixed system bar at the top of the screen.
    #[arg(long, default_value_t = 0)]
    top_inset: u32,
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Input overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    screen: ScreenArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input overlay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    screen: ScreenArgs,

    /// Plan for a host without circular reveal support.
    #[arg(long)]
    no_circular: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Mask(args) => cmd_mask(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<spotlight::OverlayConfig> {
    let f = File::open(path).with_context(|| format!("open overlay '{}'", path.display()))?;
    let spec: spotlight::OverlaySpec =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse overlay JSON")?;
    Ok(spec.into_builder().build()?)
}

fn screen_metrics(args: &ScreenArgs) -> anyhow::Result<spotlight::ScreenMetrics> {
    Ok(spotlight::ScreenMetrics::new(
        args.width,
        args.height,
        args.top_inset,
    )?)
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let metrics = screen_metrics(&args.screen)?;
    let (w, h) = metrics
        .mask_size()
        .context("top inset leaves no room for the mask")?;

    let focus = spotlight::compute_focus(config.target_bounds(), config.focus_radius_factor)
        .map(|f| f.to_mask_space(metrics.top_inset));
    let mask = spotlight::composite(w, h, config.background, focus)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    mask.save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let config = read_config(&args.in_path)?;
    let metrics = screen_metrics(&args.screen)?;
    let circular = !args.no_circular;

    let focus = spotlight::compute_focus(config.target_bounds(), config.focus_radius_factor);
    let target_width = config.target_bounds().map(|r| r.abs().width());
    let reveal = || {
        spotlight::RevealParams::new(
            focus,
            target_width,
            (metrics.width, metrics.height),
            config.animation_duration_ms,
        )
    };
    let enter =
        spotlight::AnimationStrategy::resolve(config.enter_animation.as_ref(), circular, reveal);
    let exit =
        spotlight::AnimationStrategy::resolve(config.exit_animation.as_ref(), circular, reveal);

    let plan = serde_json::json!({
        "id": config.id,
        "focus": focus,
        "mask_size": metrics.mask_size(),
        "enter": enter.enter(),
        "exit": exit.exit(),
        "exit_detaches": exit.detaches_on_exit(),
    });
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
