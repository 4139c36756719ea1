use anyhow::{Context, Result};
use clap::Parser;
use prism_core::Scene;
use prism_renderer::{render, render_parallel, save_image, Camera, RenderConfig};
use std::path::PathBuf;

/// Largest image the CLI will allocate (8192 x 8192 pixels).
const MAX_PIXELS: u64 = 1 << 26;

/// Render a scene of spheres, planes and cylinders to an image.
#[derive(Parser, Debug)]
#[command(name = "prism", version)]
struct Args {
    /// Scene file (JSON). Renders the built-in showcase scene when omitted.
    #[arg(long, short)]
    scene: Option<PathBuf>,

    /// Output image (.png or .ppm)
    #[arg(long, short, default_value = "output.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Reflection bounces after the primary hit
    #[arg(long, default_value_t = 2)]
    reflection_depth: u32,

    /// Refraction bounces after the primary hit
    #[arg(long, default_value_t = 2)]
    refraction_depth: u32,

    #[arg(long, default_value_t = 2.0)]
    gamma: f32,

    #[arg(long, default_value_t = prism_renderer::DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Render on the main thread without buckets
    #[arg(long)]
    sequential: bool,

    /// Write the scene as JSON to this path and exit
    #[arg(long)]
    dump_scene: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn render_config(&self) -> Result<RenderConfig> {
        anyhow::ensure!(
            self.gamma.is_finite() && self.gamma > 0.0,
            "Gamma must be a positive number, got {}",
            self.gamma
        );
        Ok(RenderConfig {
            reflection_depth: self.reflection_depth,
            refraction_depth: self.refraction_depth,
            gamma: self.gamma,
            bucket_size: self.bucket_size,
            ..RenderConfig::default()
        })
    }

    fn camera(&self) -> Result<Camera> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "Image size must be positive, got {}x{}",
            self.width,
            self.height
        );
        anyhow::ensure!(
            u64::from(self.width) * u64::from(self.height) <= MAX_PIXELS,
            "Image size {}x{} exceeds the {} pixel limit",
            self.width,
            self.height,
            MAX_PIXELS
        );
        Ok(Camera::new().with_resolution(self.width, self.height))
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => Scene::load(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => {
                let scene = Scene::showcase();
                scene.validate().context("Built-in scene is invalid")?;
                Ok(scene)
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("Starting Prism");

    let scene = args.load_scene()?;
    log::info!(
        "Scene '{}': {} lights, {} primitives",
        scene.name,
        scene.light_count(),
        scene.primitive_count()
    );

    if let Some(path) = &args.dump_scene {
        scene
            .save(path)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
        return Ok(());
    }

    let camera = args.camera()?;
    let config = args.render_config()?;

    let image = if args.sequential {
        render(&scene, &camera, &config)
    } else {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()
            .context("Failed to start render threads")?
            .install(|| render_parallel(&scene, &camera, &config))
    };

    save_image(&image, &args.output, config.gamma)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
