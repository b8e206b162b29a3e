use argh::FromArgs;
use std::path::PathBuf;

use pixbox::imgproc::filter::NeighborhoodSize;
use pixbox::imgproc::inspect::PixelInfo;
use pixbox::imgproc::parallel::ExecutionStrategy;
use pixbox::imgproc::pipeline::{self, FilterParams};
use pixbox::io::functional as F;
use pixbox::io::validate::UploadPolicy;

/// A pixel position given as `x,y`.
#[derive(Debug, Clone, Copy)]
struct PixelCoord {
    x: usize,
    y: usize,
}

impl std::str::FromStr for PixelCoord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid coordinate '{v}': {e}"))
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

#[derive(FromArgs)]
/// Smooth an image with a neighborhood averaging filter
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output png
    #[argh(option, short = 'o', default = "PathBuf::from(F::DEFAULT_OUTPUT_FILENAME)")]
    output_path: PathBuf,

    /// neighborhood size, one of 3, 5, 7 or 9
    #[argh(option, short = 'k', default = "NeighborhoodSize::default()")]
    kernel_size: NeighborhoodSize,

    /// convert to grayscale before smoothing
    #[argh(switch, short = 'g')]
    grayscale: bool,

    /// run on the current thread only
    #[argh(switch)]
    serial: bool,

    /// print the source and result pixel at x,y
    #[argh(option)]
    inspect: Option<PixelCoord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // reject files that are not images or are too large
    let format = UploadPolicy::default().validate_file(&args.image_path)?;
    log::info!("input format: {:?}", format);

    let src = F::read_image_any_rgba8(&args.image_path)?;
    log::info!("loaded image: {}", src.size());

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::ParallelRows
    };
    let params = FilterParams::new(args.grayscale, args.kernel_size).with_strategy(strategy);
    log::info!(
        "filter: {} ({}), grayscale: {}",
        params.neighborhood,
        params.neighborhood.description(),
        params.grayscale
    );

    let start = std::time::Instant::now();
    let out = pipeline::process(&src, &params)?;
    log::info!("processed in {:?}", start.elapsed());

    if let Some(coord) = args.inspect {
        println!("source: {}", PixelInfo::from_image(&src, coord.x, coord.y)?);
        println!("result: {}", PixelInfo::from_image(&out, coord.x, coord.y)?);
    }

    F::write_image_png_rgba8(&args.output_path, &out)?;
    println!("saved {}", args.output_path.display());

    Ok(())
}
