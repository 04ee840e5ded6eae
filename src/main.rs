use anyhow::{bail, Context, Result};
use argh::FromArgs;
use rectfit::{Point, Rect};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Point and rectangle transforms for layout work.
/// Rects are written `min_x,min_y,width,height` and points `x,y`;
/// put `--` before values that start with a minus sign.
struct Args {
    /// log at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Fit(FitArgs),
    Inset(InsetArgs),
    Divide(DivideArgs),
    Remap(RemapArgs),
    Contains(ContainsArgs),
    Lerp(LerpArgs),
}

#[derive(FromArgs)]
/// Largest rect of the given aspect ratio centered inside a rect.
#[argh(subcommand, name = "fit")]
struct FitArgs {
    /// rect to fit inside
    #[argh(positional)]
    rect: String,
    /// ratio width
    #[argh(positional)]
    ratio_width: f64,
    /// ratio height
    #[argh(positional)]
    ratio_height: f64,
}

#[derive(FromArgs)]
/// Shrink a rect by one amount on every side, or by left top right bottom.
#[argh(subcommand, name = "inset")]
struct InsetArgs {
    /// rect to shrink
    #[argh(positional)]
    rect: String,
    /// left inset, or the inset for every side when given alone
    #[argh(positional)]
    left: f64,
    /// top, right and bottom insets
    #[argh(positional)]
    rest: Vec<f64>,
}

#[derive(FromArgs)]
/// Sub-rect between fractional cut lines.
#[argh(subcommand, name = "divide")]
struct DivideArgs {
    /// rect to divide
    #[argh(positional)]
    rect: String,
    /// left cut as a fraction of the width
    #[argh(positional)]
    left: f64,
    /// top cut as a fraction of the height
    #[argh(positional)]
    top: f64,
    /// right cut as a fraction of the width
    #[argh(positional)]
    right: f64,
    /// bottom cut as a fraction of the height
    #[argh(positional)]
    bottom: f64,
}

#[derive(FromArgs)]
/// Map a point from one rect's space into another's.
#[argh(subcommand, name = "remap")]
struct RemapArgs {
    /// point to map
    #[argh(positional)]
    point: String,
    /// space the point is in
    #[argh(positional)]
    from_rect: String,
    /// space to map into
    #[argh(positional)]
    to_rect: String,
}

#[derive(FromArgs)]
/// Whether a point lies inside a rect, edges included.
#[argh(subcommand, name = "contains")]
struct ContainsArgs {
    /// rect to test against
    #[argh(positional)]
    rect: String,
    /// point to test
    #[argh(positional)]
    point: String,
}

#[derive(FromArgs)]
/// Interpolate between two rects.
#[argh(subcommand, name = "lerp")]
struct LerpArgs {
    /// rect at 0
    #[argh(positional)]
    from_rect: String,
    /// rect at 1
    #[argh(positional)]
    to_rect: String,
    /// position between the two
    #[argh(positional)]
    percent: f64,
}

fn parse_rect(raw: &str) -> Result<Rect> {
    raw.parse().with_context(|| format!("invalid rect `{raw}`"))
}

fn parse_point(raw: &str) -> Result<Point> {
    raw.parse().with_context(|| format!("invalid point `{raw}`"))
}

fn run(command: Command) -> Result<String> {
    let output = match command {
        Command::Fit(args) => {
            let rect = parse_rect(&args.rect)?;
            rect.aspect_ratio(args.ratio_width, args.ratio_height).to_string()
        }
        Command::Inset(args) => {
            let rect = parse_rect(&args.rect)?;
            match args.rest[..] {
                [] => rect.inset_uniform(args.left).to_string(),
                [top, right, bottom] => rect.inset(args.left, top, right, bottom).to_string(),
                _ => bail!(
                    "inset takes either one amount or four, got {}",
                    args.rest.len() + 1
                ),
            }
        }
        Command::Divide(args) => {
            let rect = parse_rect(&args.rect)?;
            rect.divide(args.left, args.top, args.right, args.bottom)
                .to_string()
        }
        Command::Remap(args) => {
            let point = parse_point(&args.point)?;
            let from_rect = parse_rect(&args.from_rect)?;
            let to_rect = parse_rect(&args.to_rect)?;
            point.translate(from_rect, to_rect).to_string()
        }
        Command::Contains(args) => {
            let rect = parse_rect(&args.rect)?;
            let point = parse_point(&args.point)?;
            rect.contains_point(point).to_string()
        }
        Command::Lerp(args) => {
            let a = parse_rect(&args.from_rect)?;
            let b = parse_rect(&args.to_rect)?;
            Rect::interpolate(a, b, args.percent).to_string()
        }
    };

    Ok(output)
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = run(args.command)?;
    tracing::debug!(%output, "done");
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_prints_centered_rect() {
        let output = run(Command::Fit(FitArgs {
            rect: "0,0,160,100".into(),
            ratio_width: 16.0,
            ratio_height: 9.0,
        }))
        .unwrap();

        assert_eq!(output, "Rect{minX=0.0, minY=5.0, width=160.0, height=90.0}");
    }

    #[test]
    fn inset_accepts_one_or_four_amounts() {
        let uniform = run(Command::Inset(InsetArgs {
            rect: "0,0,10,10".into(),
            left: 2.0,
            rest: vec![],
        }))
        .unwrap();
        assert_eq!(uniform, Rect::from_top_left(2.0, 2.0, 6.0, 6.0).to_string());

        let sided = run(Command::Inset(InsetArgs {
            rect: "0,0,10,10".into(),
            left: 1.0,
            rest: vec![2.0, 3.0, 4.0],
        }))
        .unwrap();
        assert_eq!(sided, Rect::from_top_left(1.0, 2.0, 6.0, 4.0).to_string());

        let partial = run(Command::Inset(InsetArgs {
            rect: "0,0,10,10".into(),
            left: 1.0,
            rest: vec![2.0],
        }));
        assert_eq!(
            partial.unwrap_err().to_string(),
            "inset takes either one amount or four, got 2"
        );
    }

    #[test]
    fn remap_and_contains() {
        let remapped = run(Command::Remap(RemapArgs {
            point: "3,4".into(),
            from_rect: "0,0,10,10".into(),
            to_rect: "0,0,100,100".into(),
        }))
        .unwrap();
        assert_eq!(remapped, "Point{x=30.0, y=40.0}");

        let inside = run(Command::Contains(ContainsArgs {
            rect: "0,0,10,10".into(),
            point: "10,0".into(),
        }))
        .unwrap();
        assert_eq!(inside, "true");
    }

    #[test]
    fn divide_and_lerp() {
        let divided = run(Command::Divide(DivideArgs {
            rect: "10,20,30,40".into(),
            left: 0.0,
            top: 0.0,
            right: 0.5,
            bottom: 1.0,
        }))
        .unwrap();
        assert_eq!(divided, Rect::from_top_left(10.0, 20.0, 15.0, 40.0).to_string());

        let halfway = run(Command::Lerp(LerpArgs {
            from_rect: "2,2,2,2".into(),
            to_rect: "10,10,10,10".into(),
            percent: 0.5,
        }))
        .unwrap();
        assert_eq!(halfway, Rect::from_top_left(6.0, 6.0, 6.0, 6.0).to_string());
    }

    #[test]
    fn bad_rect_reports_context() {
        let err = run(Command::Fit(FitArgs {
            rect: "0,0,160".into(),
            ratio_width: 16.0,
            ratio_height: 9.0,
        }))
        .unwrap_err();

        assert_eq!(err.to_string(), "invalid rect `0,0,160`");
        assert_eq!(
            err.root_cause().to_string(),
            "expected 4 comma separated values, found 3"
        );
    }
}
