//! Write `match.html` showing a colormap next to its rendition with the
//! colors of a 256-color terminal, for every metric.
//!
//! Usage: `cargo run --example match -- [COLORMAP] [N]` (defaults to
//! `Reds` and 16 colors).  Set `RUST_LOG=colormap_match=debug` to see
//! what the library does.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use colormap_match::{colorcycle, colormap, match_palette, remap, to_hex,
                     Metric, Weights};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>", to_hex(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
              .unwrap_or_else(|_| "colormap_match=info,match=info".into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Reds".to_string());
    let n: usize = match args.next() { Some(n) => n.parse()?, None => 16 };

    let cmap: Vec<RGB8> = colormap(&name, n)?;
    let xterm: Vec<RGB8> = colorcycle("xterm")?;
    let width = (640 / n.max(1)).max(1) as u32;

    let mut fh = BufWriter::new(File::create("match.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>colormap-match: {name} on xterm</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>{name} ({n} colors)</h3>")?;
    table_of_colors(&mut fh, &cmap, width, "original")?;

    let metrics = [("euclidean", Metric::Euclidean),
                   ("fast perceptual", Metric::FastPerceptual),
                   ("perceptual", Metric::Perceptual),
                   ("green-weighted", Metric::Weighted(Weights::new(2., 4., 3.)?))];
    for exclusive in [false, true] {
        writeln!(fh, "<h3>xterm, {}</h3>",
                 if exclusive { "each color used once" } else { "shared" })?;
        for (label, metric) in metrics {
            let idx = match_palette(&cmap, &xterm, metric, exclusive)?;
            let colors = remap(&idx, &xterm)?;
            let comment = format!("{label}: {}", idx.iter()
                                  .map(|i| i.to_string())
                                  .collect::<Vec<_>>().join(" "));
            table_of_colors(&mut fh, &colors, width, &comment)?;
        }
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    info!(colormap = %name, n, "wrote match.html");
    Ok(())
}
