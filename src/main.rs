use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use token_sheet::cli::CliArgs;
use token_sheet::render::{render_node, BlockPainter, Frame, PaintContext};
use token_sheet::view::TextScale;
use token_sheet::{Binding, Fill, Node, SheetConfig, SheetExt, StyledText, VStack, View};

const HOST_BACKGROUND: u32 = 0xFF1E1E1E;
const HOST_LINES: usize = 40;

/// Stand-in host screen: a column of document lines on a dark background
struct DocumentView {
    lines: usize,
}

impl View for DocumentView {
    fn node(&self) -> Node {
        let text = (1..=self.lines)
            .map(|n| format!("{:>3}  let value_{} = compute({});", n, n, n))
            .collect::<Vec<_>>()
            .join("\n");
        Node::ZStack {
            layers: vec![
                Fill::new(HOST_BACKGROUND).node(),
                StyledText::new(text).node(),
            ],
        }
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    token_sheet::tracing::init();

    let config = args.load_config().context("Failed to load sheet config")?;
    let position = Binding::new(args.position);

    let footer = args.footer.clone();
    let metrics = config.metrics;
    let screen = DocumentView { lines: HOST_LINES }
        .bottom_sheet_titled(
            &position,
            args.switchable.clone(),
            args.title.as_deref(),
            || footer.map(StyledText::new),
            || {
                VStack::new()
                    .child(StyledText::new("Selection").scale(TextScale::Headline))
                    .child(StyledText::new("3 cursors, 42 characters"))
                    .child(Fill::new(0xFF2D2D30).height(metrics.line_height * 4.0))
            },
        )
        .with_config(config);

    for _ in 0..args.taps {
        screen.overlay().tap_indicator(args.height as f32);
    }

    let tree = screen.node();

    if args.dump_tree {
        let json = serde_json::to_string_pretty(&tree).context("Failed to serialize view tree")?;
        println!("{}", json);
    }

    if let Some(out) = &args.out {
        write_png(&tree, screen.config(), args.width, args.height, out)?;
        tracing::info!("Wrote preview to {}", out.display());
    }

    Ok(())
}

fn write_png(
    tree: &Node,
    config: &SheetConfig,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<()> {
    let mut buffer = vec![0u32; width as usize * height as usize];
    {
        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        let ctx = PaintContext {
            metrics: config.metrics,
            ..PaintContext::default()
        };
        let mut painter = BlockPainter::new(&config.metrics);
        render_node(tree, &mut frame, &ctx, &mut painter);
    }

    let image = image::RgbaImage::from_fn(width, height, |x, y| {
        let argb = buffer[(y * width + x) as usize];
        image::Rgba([(argb >> 16) as u8, (argb >> 8) as u8, argb as u8, 0xFF])
    });
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
