use crate::dashboard::services::segmentation::{StatusSegment, StatusSummary};
use owo_colors::{DynColors, OwoColorize};

/// Total character width of the rendered status strip.
const STRIP_WIDTH: usize = 72;

/// Dark label color used on the pastel segment backgrounds.
const LABEL_COLOR: DynColors = DynColors::Rgb(0x00, 0x32, 0x62);

/// SummaryFormatter adapter rendering the status strip
///
/// Each segment becomes a block of colored cells sized by its display
/// fraction. The fraction already carries the minimum-width floor, so even
/// rare statuses stay legible; the label line keeps the exact counts.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn format(summary: &StatusSummary) -> String {
        let mut output = String::new();

        if summary.total == 0 {
            output.push_str("No packages loaded\n");
            return output;
        }

        output.push_str(&Self::render_strip(&summary.segments));
        output.push('\n');
        output.push_str(&Self::render_labels(&summary.segments));
        output.push('\n');
        output.push_str(&format!("{} total packages\n", summary.total));
        output
    }

    fn render_strip(segments: &[StatusSegment]) -> String {
        let mut strip = String::new();
        for segment in segments {
            // Width comes from the full-precision fraction, never the
            // one-decimal display percentage
            let cells = ((segment.fraction * STRIP_WIDTH as f64).round() as usize).max(1);
            let block = " ".repeat(cells);
            strip.push_str(&format!("{}", block.on_color(hex_color(segment.color))));
        }
        strip
    }

    fn render_labels(segments: &[StatusSegment]) -> String {
        segments
            .iter()
            .map(|segment| {
                let swatch = format!("{}", "■".color(hex_color(segment.color)));
                format!(
                    "{} {} ({}) {:.1}%",
                    swatch,
                    segment.status.color(LABEL_COLOR),
                    segment.count,
                    segment.percentage()
                )
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Parses a `#RRGGBB` hex color into a terminal color, falling back to a
/// neutral gray on malformed input.
fn hex_color(hex: &str) -> DynColors {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return DynColors::Rgb(0xCB, 0xD5, 0xE1);
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).unwrap_or(0xCB)
    };
    DynColors::Rgb(channel(0..2), channel(2..4), channel(4..6))
}
