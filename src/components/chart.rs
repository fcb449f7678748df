//! Chart Component
//!
//! Grouped bar chart of the overview series using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::ChartRow;

const MEDIAN_COLOR: &str = "#8b5cf6"; // violet-500
const MINIMUM_COLOR: &str = "#a8a29e"; // stone-400

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// One drawable bar, in canvas pixels
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Round the y-axis maximum up to a multiple of 10
pub fn axis_max(rows: &[ChartRow]) -> f64 {
    let max = rows
        .iter()
        .flat_map(|row| [row.median, row.minimum])
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        10.0
    } else {
        (max / 10.0).ceil() * 10.0
    }
}

/// Lay out two bars (median, minimum) per row
pub fn layout_bars(rows: &[ChartRow], width: f64, height: f64) -> Vec<Bar> {
    if rows.is_empty() {
        return Vec::new();
    }

    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = axis_max(rows);

    let group_width = chart_width / rows.len() as f64;
    let bar_width = group_width * 0.35;
    let baseline = MARGIN_TOP + chart_height;

    let mut bars = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.iter().enumerate() {
        let group_x = MARGIN_LEFT + i as f64 * group_width + group_width * 0.15;
        for (j, (value, color)) in [(row.median, MEDIAN_COLOR), (row.minimum, MINIMUM_COLOR)]
            .into_iter()
            .enumerate()
        {
            let bar_height = (value.max(0.0) / max) * chart_height;
            bars.push(Bar {
                x: group_x + j as f64 * bar_width,
                y: baseline - bar_height,
                width: bar_width,
                height: bar_height,
                color,
            });
        }
    }
    bars
}

/// Bar chart of `Median` and `Minimum` per series
#[component]
pub fn BarChart(
    #[prop(into)]
    rows: Signal<Vec<ChartRow>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when data changes
    create_effect(move |_| {
        let rows = rows.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &rows);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="640"
                height="320"
                class="w-full h-64 rounded-lg"
            />

            // Legend
            <div class="flex justify-center gap-4 mt-2 text-sm text-stone-600">
                <LegendItem color=MEDIAN_COLOR label="Median" />
                <LegendItem color=MINIMUM_COLOR label="Minimum" />
            </div>
        </div>
    }
}

#[component]
fn LegendItem(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-sm" style=format!("background-color: {}", color) />
            <span>{label}</span>
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, rows: &[ChartRow]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if rows.is_empty() {
        ctx.set_fill_style(&"#78716c".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No chart data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    // Horizontal grid lines with y-axis labels
    let max = axis_max(rows);
    ctx.set_stroke_style(&"#e7e5e4".into()); // stone-200
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&"#78716c".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 10.0, y + 4.0);
    }

    for bar in layout_bars(rows, width, height) {
        ctx.set_fill_style(&bar.color.into());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }

    // Series names under each group
    let group_width = (width - MARGIN_LEFT - MARGIN_RIGHT) / rows.len() as f64;
    ctx.set_fill_style(&"#44403c".into());
    for (i, row) in rows.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * group_width + group_width * 0.15;
        let _ = ctx.fill_text(&row.name, x, height - 15.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, median: f64, minimum: f64) -> ChartRow {
        ChartRow { name: name.to_string(), median, minimum }
    }

    #[test]
    fn test_axis_max_rounds_up() {
        assert_eq!(axis_max(&[row("a", 39.31, 12.0)]), 40.0);
        assert_eq!(axis_max(&[row("a", 40.0, 40.0)]), 40.0);
        assert_eq!(axis_max(&[]), 10.0);
    }

    #[test]
    fn test_layout_two_bars_per_row() {
        let rows = vec![row("T2-R2AW1", 40.0, 40.0), row("T1-R1AW1", 39.23, 12.59)];
        let bars = layout_bars(&rows, 640.0, 320.0);
        assert_eq!(bars.len(), 4);

        // full-height bar reaches the top margin
        assert!((bars[0].y - MARGIN_TOP).abs() < 1e-9);
        // bars share the baseline
        let baseline = 320.0 - MARGIN_BOTTOM;
        for bar in &bars {
            assert!((bar.y + bar.height - baseline).abs() < 1e-9);
        }
        // the smaller minimum is a shorter bar
        assert!(bars[3].height < bars[2].height);
        assert_eq!(bars[2].color, MEDIAN_COLOR);
        assert_eq!(bars[3].color, MINIMUM_COLOR);
    }

    #[test]
    fn test_layout_empty() {
        assert!(layout_bars(&[], 640.0, 320.0).is_empty());
    }
}
