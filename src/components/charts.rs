//! Inline SVG charts for the dashboard summary.
//!
//! DESIGN
//! ======
//! The bar chart of pending counts and the pie chart of their distribution
//! are hand-built SVG rather than a plotting dependency. Geometry helpers
//! are pure so the math is unit tested without a DOM.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

/// Accent palette shared by both charts.
pub const SERIES_COLORS: [&str; 2] = ["#115e59", "#0d9488"];

const PLOT_HEIGHT: f64 = 160.0;
const BASELINE_Y: f64 = 200.0;

/// Height in plot units for `value` scaled against `max`.
fn bar_height(value: usize, max: usize, plot_height: f64) -> f64 {
    if max == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            value as f64 / max as f64 * plot_height
        }
    }
}

/// `"Clients 67%"`-style slice label.
fn percent_label(name: &str, value: usize, total: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let percent = if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    };
    format!("{name} {percent:.0}%")
}

fn polar(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for a pie slice spanning `[start, end)` as fractions of the
/// whole, starting at twelve o'clock. A full-circle span is drawn as two
/// half arcs because an arc whose endpoints coincide renders as nothing.
fn pie_slice_path(start: f64, end: f64, cx: f64, cy: f64, r: f64) -> String {
    let span = end - start;
    if span <= 0.0 {
        return String::new();
    }
    if span >= 1.0 {
        let (x0, y0) = polar(cx, cy, r, 0.0);
        let (x1, y1) = polar(cx, cy, r, 0.5);
        return format!(
            "M {x0:.2} {y0:.2} A {r} {r} 0 1 1 {x1:.2} {y1:.2} A {r} {r} 0 1 1 {x0:.2} {y0:.2} Z"
        );
    }
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    let large_arc = i32::from(span > 0.5);
    format!("M {cx} {cy} L {x0:.2} {y0:.2} A {r} {r} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Pending-count bar chart for the two applicant types.
#[component]
pub fn PendingBarChart(clients: usize, engineers: usize) -> impl IntoView {
    let data = [("Clients", clients), ("Engineers", engineers)];
    let max = clients.max(engineers);

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let height = bar_height(*value, max, PLOT_HEIGHT);
            #[allow(clippy::cast_precision_loss)]
            let x = 70.0 + i as f64 * 160.0;
            let y = BASELINE_Y - height;
            view! {
                <g>
                    <rect
                        x=x
                        y=y
                        width=80.0
                        height=height
                        fill={SERIES_COLORS[i % SERIES_COLORS.len()]}
                    ></rect>
                    <text class="chart__value" x={x + 40.0} y={y - 8.0}>
                        {value.to_string()}
                    </text>
                    <text class="chart__label" x={x + 40.0} y={BASELINE_Y + 20.0}>
                        {*label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--bar" viewBox="0 0 400 240" role="img">
            <line class="chart__axis" x1=40.0 y1=BASELINE_Y x2=360.0 y2=BASELINE_Y></line>
            {bars}
        </svg>
    }
}

/// Share-of-pending pie chart with a percentage legend.
#[component]
pub fn DistributionPieChart(clients: usize, engineers: usize) -> impl IntoView {
    let total = clients + engineers;
    if total == 0 {
        return view! { <p class="chart__empty">"No pending requests yet."</p> }.into_any();
    }

    let data = [("Clients", clients), ("Engineers", engineers)];
    let mut start = 0.0;
    let slices = data
        .iter()
        .enumerate()
        .map(|(i, (_, value))| {
            #[allow(clippy::cast_precision_loss)]
            let fraction = *value as f64 / total as f64;
            let path = pie_slice_path(start, start + fraction, 120.0, 120.0, 80.0);
            start += fraction;
            view! { <path d=path fill={SERIES_COLORS[i % SERIES_COLORS.len()]}></path> }
        })
        .collect_view();

    let legend = data
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            view! {
                <li class="chart__legend-item">
                    <span
                        class="chart__legend-swatch"
                        style=format!("background:{}", SERIES_COLORS[i % SERIES_COLORS.len()])
                    ></span>
                    {percent_label(name, *value, total)}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 240 240" role="img">{slices}</svg>
            <ul class="chart__legend">{legend}</ul>
        </div>
    }
    .into_any()
}
