//! Scatter plot of the plane as inline SVG.
//!
//! One plane unit is one pixel. The SVG carries fixed `width`/`height`
//! attributes and the stylesheet forbids scaling it, so a point drawn at
//! `(x, y)` sits at the same pixel offset whatever the window size.

use dioxus::prelude::*;
use friendmap_domain::{LocationRecord, PlanePoint, PLANE_MAX, PLANE_MIN};

pub const MAJOR_GRID: i64 = 50;
pub const MINOR_GRID: i64 = 10;

pub const MARGIN_LEFT: i64 = 60;
pub const MARGIN_RIGHT: i64 = 20;
pub const MARGIN_TOP: i64 = 50;
pub const MARGIN_BOTTOM: i64 = 60;

const PLOT_SIZE: i64 = PLANE_MAX - PLANE_MIN;
pub const SVG_WIDTH: i64 = MARGIN_LEFT + PLOT_SIZE + MARGIN_RIGHT;
pub const SVG_HEIGHT: i64 = MARGIN_TOP + PLOT_SIZE + MARGIN_BOTTOM;

/// Distance between a point and the baseline of its label.
const LABEL_OFFSET: i64 = 10;
const POINT_RADIUS: f64 = 3.5;

const TITLE: &str = "Friend Houses Location Map";

fn pixel_x(x: i64) -> i64 {
    MARGIN_LEFT + (x - PLANE_MIN)
}

fn pixel_y(y: i64) -> i64 {
    MARGIN_TOP + (PLANE_MAX - y)
}

/// Pixel position of a plane point inside the SVG. The y axis points up.
pub fn to_pixel(point: PlanePoint) -> (i64, i64) {
    (pixel_x(point.x.value()), pixel_y(point.y.value()))
}

struct Segment {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
}

/// One vertical and one horizontal line per grid value.
fn grid_segments(values: impl Iterator<Item = i64>) -> Vec<Segment> {
    let (left, right) = (pixel_x(PLANE_MIN), pixel_x(PLANE_MAX));
    let (top, bottom) = (pixel_y(PLANE_MAX), pixel_y(PLANE_MIN));
    values
        .flat_map(|value| {
            let (x, y) = (pixel_x(value), pixel_y(value));
            [
                Segment { x1: x, y1: top, x2: x, y2: bottom },
                Segment { x1: left, y1: y, x2: right, y2: y },
            ]
        })
        .collect()
}

fn grid_values(step: i64) -> impl Iterator<Item = i64> {
    (PLANE_MIN..=PLANE_MAX).step_by(step as usize)
}

struct Tick {
    value: i64,
    x: i64,
    y: i64,
}

struct Marker {
    key: String,
    name: String,
    tooltip: String,
    x: i64,
    y: i64,
    label_y: i64,
}

/// Props for the Plot component
#[derive(Props, Clone, PartialEq)]
pub struct PlotProps {
    /// Records to draw; never empty, the empty state is rendered instead
    pub records: Vec<LocationRecord>,
}

#[component]
pub fn Plot(props: PlotProps) -> Element {
    let markers: Vec<Marker> = props
        .records
        .iter()
        .map(|record| {
            let (x, y) = to_pixel(record.point);
            Marker {
                key: record.id.to_string(),
                name: record.name.to_string(),
                tooltip: format!("{} {}", record.name, record.point),
                x,
                y,
                label_y: y - LABEL_OFFSET,
            }
        })
        .collect();

    let minor = grid_segments(grid_values(MINOR_GRID).filter(|v| v % MAJOR_GRID != 0));
    let major = grid_segments(grid_values(MAJOR_GRID));
    let ticks: Vec<Tick> = grid_values(MAJOR_GRID)
        .map(|value| Tick {
            value,
            x: pixel_x(value),
            y: pixel_y(value) + 3,
        })
        .collect();

    let center_x = pixel_x(PLANE_MIN) + PLOT_SIZE / 2;
    let center_y = pixel_y(PLANE_MAX) + PLOT_SIZE / 2;
    let title_y = MARGIN_TOP - 22;
    let tick_below = pixel_y(PLANE_MIN) + 16;
    let tick_beside = MARGIN_LEFT - 8;
    let axis_label_y = pixel_y(PLANE_MIN) + 44;

    rsx! {
        svg {
            class: "plot",
            width: "{SVG_WIDTH}",
            height: "{SVG_HEIGHT}",
            view_box: "0 0 {SVG_WIDTH} {SVG_HEIGHT}",
            role: "img",
            "aria-label": TITLE,
            rect { width: "{SVG_WIDTH}", height: "{SVG_HEIGHT}", fill: "#f8f9fa" }
            text {
                class: "plot-title",
                x: "{center_x}",
                y: "{title_y}",
                text_anchor: "middle",
                font_size: "18",
                font_weight: "bold",
                fill: "#333333",
                "{TITLE}"
            }
            g {
                class: "grid-minor",
                stroke: "#dddddd",
                stroke_width: "0.5",
                stroke_opacity: "0.5",
                stroke_dasharray: "1 2",
                for segment in minor.iter() {
                    line { x1: "{segment.x1}", y1: "{segment.y1}", x2: "{segment.x2}", y2: "{segment.y2}" }
                }
            }
            g {
                class: "grid-major",
                stroke: "#cccccc",
                stroke_width: "0.7",
                stroke_opacity: "0.7",
                for segment in major.iter() {
                    line { x1: "{segment.x1}", y1: "{segment.y1}", x2: "{segment.x2}", y2: "{segment.y2}" }
                }
            }
            g { class: "ticks", font_size: "10", fill: "#555555",
                for tick in ticks.iter() {
                    text { x: "{tick.x}", y: "{tick_below}", text_anchor: "middle", "{tick.value}" }
                    text { x: "{tick_beside}", y: "{tick.y}", text_anchor: "end", "{tick.value}" }
                }
            }
            text {
                class: "axis-label",
                x: "{center_x}",
                y: "{axis_label_y}",
                text_anchor: "middle",
                font_size: "12",
                fill: "#333333",
                "X Coordinate"
            }
            text {
                class: "axis-label",
                x: "18",
                y: "{center_y}",
                text_anchor: "middle",
                font_size: "12",
                fill: "#333333",
                transform: "rotate(-90 18 {center_y})",
                "Y Coordinate"
            }
            // Points first, labels after, so labels are never hidden under a marker.
            g { class: "points",
                for marker in markers.iter() {
                    circle {
                        key: "{marker.key}",
                        cx: "{marker.x}",
                        cy: "{marker.y}",
                        r: "{POINT_RADIUS}",
                        fill: "#4285F4",
                        fill_opacity: "0.9",
                        stroke: "white",
                        stroke_width: "1.5",
                        title { "{marker.tooltip}" }
                    }
                }
            }
            g { class: "labels", text_anchor: "middle", font_size: "11", font_weight: "bold", fill: "#333333",
                for marker in markers.iter() {
                    text { key: "{marker.key}", x: "{marker.x}", y: "{marker.label_y}", "{marker.name}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendmap_domain::{LocationName, NewLocation, RecordId};

    fn record(key: &str, name: &str, x: i64, y: i64) -> LocationRecord {
        NewLocation::new(LocationName::new(name).unwrap(), PlanePoint::clamped(x, y))
            .into_record(RecordId::new(key).unwrap())
    }

    fn render(records: Vec<LocationRecord>) -> String {
        let mut dom = VirtualDom::new_with_props(Plot, PlotProps { records });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn group<'a>(svg: &'a str, class: &str) -> &'a str {
        let marker = format!(r#"<g class="{class}""#);
        svg.split(marker.as_str())
            .nth(1)
            .and_then(|rest| rest.split("</g>").next())
            .unwrap()
    }

    #[test]
    fn corners_map_one_to_one() {
        assert_eq!(to_pixel(PlanePoint::clamped(0, 0)), (60, 550));
        assert_eq!(to_pixel(PlanePoint::clamped(500, 500)), (560, 50));
        assert_eq!(to_pixel(PlanePoint::clamped(100, 200)), (160, 350));
    }

    #[test]
    fn equal_aspect_ratio() {
        let (x0, y0) = to_pixel(PlanePoint::clamped(0, 0));
        let (x1, y1) = to_pixel(PlanePoint::clamped(10, 10));
        assert_eq!(x1 - x0, 10);
        assert_eq!(y0 - y1, 10);
    }

    #[test]
    fn has_fixed_pixel_size() {
        let svg = render(vec![record("-Na", "Alice", 100, 200)]);
        assert!(svg.contains(r#"width="580""#));
        assert!(svg.contains(r#"height="610""#));
    }

    #[test]
    fn one_labeled_point_per_record() {
        let svg = render(vec![
            record("-Na", "Alice", 100, 200),
            record("-Nb", "Bob", 300, 400),
        ]);

        let points = group(&svg, "points");
        assert_eq!(points.matches("<circle").count(), 2);
        assert!(points.contains(r#"cx="160""#) && points.contains(r#"cy="350""#));
        assert!(points.contains(r#"cx="360""#) && points.contains(r#"cy="150""#));

        // Labels sit directly above their point.
        let labels = group(&svg, "labels");
        assert!(labels.contains(r#"y="340""#));
        assert!(labels.contains(r#"y="140""#));
        assert!(labels.contains(">Alice</text>"));
        assert!(labels.contains(">Bob</text>"));
    }

    #[test]
    fn grid_has_major_and_minor_lines() {
        let svg = render(vec![record("-Na", "Alice", 0, 0)]);

        // 11 major values (0..=500 by 50), 40 remaining minor values, two axes each.
        assert_eq!(group(&svg, "grid-major").matches("<line").count(), 22);
        assert_eq!(group(&svg, "grid-minor").matches("<line").count(), 80);
    }

    #[test]
    fn names_are_escaped() {
        let svg = render(vec![record("-Na", "<b>&co</b>", 10, 10)]);
        assert!(!svg.contains("<b>"));
        assert!(svg.contains("&lt;b&gt;&amp;co&lt;/b&gt;"));
    }
}
