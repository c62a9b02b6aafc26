use crate::annotations::bounding_box::BoundingBox;
use crate::annotations::detection::{Detection, Geometry};
use crate::annotations::point::{Point, centroid};
use crate::rendering::palette::color_for_index;
use crate::rendering::scale::ScaleContext;
use crate::rendering::style::{RenderStyle, label_text};
use crate::taxonomy::resolver::resolve;
use ab_glyph::PxScale;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::{
    Blend, draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut,
    draw_line_segment_mut, draw_polygon_mut, draw_text_mut, text_size,
};
use imageproc::point::Point as PixelPoint;
use imageproc::rect::Rect;
use itertools::Itertools;
use log::debug;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const LABEL_TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Bound on scaled draw coordinates. Upstream records can carry arbitrary
/// numbers; everything lands well inside i32 range so the rasterizer's
/// scanline arithmetic cannot overflow. Far beyond any real surface size.
const MAX_DRAW_COORD: f32 = 1.0e4;

type Canvas = Blend<RgbaImage>;

/// Draws a detection list onto the overlay surface.
///
/// The overlay is fully cleared first, so rendering an empty list leaves a
/// blank surface rather than a stale one. Coordinates are scaled from the
/// original image's intrinsic size to the overlay's current size, recomputed
/// on every call. Detections draw in input order; callers wanting the
/// highest confidence on top sort beforehand. The palette color comes from
/// the detection's position in the list, not its class, so re-rendering the
/// same list is stable and adjacent same-class detections stay
/// distinguishable.
pub fn render_detections(
    overlay: &mut RgbaImage,
    detections: &[Detection],
    image_width: u32,
    image_height: u32,
    style: &RenderStyle,
) {
    overlay.pixels_mut().for_each(|pixel| *pixel = TRANSPARENT);
    let scale = ScaleContext::new(image_width, image_height, overlay.width(), overlay.height());
    debug!(
        "rendering {} detection(s) at scale {}x{}",
        detections.len(),
        scale.scale_x,
        scale.scale_y
    );

    // Translucent fills composite over whatever is already drawn, so all
    // drawing goes through an alpha-blending canvas.
    let mut canvas = Blend(std::mem::replace(overlay, RgbaImage::new(0, 0)));
    for (index, detection) in detections.iter().enumerate() {
        let color = color_for_index(index);
        let info = resolve(&detection.class_label);
        let label = label_text(&info.display_name, detection.confidence);
        match &detection.geometry {
            Geometry::Polygon(points) if !points.is_empty() => {
                draw_polygon_annotation(&mut canvas, points, scale, color, &label, style);
            }
            Geometry::Box(bounding_box) => {
                draw_box_annotation(&mut canvas, bounding_box, scale, color, &label, style);
            }
            // Not drawable; counted upstream, skipped here.
            Geometry::Polygon(_) | Geometry::Missing => {}
        }
    }
    *overlay = canvas.0;
}

fn draw_polygon_annotation(
    canvas: &mut Canvas,
    points: &[Point],
    scale: ScaleContext,
    color: Rgb<u8>,
    label: &str,
    style: &RenderStyle,
) {
    let scaled: Vec<Point> = points
        .iter()
        .map(|point| clamp_point(scale.apply(*point)))
        .collect();
    let outline = with_alpha(color, 255);
    match scaled.len() {
        // A one-point path would rasterize to nothing; draw a dot instead.
        1 => {
            let center = (scaled[0].x.round() as i32, scaled[0].y.round() as i32);
            draw_filled_circle_mut(canvas, center, style.stroke_width.ceil() as i32, outline);
        }
        2 => {
            draw_thick_segment(canvas, scaled[0], scaled[1], style.stroke_width, outline);
        }
        _ => {
            fill_polygon(canvas, &scaled, with_alpha(color, style.polygon_fill_alpha));
            for (start, end) in scaled.iter().copied().circular_tuple_windows() {
                draw_thick_segment(canvas, start, end, style.stroke_width, outline);
            }
        }
    }
    let anchor = clamp_point(scale.apply(centroid(points)));
    draw_label(canvas, label, anchor, color, style);
}

fn draw_box_annotation(
    canvas: &mut Canvas,
    bounding_box: &BoundingBox,
    scale: ScaleContext,
    color: Rgb<u8>,
    label: &str,
    style: &RenderStyle,
) {
    let left = clamp_coord(bounding_box.left() * scale.scale_x);
    let top = clamp_coord(bounding_box.top() * scale.scale_y);
    let width = clamp_coord(bounding_box.width * scale.scale_x).round();
    let height = clamp_coord(bounding_box.height * scale.scale_y).round();

    // Boxes that collapse below a pixel are not drawable, but their label
    // still is.
    if width >= 1.0 && height >= 1.0 {
        let rect = Rect::at(left.round() as i32, top.round() as i32)
            .of_size(width as u32, height as u32);
        draw_filled_rect_mut(canvas, rect, with_alpha(color, style.box_fill_alpha));
        stroke_rect(
            canvas,
            rect,
            style.stroke_width.round().max(1.0) as i32,
            with_alpha(color, 255),
        );
    }

    let anchor = Point {
        x: clamp_coord(bounding_box.center_x * scale.scale_x),
        y: top - style.box_label_offset,
    };
    draw_label(canvas, label, anchor, color, style);
}

/// Label chip: a rounded rectangle in the detection color, centered
/// horizontally on the anchor with its bottom edge at the anchor, and the
/// text in white centered inside. Chips near the surface edge clip rather
/// than reposition.
fn draw_label(canvas: &mut Canvas, text: &str, anchor: Point, color: Rgb<u8>, style: &RenderStyle) {
    let chip_width = style.measure_text(text) + 2 * style.chip_padding;
    let chip_height = style.chip_height;
    let x0 = (anchor.x - chip_width as f32 / 2.0).round() as i32;
    let y0 = (anchor.y - chip_height as f32).round() as i32;
    draw_rounded_rect(
        canvas,
        x0,
        y0,
        chip_width,
        chip_height,
        style.chip_corner_radius,
        with_alpha(color, 255),
    );
    if let Some(font) = &style.font {
        let scale = PxScale::from(style.font_scale);
        let (text_width, text_height) = text_size(scale, font, text);
        let text_x = x0 + chip_width.saturating_sub(text_width) as i32 / 2;
        let text_y = y0 + chip_height.saturating_sub(text_height) as i32 / 2;
        draw_text_mut(canvas, LABEL_TEXT_COLOR, text_x, text_y, scale, font, text);
    }
}

/// Filled polygon interior. The rasterizer rejects an empty path or one
/// whose first and last vertices coincide, so the vertex list is tidied
/// first; shapes that collapse below a triangle are left to the outline
/// pass.
fn fill_polygon(canvas: &mut Canvas, points: &[Point], fill: Rgba<u8>) {
    let mut path: Vec<PixelPoint<i32>> = points
        .iter()
        .map(|point| PixelPoint::new(point.x.round() as i32, point.y.round() as i32))
        .collect();
    path.dedup();
    while path.len() > 1 && path.last() == path.first() {
        path.pop();
    }
    if path.len() >= 3 {
        draw_polygon_mut(canvas, &path, fill);
    }
}

/// A line segment with width, drawn as a filled quad spanning the stroke
/// perpendicular to the segment. Zero-length segments degrade to a dot.
fn draw_thick_segment(canvas: &mut Canvas, start: Point, end: Point, width: f32, color: Rgba<u8>) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length < f32::EPSILON {
        let center = (start.x.round() as i32, start.y.round() as i32);
        draw_filled_circle_mut(canvas, center, (width / 2.0).ceil() as i32, color);
        return;
    }
    let offset_x = -dy / length * width / 2.0;
    let offset_y = dx / length * width / 2.0;
    let quad = [
        Point { x: start.x + offset_x, y: start.y + offset_y },
        Point { x: end.x + offset_x, y: end.y + offset_y },
        Point { x: end.x - offset_x, y: end.y - offset_y },
        Point { x: start.x - offset_x, y: start.y - offset_y },
    ];
    fill_polygon(canvas, &quad, color);
    // Sub-pixel quads can collapse when rounded; the 1px line keeps the
    // stroke visible.
    draw_line_segment_mut(canvas, (start.x, start.y), (end.x, end.y), color);
}

/// Rectangle outline with width, drawn as 1px rects stepping inward.
fn stroke_rect(canvas: &mut Canvas, rect: Rect, stroke_width: i32, color: Rgba<u8>) {
    draw_hollow_rect_mut(canvas, rect, color);
    for inset in 1..stroke_width {
        let width = rect.width().saturating_sub(2 * inset as u32);
        let height = rect.height().saturating_sub(2 * inset as u32);
        if width == 0 || height == 0 {
            break;
        }
        let inner = Rect::at(rect.left() + inset, rect.top() + inset).of_size(width, height);
        draw_hollow_rect_mut(canvas, inner, color);
    }
}

/// Rounded rectangle from two spanning rects and four corner discs. A
/// radius that doesn't fit falls back to a plain rectangle.
fn draw_rounded_rect(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    width: u32,
    height: u32,
    radius: i32,
    color: Rgba<u8>,
) {
    if width == 0 || height == 0 {
        return;
    }
    let radius = radius.clamp(0, ((width / 2).min(height / 2)) as i32);
    if radius == 0 {
        draw_filled_rect_mut(canvas, Rect::at(x0, y0).of_size(width, height), color);
        return;
    }
    let diameter = 2 * radius as u32;
    if height > diameter {
        let band = Rect::at(x0, y0 + radius).of_size(width, height - diameter);
        draw_filled_rect_mut(canvas, band, color);
    }
    if width > diameter {
        let band = Rect::at(x0 + radius, y0).of_size(width - diameter, height);
        draw_filled_rect_mut(canvas, band, color);
    }
    let right = x0 + width as i32 - 1 - radius;
    let bottom = y0 + height as i32 - 1 - radius;
    for (cx, cy) in [
        (x0 + radius, y0 + radius),
        (right, y0 + radius),
        (x0 + radius, bottom),
        (right, bottom),
    ] {
        draw_filled_circle_mut(canvas, (cx, cy), radius, color);
    }
}

fn with_alpha(color: Rgb<u8>, alpha: u8) -> Rgba<u8> {
    let Rgb([r, g, b]) = color;
    Rgba([r, g, b, alpha])
}

fn clamp_point(point: Point) -> Point {
    Point {
        x: clamp_coord(point.x),
        y: clamp_coord(point.y),
    }
}

fn clamp_coord(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-MAX_DRAW_COORD, MAX_DRAW_COORD)
    } else {
        0.0
    }
}
