//! Standalone HTML export with an embedded SVG rendering of the plan.
//!
//! The generated page is self contained: an info header plus one `<svg>`
//! element sized to the plan image, with the floor boundary drawn as a
//! dashed outline and every room as a filled polygon with a centered label.

use floormark_core::{polygon_centroid, Point, MIN_POLYGON_POINTS};

use crate::document::{Document, ImageInfo};
use crate::serialization::PlanInfo;

/// Renders `document` as a standalone HTML page.
///
/// `info` carries display names for the building and floor; `image` gives
/// the SVG canvas size in pixels.
pub fn render_plan_html(document: &Document, info: &PlanInfo, image: ImageInfo) -> String {
    let building = escape_text(&info.building_name);
    let floor = escape_text(&info.floor_name);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"ru\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <title>План этажа - {building} - {floor}</title>\n"
    ));
    html.push_str("    <style>\n");
    html.push_str(
        "        body { margin: 0; padding: 20px; font-family: Arial, sans-serif; background: #f5f5f5; }\n",
    );
    html.push_str(
        "        .container { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); max-width: 100%; overflow: auto; }\n",
    );
    html.push_str("        h1 { margin-top: 0; color: #333; }\n");
    html.push_str("        .info { margin-bottom: 20px; color: #666; }\n");
    html.push_str("        svg { border: 1px solid #ddd; background: white; }\n");
    html.push_str("    </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str("        <h1>План этажа</h1>\n");
    html.push_str("        <div class=\"info\">\n");
    html.push_str(&format!("            <div>Здание: {building}</div>\n"));
    html.push_str(&format!("            <div>Этаж: {floor}</div>\n"));
    html.push_str(&format!(
        "            <div>Комнат размечено: {}</div>\n",
        document.rooms.len()
    ));
    html.push_str("        </div>\n");
    html.push_str(&render_plan_svg(document, image));
    html.push_str("    </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

fn render_plan_svg(document: &Document, image: ImageInfo) -> String {
    let width = image.width;
    let height = image.height;

    let mut svg = String::new();
    svg.push_str(&format!(
        "        <svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    ));

    if document.boundary.len() >= MIN_POLYGON_POINTS {
        svg.push_str("            <!-- Контур этажа -->\n");
        svg.push_str(&format!(
            "            <polygon points=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"4\" stroke-dasharray=\"8,6\" opacity=\"0.8\"/>\n",
            polygon_points_attr(document.boundary.points())
        ));
    }

    for (index, room) in document.rooms.iter().enumerate() {
        if room.points.len() < MIN_POLYGON_POINTS {
            continue;
        }
        let name = if room.name.is_empty() {
            format!("Room {}", index + 1)
        } else {
            escape_text(&room.name)
        };
        let room_type = escape_text(&room.room_type);

        svg.push_str(&format!(
            "            <polygon points=\"{}\" fill=\"{}\" fill-opacity=\"0.5\" stroke=\"red\" stroke-width=\"2\" opacity=\"0.9\">\n",
            polygon_points_attr(&room.points),
            room.color
        ));
        svg.push_str(&format!(
            "                <title>{name} - {room_type}</title>\n"
        ));
        svg.push_str("            </polygon>\n");

        if let Some(center) = polygon_centroid(&room.points) {
            svg.push_str(&format!(
                "            <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-size=\"12\" fill=\"#000\" pointer-events=\"none\">{name}</text>\n",
                center.x.round() as i64,
                center.y.round() as i64
            ));
        }
    }

    svg.push_str("        </svg>\n");
    svg
}

/// Builds the SVG `points` attribute, rounding to whole pixels.
fn polygon_points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x.round() as i64, p.y.round() as i64))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes text for use inside HTML and SVG text nodes.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
