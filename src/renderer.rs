use egui::{Color32, Painter, Pos2, Rect, Shape};

use crate::paper::Paper;
use crate::path::parse_path;
use crate::stroke::{LineCap, Stroke};

/// Paints a [`Paper`] with egui
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    border: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            border: Color32::GRAY,
        }
    }
}

impl Renderer {
    /// Paint the paper's elements inside `rect`, in z-order
    pub fn render(&self, painter: &Painter, rect: Rect, paper: &Paper) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        for stroke in paper.elements() {
            self.paint_stroke(&painter, rect.min, stroke);
        }

        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, self.border));
    }

    fn paint_stroke(&self, painter: &Painter, origin: Pos2, stroke: &Stroke) {
        let subpaths = match parse_path(stroke.path()) {
            Ok(subpaths) => subpaths,
            Err(e) => {
                log::warn!("skipping unpaintable path: {e}");
                return;
            }
        };

        let style = stroke.style();
        let color = parse_color(&style.color).gamma_multiply(style.opacity);
        let line = egui::Stroke::new(style.width, color);

        for points in subpaths {
            let points: Vec<Pos2> = points.into_iter().map(|p| origin + p.to_vec2()).collect();
            let (Some(first), Some(last)) = (points.first().copied(), points.last().copied())
            else {
                continue;
            };

            // Overlapping translucent caps would show as dark dots
            if style.line_cap == LineCap::Round && color.a() == 255 {
                painter.circle_filled(first, style.width / 2.0, color);
                painter.circle_filled(last, style.width / 2.0, color);
            }
            if points.len() > 1 {
                painter.add(Shape::line(points, line));
            }
        }
    }
}

/// Parse a CSS-style color: `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic name.
///
/// Unknown colors paint black.
pub fn parse_color(color: &str) -> Color32 {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if let Some(parsed) = parse_hex(hex) {
            return parsed;
        }
    }

    match color.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "yellow" => Color32::from_rgb(255, 255, 0),
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        other => {
            log::debug!("unknown color '{other}', using black");
            Color32::BLACK
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize, width: usize| {
        let digits = &hex[i * width..(i + 1) * width];
        u8::from_str_radix(digits, 16)
            .ok()
            .map(|v| if width == 1 { v * 17 } else { v })
    };

    match hex.len() {
        3 => Some(Color32::from_rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
        6 => Some(Color32::from_rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0, 2)?,
            channel(1, 2)?,
            channel(2, 2)?,
            channel(3, 2)?,
        )),
        _ => None,
    }
}

/// Format a color as `#rrggbb`, dropping alpha
pub fn format_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
