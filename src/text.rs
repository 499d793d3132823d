use rusttype::point;

use crate::{
    fonts::Face,
    raster::{Pixmap, Rgba8},
};

/// Advance width of `text` in whole pixels (rounded up) when drawn with
/// `face`. Appending characters never shrinks the result.
pub fn measure_width(face: &Face, text: &str) -> u32 {
    let mut end = 0.0f32;
    for glyph in face.font.layout(text, face.scale, point(0.0, 0.0)) {
        end = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
    }
    end.ceil() as u32
}

/// Draws one line of text with the glyph ascent aligned at `y`, so the
/// baseline sits at `y + face.ascent()`. No wrapping. Glyph coverage is
/// blended over the destination; pixels outside the buffer are dropped.
pub fn draw_text(pm: &mut Pixmap, face: &Face, color: Rgba8, x: i32, y: i32, text: &str) {
    let baseline = (y + face.ascent()) as f32;
    for glyph in face.font.layout(text, face.scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            blend(pm, bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
        });
    }
}

fn blend(pm: &mut Pixmap, x: i32, y: i32, color: Rgba8, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let Some(dst) = pm.pixel(x, y) else {
        return;
    };
    let a = coverage.min(1.0);
    let inv = 1.0 - a;
    let mix = |s: u8, d: u8| (f32::from(s) * a + f32::from(d) * inv).round() as u8;
    pm.set(
        x,
        y,
        [
            mix(color[0], dst[0]),
            mix(color[1], dst[1]),
            mix(color[2], dst[2]),
            0xFF,
        ],
    );
}

/// Greedy word wrap: words never split; the candidate `current + " " + next`
/// is measured against `max_width` and a too-wide candidate closes the
/// current line. The in-progress line is always flushed at the end, so a
/// single over-wide word still produces a line. Empty or all-whitespace
/// input yields no lines.
pub fn wrap_lines(face: &Face, text: &str, max_width: u32) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{current} {word}");
        if measure_width(face, &candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}

/// Caps `lines` to `max` entries. When lines were dropped, the last kept
/// line loses its final three characters to the "..." marker. Operates on
/// characters, not bytes, so multi-byte text is never split; lines of three
/// or fewer characters are kept as-is.
pub fn truncate_lines(lines: &mut Vec<String>, max: usize) {
    if lines.len() <= max {
        return;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        let chars: Vec<char> = last.chars().collect();
        if chars.len() > 3 {
            let mut kept: String = chars[..chars.len() - 3].iter().collect();
            kept.push_str("...");
            *last = kept;
        }
    }
}

/// Pre-wrap cap for free-form text: newlines become spaces and anything past
/// `max` characters is cut, with "..." appended. Bounds the wrap cost on
/// pathological input before any glyph measuring happens.
pub fn clip_chars(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    let chars: Vec<char> = flat.chars().collect();
    if chars.len() <= max {
        return flat;
    }
    let mut out: String = chars[..max].iter().collect();
    out.push_str("...");
    out
}
