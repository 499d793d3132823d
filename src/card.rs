use crate::{
    fonts::{FaceSet, SCALE},
    model::RenderRequest,
    palette::{self, PaletteEntry},
    raster::Pixmap,
    text,
};

/// Output size: 600x315 design units at the 2x working scale.
pub const CANVAS_W: u32 = (600 * SCALE) as u32;
pub const CANVAS_H: u32 = (315 * SCALE) as u32;

// Brand wordmark: neutral text plus one accent-colored character.
const WORDMARK: &str = "teamup";
const WORDMARK_ACCENT: &str = "_";
const FOOTER: &str = "teamup.build";

const MARGIN: i32 = 16 * SCALE;
const PAD: i32 = 24 * SCALE;
const CARD_RADIUS: i32 = 12 * SCALE;
const BADGE_RADIUS: i32 = 4 * SCALE;

const TITLE_MAX_LINES: usize = 2;
const DESC_MAX_LINES: usize = 2;
const DESC_MAX_CHARS: usize = 200;

/// Lays the card out top to bottom with a single vertical cursor: wordmark,
/// title, description, role badges, stack tags, footer. Pure function of the
/// request and the face set; the returned buffer is owned by this one call.
pub fn compose(req: &RenderRequest, faces: &FaceSet) -> Pixmap {
    let mut pm = Pixmap::new(CANVAS_W, CANVAS_H);
    pm.fill(palette::BG);

    // White card panel on a 1px border ring, both rounded.
    let (card_x, card_y) = (MARGIN, MARGIN);
    let card_w = CANVAS_W as i32 - 2 * MARGIN;
    let card_h = CANVAS_H as i32 - 2 * MARGIN;
    pm.fill_rounded_rect(
        card_x - 1,
        card_y - 1,
        card_w + 2,
        card_h + 2,
        CARD_RADIUS + 1,
        palette::BORDER,
    );
    pm.fill_rounded_rect(card_x, card_y, card_w, card_h, CARD_RADIUS, palette::WHITE);

    let cx = card_x + PAD;
    let cw = (card_w - 2 * PAD) as u32;
    let mut y = card_y + PAD;

    // Wordmark: brand text, then the accent character with no gap.
    text::draw_text(&mut pm, &faces.logo, palette::GRAY_900, cx, y, WORDMARK);
    let mark_w = text::measure_width(&faces.logo, WORDMARK) as i32;
    text::draw_text(
        &mut pm,
        &faces.logo,
        palette::ACCENT,
        cx + mark_w,
        y,
        WORDMARK_ACCENT,
    );
    y += 24 * SCALE;

    // Title, at most two lines.
    let mut title_lines = text::wrap_lines(&faces.title, &req.title, cw);
    text::truncate_lines(&mut title_lines, TITLE_MAX_LINES);
    for line in &title_lines {
        text::draw_text(&mut pm, &faces.title, palette::GRAY_900, cx, y, line);
        y += 26 * SCALE;
    }

    // Description, capped before wrapping so pathological input stays cheap.
    if !req.description.is_empty() {
        y += 4 * SCALE;
        let desc = text::clip_chars(&req.description, DESC_MAX_CHARS);
        let mut desc_lines = text::wrap_lines(&faces.body, &desc, cw);
        text::truncate_lines(&mut desc_lines, DESC_MAX_LINES);
        for line in &desc_lines {
            text::draw_text(&mut pm, &faces.body, palette::GRAY_500, cx, y, line);
            y += 15 * SCALE;
        }
    }

    if !req.roles.is_empty() {
        y += 10 * SCALE;
        y = badge_row(&mut pm, faces, req, cx, cw, y);
    }

    if !req.stack.is_empty() {
        y += 2 * SCALE;
        tag_row(&mut pm, faces, &req.stack, cx, cw, y);
    }

    // Footer: hairline separator (one device pixel) plus the site name.
    let fy = card_y + card_h - PAD - 10 * SCALE;
    pm.fill_rect(cx, fy, cw as i32, 1, palette::BORDER);
    text::draw_text(
        &mut pm,
        &faces.small,
        palette::GRAY_400,
        cx,
        fy + 6 * SCALE,
        FOOTER,
    );

    pm
}

/// One row of colored role pills. Badges that would cross the content width
/// are dropped silently; there is no second row. Returns the cursor below
/// the row.
fn badge_row(
    pm: &mut Pixmap,
    faces: &FaceSet,
    req: &RenderRequest,
    cx: i32,
    cw: u32,
    y: i32,
) -> i32 {
    let face = &faces.badge;
    let (hp, vp) = (7 * SCALE, 3 * SCALE);
    let bh = face.ascent() + face.descent() + 2 * vp;
    let mut bx = cx;
    for role in &req.roles {
        let PaletteEntry { bg, fg } = palette::role_palette(&role.slug);
        let bw = text::measure_width(face, &role.name) as i32 + 2 * hp;
        if bx + bw > cx + cw as i32 {
            break;
        }
        pm.fill_rounded_rect(bx, y, bw, bh, BADGE_RADIUS, bg);
        text::draw_text(pm, face, fg, bx + hp, y + vp, &role.name);
        bx += bw + 6 * SCALE;
    }
    y + bh + 8 * SCALE
}

/// Flat neutral tag pills for the technology stack, same overflow policy as
/// the badge row.
fn tag_row(pm: &mut Pixmap, faces: &FaceSet, tags: &[String], cx: i32, cw: u32, y: i32) {
    let face = &faces.small;
    let (hp, vp) = (5 * SCALE, 2 * SCALE);
    let bh = face.ascent() + face.descent() + 2 * vp;
    let mut bx = cx;
    for tag in tags {
        let bw = text::measure_width(face, tag) as i32 + 2 * hp;
        if bx + bw > cx + cw as i32 {
            break;
        }
        pm.fill_rounded_rect(bx, y, bw, bh, 3 * SCALE, palette::GRAY_100);
        text::draw_text(pm, face, palette::GRAY_700, bx + hp, y + vp, tag);
        bx += bw + 4 * SCALE;
    }
}
