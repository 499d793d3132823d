use crate::raster::Rgba8;

// Card theme, lifted from the site stylesheet `:root` variables.
pub const BG: Rgba8 = [0xF7, 0xF8, 0xFA, 0xFF];
pub const WHITE: Rgba8 = [0xFF, 0xFF, 0xFF, 0xFF];
pub const BORDER: Rgba8 = [0xE5, 0xE7, 0xEB, 0xFF];
pub const ACCENT: Rgba8 = [0x5B, 0x9B, 0xD5, 0xFF];
pub const GRAY_900: Rgba8 = [0x1A, 0x1A, 0x2E, 0xFF];
pub const GRAY_700: Rgba8 = [0x3A, 0x3A, 0x4F, 0xFF];
pub const GRAY_500: Rgba8 = [0x6B, 0x72, 0x80, 0xFF];
pub const GRAY_400: Rgba8 = [0x9C, 0xA3, 0xAF, 0xFF];
pub const GRAY_100: Rgba8 = [0xF3, 0xF4, 0xF6, 0xFF];

/// Badge colors for one role: light background, dark foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub bg: Rgba8,
    pub fg: Rgba8,
}

const fn entry(bg: Rgba8, fg: Rgba8) -> PaletteEntry {
    PaletteEntry { bg, fg }
}

/// Role badge palette. Versioned constant: adding a role is fine, renaming
/// a key needs a migration note for anything linking to rendered cards.
pub const ROLE_PALETTE: [(&str, PaletteEntry); 13] = [
    ("frontend", entry([0xDB, 0xEA, 0xFE, 0xFF], [0x1D, 0x4E, 0xD8, 0xFF])),
    ("backend", entry([0xD1, 0xFA, 0xE5, 0xFF], [0x06, 0x5F, 0x46, 0xFF])),
    ("fullstack", entry([0xED, 0xE9, 0xFE, 0xFF], [0x5B, 0x21, 0xB6, 0xFF])),
    ("project-manager", entry([0xFE, 0xF3, 0xC7, 0xFF], [0x92, 0x40, 0x0E, 0xFF])),
    ("product-manager", entry([0xFE, 0xE2, 0xE2, 0xFF], [0x99, 0x1B, 0x1B, 0xFF])),
    ("ux-ui-designer", entry([0xFC, 0xE7, 0xF3, 0xFF], [0x9D, 0x17, 0x4D, 0xFF])),
    ("analyst", entry([0xCF, 0xFA, 0xFE, 0xFF], [0x15, 0x5E, 0x75, 0xFF])),
    ("logo-designer", entry([0xFF, 0xED, 0xD5, 0xFF], [0x9A, 0x34, 0x12, 0xFF])),
    ("qa", entry([0xE0, 0xE7, 0xFF, 0xFF], [0x37, 0x30, 0xA3, 0xFF])),
    ("devops", entry([0xCC, 0xFB, 0xF1, 0xFF], [0x11, 0x5E, 0x59, 0xFF])),
    ("ios", entry([0xF3, 0xE8, 0xFF, 0xFF], [0x6B, 0x21, 0xA8, 0xFF])),
    ("android", entry([0xDC, 0xFC, 0xE7, 0xFF], [0x16, 0x65, 0x34, 0xFF])),
    ("flutter", entry([0xE0, 0xF2, 0xFE, 0xFF], [0x07, 0x59, 0x85, 0xFF])),
];

/// Neutral pair for roles the palette does not know.
pub const FALLBACK: PaletteEntry = entry(GRAY_100, GRAY_700);

/// Total lookup: never fails, unknown slugs get the neutral pair.
pub fn role_palette(slug: &str) -> PaletteEntry {
    ROLE_PALETTE
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, colors)| *colors)
        .unwrap_or(FALLBACK)
}
