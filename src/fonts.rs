use std::sync::OnceLock;

use rusttype::{Font, Scale};

use crate::error::{CardError, CardResult};

/// 2x retina working scale. Every design-unit constant in the compositor is
/// multiplied by this before it touches the pixel buffer.
pub const SCALE: i32 = 2;

// Embedded font programs: one monospace family, three cuts. Never read from
// disk at request time.
static REGULAR_TTF: &[u8] = include_bytes!("../assets/fonts/DejaVuSansMono.ttf");
static OBLIQUE_TTF: &[u8] = include_bytes!("../assets/fonts/DejaVuSansMono-Oblique.ttf");
static BOLD_TTF: &[u8] = include_bytes!("../assets/fonts/DejaVuSansMono-Bold.ttf");

/// A font program fixed at one pixel size. Knows how to measure and draw a
/// single line of text (see [`crate::text`]).
#[derive(Clone)]
pub struct Face {
    pub(crate) font: Font<'static>,
    pub(crate) scale: Scale,
}

impl Face {
    fn sized(font: &Font<'static>, points: f32) -> Self {
        // 72 dpi: one point maps to one pixel before the working scale.
        Self {
            font: font.clone(),
            scale: Scale::uniform(points * SCALE as f32),
        }
    }

    /// Distance from the top of the line box to the baseline, whole pixels.
    pub fn ascent(&self) -> i32 {
        self.font.v_metrics(self.scale).ascent.ceil() as i32
    }

    /// Distance from the baseline to the bottom of the line box, whole
    /// pixels (positive).
    pub fn descent(&self) -> i32 {
        (-self.font.v_metrics(self.scale).descent).ceil() as i32
    }
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Face")
            .field("scale", &self.scale.y)
            .finish_non_exhaustive()
    }
}

/// The five pre-sized faces every card render shares.
#[derive(Clone, Debug)]
pub struct FaceSet {
    pub logo: Face,
    pub title: Face,
    pub body: Face,
    pub badge: Face,
    pub small: Face,
}

static FACES: OnceLock<Result<FaceSet, String>> = OnceLock::new();

/// Parses the embedded font programs on first use and keeps the result for
/// the life of the process. Concurrent first callers observe exactly one
/// initialization; a parse failure is logged once, cached, and returned to
/// every later call (no automatic retry).
pub fn faces() -> CardResult<&'static FaceSet> {
    match FACES.get_or_init(build) {
        Ok(set) => Ok(set),
        Err(msg) => Err(CardError::font(msg.clone())),
    }
}

fn build() -> Result<FaceSet, String> {
    let regular = parse("regular", REGULAR_TTF)?;
    let oblique = parse("oblique", OBLIQUE_TTF)?;
    let bold = parse("bold", BOLD_TTF)?;

    Ok(FaceSet {
        logo: Face::sized(&bold, 13.0),
        title: Face::sized(&bold, 20.0),
        body: Face::sized(&regular, 11.0),
        badge: Face::sized(&oblique, 9.0),
        small: Face::sized(&regular, 8.0),
    })
}

fn parse(name: &str, bytes: &'static [u8]) -> Result<Font<'static>, String> {
    Font::try_from_bytes(bytes).ok_or_else(|| {
        tracing::error!(font = name, "embedded font failed to parse");
        format!("embedded font '{name}' failed to parse")
    })
}
