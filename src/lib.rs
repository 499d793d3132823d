#![forbid(unsafe_code)]

//! On-demand social preview card renderer. Everything is composed directly
//! into an owned RGBA pixel buffer (no external rendering engine, no markup
//! layout) and encoded to a fixed 1200x630 PNG.

pub mod card;
pub mod encode;
pub mod error;
pub mod fonts;
pub mod model;
pub mod palette;
pub mod raster;
pub mod service;
pub mod text;

pub use card::{CANVAS_H, CANVAS_W, compose};
pub use encode::{CACHE_CONTROL, CONTENT_TYPE, CardResponse, to_png};
pub use error::{CardError, CardResult};
pub use fonts::{Face, FaceSet, SCALE, faces};
pub use model::{ProjectSnapshot, ProjectStatus, RenderRequest, RoleBadge};
pub use palette::{PaletteEntry, role_palette};
pub use raster::{Pixmap, Rgba8};
pub use service::{CardService, ProjectSource, render_snapshot};
pub use text::{clip_chars, draw_text, measure_width, truncate_lines, wrap_lines};
