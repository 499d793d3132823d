use crate::{
    card,
    encode::{self, CardResponse},
    error::{CardError, CardResult},
    fonts,
    model::{ProjectSnapshot, RenderRequest},
};

/// Read-only data access seam: the surrounding application resolves a slug
/// to a project snapshot (database, cache, fixture).
pub trait ProjectSource {
    fn project_by_slug(&self, slug: &str) -> anyhow::Result<Option<ProjectSnapshot>>;
}

/// The renderer's public surface: one operation, slug in, finished card out.
pub struct CardService<S> {
    source: S,
}

impl<S: ProjectSource> CardService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Renders the preview card for `slug`. Missing and non-active projects
    /// fail with the not-found outcome before any pixel work; data-source
    /// and font failures surface as internal errors.
    #[tracing::instrument(skip(self))]
    pub fn og_card(&self, slug: &str) -> CardResult<CardResponse> {
        let snapshot = self
            .source
            .project_by_slug(slug)?
            .ok_or_else(|| CardError::not_found(format!("project '{slug}'")))?;
        render_snapshot(&snapshot)
    }
}

/// Gate + compose + encode for an already-loaded snapshot. The CLI and the
/// tests enter here; the service path ends up here too.
pub fn render_snapshot(snapshot: &ProjectSnapshot) -> CardResult<CardResponse> {
    let request = RenderRequest::from_snapshot(snapshot)?;
    let faces = fonts::faces()?;
    let pm = card::compose(&request, faces);
    Ok(CardResponse::new(encode::to_png(&pm)?))
}
