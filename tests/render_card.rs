use ogcard::{
    CardService, ProjectSnapshot, ProjectSource, ProjectStatus, RoleBadge, render_snapshot,
    role_palette,
};

struct FixtureSource(Vec<ProjectSnapshot>);

impl ProjectSource for FixtureSource {
    fn project_by_slug(&self, slug: &str) -> anyhow::Result<Option<ProjectSnapshot>> {
        Ok(self.0.iter().find(|p| p.slug == slug).cloned())
    }
}

fn landing_page(status: ProjectStatus) -> ProjectSnapshot {
    ProjectSnapshot {
        slug: "redesign-landing-page".to_string(),
        title: "Redesign Landing Page".to_string(),
        description: String::new(),
        status,
        roles: vec![RoleBadge {
            slug: "frontend".to_string(),
            name: "Frontend".to_string(),
        }],
        stack: vec![],
    }
}

fn count_color(img: &image::RgbaImage, color: [u8; 4]) -> usize {
    img.pixels().filter(|px| px.0 == color).count()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn active_project_renders_a_complete_card() {
    init_tracing();
    let svc = CardService::new(FixtureSource(vec![landing_page(ProjectStatus::Active)]));
    let resp = svc.og_card("redesign-landing-page").unwrap();

    assert_eq!(resp.content_type, "image/png");
    assert_eq!(resp.cache_control, "public, max-age=86400");

    let img = image::load_from_memory(&resp.bytes).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (1200, 630));

    // page background in the canvas corner, white card panel inside
    assert_eq!(img.get_pixel(2, 2).0, [0xF7, 0xF8, 0xFA, 0xFF]);
    assert_eq!(img.get_pixel(900, 90).0, [0xFF, 0xFF, 0xFF, 0xFF]);

    // wordmark accent character: distinctly blue ink in the wordmark row
    // (the neutral grays keep red and blue channels within ~20 of each other)
    let accent_ink = (80..128)
        .flat_map(|y| (80..400).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let px = img.get_pixel(x, y).0;
            px[2] > px[0].saturating_add(40)
        })
        .count();
    assert!(accent_ink > 0);

    // title ink (the title face is bold enough to hit full coverage)
    assert!(count_color(&img, [0x1A, 0x1A, 0x2E, 0xFF]) > 50);

    // one frontend badge in the frontend palette colors
    let frontend = role_palette("frontend");
    assert!(count_color(&img, frontend.bg) > 100);

    // footer separator hairline at its fixed offset:
    // margin + card height - padding - 20
    assert_eq!(img.get_pixel(100, 530).0, [0xE5, 0xE7, 0xEB, 0xFF]);
}

#[test]
fn pending_project_is_not_found_and_yields_no_bytes() {
    init_tracing();
    let svc = CardService::new(FixtureSource(vec![landing_page(ProjectStatus::Pending)]));
    let err = svc.og_card("redesign-landing-page").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn missing_project_is_not_found() {
    let svc = CardService::new(FixtureSource(vec![]));
    let err = svc.og_card("redesign-landing-page").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn description_block_adds_body_ink() {
    let mut with_desc = landing_page(ProjectStatus::Active);
    with_desc.roles.clear();
    let mut bare = with_desc.clone();
    with_desc.description =
        "A matchmaking platform for side projects: post an idea, list the roles you need, \
         and let people apply with one tap."
            .to_string();
    bare.description = String::new();

    // the description band sits right below the title block; with no
    // description (and no badges) it is bare card panel
    let ink = |snap: &ProjectSnapshot| {
        let resp = render_snapshot(snap).unwrap();
        let img = image::load_from_memory(&resp.bytes).unwrap().to_rgba8();
        (188..248)
            .flat_map(|y| (80..1120).map(move |x| (x, y)))
            .filter(|&(x, y)| img.get_pixel(x, y).0[0] < 200)
            .count()
    };
    assert!(ink(&with_desc) > 0, "description drew no ink");
    assert_eq!(ink(&bare), 0, "band should be empty without a description");
}

#[test]
fn render_is_deterministic_for_equal_snapshots() {
    let a = render_snapshot(&landing_page(ProjectStatus::Active)).unwrap();
    let b = render_snapshot(&landing_page(ProjectStatus::Active)).unwrap();
    assert_eq!(a.bytes, b.bytes);
}
