use ogcard::{faces, measure_width, truncate_lines, wrap_lines};

// content width of the card: canvas minus margins and padding, in pixels
const CW: u32 = 1200 - 2 * 32 - 2 * 48;

#[test]
fn short_title_stays_on_one_line_without_marker() {
    let set = faces().unwrap();
    let mut lines = wrap_lines(&set.title, "Redesign Landing Page", CW);
    truncate_lines(&mut lines, 2);
    assert_eq!(lines, vec!["Redesign Landing Page".to_string()]);
}

#[test]
fn under_cap_wraps_keep_every_line_within_budget() {
    let set = faces().unwrap();
    let lines = wrap_lines(
        &set.title,
        "Peer Review And Feedback Tooling For Student Film Production Crews",
        CW,
    );
    assert!(lines.len() >= 2);
    for line in &lines {
        assert!(measure_width(&set.title, line) <= CW);
        assert!(!line.ends_with("..."));
    }
}

#[test]
fn over_cap_titles_truncate_to_two_marked_lines() {
    let set = faces().unwrap();
    let long_title = "An Extremely Ambitious Community Driven Open Source Project \
                      Management And Team Matchmaking Platform For Everyone Everywhere";
    let mut lines = wrap_lines(&set.title, long_title, CW);
    assert!(lines.len() > 2);
    let original_second = lines[1].clone();
    truncate_lines(&mut lines, 2);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("..."));
    assert_eq!(lines[1].chars().count(), original_second.chars().count());
    assert!(measure_width(&set.title, &lines[1]) <= CW);
}

#[test]
fn body_face_fits_more_text_per_line_than_title_face() {
    let set = faces().unwrap();
    let text = "one two three four five six seven eight nine ten eleven twelve \
                thirteen fourteen fifteen sixteen seventeen eighteen nineteen twenty";
    let title_lines = wrap_lines(&set.title, text, CW);
    let body_lines = wrap_lines(&set.body, text, CW);
    assert!(body_lines.len() <= title_lines.len());
}
