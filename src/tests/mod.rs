use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::interaction::{
    ContainerSize, NoClickEffect, Placement, RandomOffsets, Session, YesClick,
};
use crate::page::{parse_phrases, ButtonAnimation, PageConfig};
use crate::template::render_html;

/// Pull the array literal assigned to `phrases` out of a rendered page.
fn embedded_phrases(html: &str) -> Vec<String> {
    let start = html.find("const phrases = ").unwrap() + "const phrases = ".len();
    let end = start + html[start..].find(";\n").unwrap();
    serde_json::from_str(&html[start..end]).unwrap()
}

fn hi_page() -> PageConfig {
    PageConfig {
        title: "Hi".to_string(),
        yes_button_text: "Yes".to_string(),
        button_animation: ButtonAnimation::Grow,
        ..PageConfig::new()
    }
    .with_phrases_text("Nope\nNever")
}

#[test]
fn end_to_end_hi_yes_nope_never() {
    let html = render_html(&hi_page());
    assert!(html.contains(r#"<h1 id="title">Hi</h1>"#));
    assert!(html.contains(r#"<button class="yes-btn" id="yesBtn" type="button">Yes</button>"#));
    assert!(html.contains(r#"const phrases = ["Nope","Never"];"#));
    assert!(html.contains(r#"const animation = "grow";"#));
}

#[test]
fn rendering_is_deterministic() {
    let page = hi_page().with_background(Some("https://example.com/bg.png".to_string()));
    assert_eq!(render_html(&page), render_html(&page.clone()));
}

#[test]
fn phrase_list_round_trips_through_script() {
    let raw = "  Are you sure?\n\nReally?\r\n</script>\n";
    let page = PageConfig::new().with_phrases_text(raw);
    assert_eq!(embedded_phrases(&render_html(&page)), parse_phrases(raw));
}

#[test]
fn hostile_text_cannot_escape_its_context() {
    let page = PageConfig {
        title: "<b>bold</b>".to_string(),
        yes_click_text: "</p><script>alert(1)</script>".to_string(),
        ..PageConfig::new()
    }
    .with_phrases_text("</script><script>alert(2)</script>")
    .with_background(Some("x\");}</style><script>alert(3)</script>".to_string()));

    let html = render_html(&page);
    assert!(!html.contains("<b>bold</b>"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert_eq!(html.matches("</script>").count(), 1);
    assert_eq!(html.matches("</style>").count(), 1);
    assert_eq!(html.matches("<script>").count(), 1);
}

#[test]
fn session_for_page_follows_generated_config() {
    let page = hi_page();
    let mut session = Session::for_page(&page);
    let mut sampler = RandomOffsets::new(StdRng::seed_from_u64(9));
    let container = ContainerSize {
        width: 400.0,
        height: 100.0,
    };

    let shown: Vec<_> = (0..3)
        .filter_map(|_| session.click_no(&mut sampler, container))
        .map(|click| click.phrase.unwrap())
        .collect();
    assert_eq!(shown, vec!["Nope", "Never", "Nope"]);
    assert_eq!(session.placement(), Placement::InFlow);
    assert!((session.yes_scale() - 1.9).abs() < 1e-9);

    assert!(matches!(session.click_yes(), YesClick::Started(_)));
    assert!(session.click_no(&mut sampler, container).is_none());
}

#[test]
fn random_session_moves_every_click() {
    let page = PageConfig {
        button_animation: ButtonAnimation::Random,
        ..hi_page()
    };
    let mut session = Session::for_page(&page);
    let mut sampler = RandomOffsets::new(StdRng::seed_from_u64(11));
    let container = ContainerSize {
        width: 400.0,
        height: 100.0,
    };

    let firsts: Vec<bool> = (0..4)
        .map(|_| match session.click_no(&mut sampler, container).unwrap().effect {
            NoClickEffect::Moved { first_move, offset } => {
                assert!(offset.x.abs() <= 160.0);
                assert!(offset.y.abs() <= 40.0);
                first_move
            }
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(firsts, vec![true, false, false, false]);
    assert_eq!(session.yes_scale(), 1.0);
}

fn arb_page() -> impl Strategy<Value = PageConfig> {
    (
        ".*",
        ".*",
        ".*",
        proptest::collection::vec("[^\n]*", 0..6),
        proptest::option::of(".*"),
        any::<bool>(),
    )
        .prop_map(|(title, subtitle, yes, phrase_lines, background, random)| {
            PageConfig {
                title,
                subtitle,
                yes_button_text: yes,
                button_animation: if random {
                    ButtonAnimation::Random
                } else {
                    ButtonAnimation::Grow
                },
                ..PageConfig::new()
            }
            .with_phrases_text(&phrase_lines.join("\n"))
            .with_background(background)
        })
}

proptest! {
    #[test]
    fn render_is_pure(page in arb_page()) {
        prop_assert_eq!(render_html(&page), render_html(&page));
    }

    #[test]
    fn embedded_phrases_match_parsed_list(lines in proptest::collection::vec("[^\n]*", 0..8)) {
        let raw = lines.join("\n");
        let page = PageConfig::new().with_phrases_text(&raw);
        prop_assert_eq!(embedded_phrases(&render_html(&page)), parse_phrases(&raw));
    }

    #[test]
    fn only_one_script_element(page in arb_page()) {
        let html = render_html(&page);
        prop_assert_eq!(html.matches("</script").count(), 1);
        prop_assert_eq!(html.matches("</style").count(), 1);
    }
}
