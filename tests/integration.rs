use fixtures::fixtures;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use theme_helpers::{
    headings_from_map, FormatListStyle, HeadingMap, HelperConfig, Request, ThemeHelpers,
};

static HELPERS_INSTANCE: OnceLock<ThemeHelpers> = OnceLock::new();

fn helpers() -> &'static ThemeHelpers {
    HELPERS_INSTANCE.get_or_init(|| {
        let path = Path::new("tests/fixtures/helpers.yml");
        assert!(path.exists(), "helper config not found at {:?}", path);
        ThemeHelpers::from_file(path).expect("failed to load helper config")
    })
}

// ---------------------------------------------------------------------------
// Browse headings fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct HeadingsFixture {
    request: String,
    headings: HeadingMap,
    cells: Vec<CellFixture>,
}

#[derive(Debug, Deserialize)]
struct CellFixture {
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    html: Option<String>,
}

#[fixtures(["tests/fixtures/browse_headings*.yml"])]
#[test]
fn test_browse_headings_fixtures(path: &Path) {
    let helpers = helpers();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<HeadingsFixture> = serde_yaml::from_str(&content).unwrap();

    for f in &fixtures {
        let request = Request::parse(&f.request);
        let headings = headings_from_map(&f.headings);
        let cells = helpers.browse_headings(&request, &headings);

        assert_eq!(
            cells.len(),
            f.cells.len(),
            "cell count mismatch for request: {}",
            f.request
        );

        for (cell, expected) in cells.iter().zip(&f.cells) {
            assert_eq!(
                cell.class(),
                expected.class.as_deref(),
                "class mismatch for '{}' on request: {}",
                cell.label,
                f.request
            );
            if let Some(href) = &expected.href {
                assert_eq!(
                    cell.href.as_deref(),
                    Some(href.as_str()),
                    "href mismatch for '{}' on request: {}",
                    cell.label,
                    f.request
                );
            }
            if let Some(html) = &expected.html {
                assert_eq!(
                    &cell.to_html(),
                    html,
                    "markup mismatch for '{}' on request: {}",
                    cell.label,
                    f.request
                );
            }
        }

        let rendered = helpers.render_browse_headings(&request, &headings);
        let joined: String = cells.iter().map(|c| c.to_html()).collect();
        assert_eq!(rendered, joined);
    }
}

// ---------------------------------------------------------------------------
// Output format fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct OutputFormatFixture {
    request: String,
    action: String,
    #[serde(default)]
    delimiter: Option<String>,
    html: Option<String>,
}

#[fixtures(["tests/fixtures/output_formats.yml"])]
#[test]
fn test_output_format_fixtures(path: &Path) {
    let helpers = helpers();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<OutputFormatFixture> = serde_yaml::from_str(&content).unwrap();

    for f in &fixtures {
        let request = Request::parse(&f.request).with_action(f.action.as_str());
        let style = match &f.delimiter {
            Some(d) => FormatListStyle::Delimited(d.clone()),
            None => FormatListStyle::List,
        };
        assert_eq!(
            helpers.output_format_list(&request, &style),
            f.html,
            "output format list mismatch for request: {}",
            f.request
        );
    }
}

// ---------------------------------------------------------------------------
// Document helpers
// ---------------------------------------------------------------------------

#[test]
fn test_feed_links_use_site_title() {
    let request = Request::parse("/items/browse?search=letters");
    let html = helpers().auto_discovery_link_tags(&request);
    assert!(html.contains("title=\"Hometown Archive RSS Feed\""));
    assert!(html.contains("href=\"/items/browse?search=letters&amp;output=rss2\""));
    assert!(html.contains("type=\"application/atom+xml\""));
    assert_eq!(html.matches("<link ").count(), 2);
}

#[test]
fn test_option_display_is_escaped() {
    let helpers = helpers();
    assert_eq!(helpers.option("site_title"), "Hometown Archive");
    assert_eq!(
        helpers.option("description"),
        "Letters &amp; photographs &lt;1890-1950&gt;"
    );
    assert_eq!(helpers.option("administrator_email"), "");
}

#[test]
fn test_body_tag() {
    let mut attributes = IndexMap::new();
    attributes.insert("id".to_string(), "items".to_string());
    attributes.insert("class".to_string(), "browse".to_string());
    assert_eq!(
        helpers().body_tag(&attributes),
        "<body id=\"items\" class=\"browse\">\n"
    );
    assert_eq!(helpers().body_tag(&IndexMap::new()), "<body>\n");
}

#[test]
fn test_config_from_fixture() {
    let config = HelperConfig::from_file("tests/fixtures/helpers.yml").unwrap();
    assert_eq!(config.contexts.len(), 2);
    assert_eq!(config.feeds.len(), 2);
    assert_eq!(
        helpers().current_action_contexts(&Request::new("/items/browse", "browse")),
        ["atom", "dcmes-xml", "json", "rss2"]
    );
}
