//! End-to-end tests over the documents in test-fixtures/documents
//!
//! Each `<name>.<ext>` fixture is transformed and compared with
//! `<name>.expected.<ext>`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use toggler_core::{Action, Options, Toggler, Warning};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/documents")
}

fn read_fixture(name: &str) -> String {
    let path = fixture_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

#[rstest]
#[case("page.html", "page.expected.html", true)]
#[case("styles.css", "styles.expected.css", false)]
#[case("app.js", "app.expected.js", false)]
#[case("crlf.html", "crlf.expected.html", false)]
fn test_fixture(#[case] input: &str, #[case] expected: &str, #[case] remove_directives: bool) {
    let toggler = Toggler::new(Options::new().with_remove_directive_lines(remove_directives));

    let outcome = toggler.transform(&read_fixture(input)).unwrap();

    assert_eq!(outcome.content, read_fixture(expected));
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_expected_fixtures_are_stable() {
    // Comment and uncomment blocks are idempotent
    for name in ["styles.expected.css", "crlf.expected.html"] {
        let expected = read_fixture(name);
        let outcome = Toggler::default().transform(&expected).unwrap();
        assert_eq!(outcome.content, expected, "{name} changed on a second pass");
    }
}

#[test]
fn test_toggle_fixture_round_trips() {
    let source = read_fixture("app.js");
    let toggler = Toggler::default();

    let once = toggler.transform(&source).unwrap().content;
    let twice = toggler.transform(&once).unwrap().content;

    assert_eq!(twice, source);
}

#[test]
fn test_crlf_fixture_has_no_bare_newlines() {
    let outcome = Toggler::default()
        .transform(&read_fixture("crlf.html"))
        .unwrap();
    assert_eq!(
        outcome.content.matches('\n').count(),
        outcome.content.matches("\r\n").count()
    );
}

#[test]
fn test_unterminated_fixture() {
    let outcome = Toggler::default()
        .transform(&read_fixture("unterminated.sh"))
        .unwrap();

    assert_eq!(outcome.content, read_fixture("unterminated.expected.sh"));
    assert_eq!(
        outcome.warnings,
        vec![Warning::MissingEndDirective {
            action: Action::Uncomment,
            opened_at: 2,
        }]
    );
}
