#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query parameter accessor tests
///
/// This test suite covers:
/// - Absent and present reads
/// - set/get round trips over values that need escaping
/// - Path and unrelated-key preservation
/// - clear idempotence and the bare-path rule
/// - History depth after writes and its upper bound
/// - Paths built through the validating constructor
use pool_param::{
    Location, MAX_ENTRIES, Navigator, ParseError, QueryParam, SessionHistory, clear_pool_id,
    get_pool_id, set_pool_id,
};

fn session(href: &str) -> SessionHistory {
    SessionHistory::parse(href).unwrap()
}

const AWKWARD_VALUES: &[&str] = &[
    "",
    "abc123",
    "with space",
    "a&b=c",
    "1+1=2",
    "100%",
    "%41",
    "?#/",
    "François",
    "池-🏊",
    "poolId=nested",
    "   ",
];

#[test]
fn test_get_absent_without_key() {
    for href in ["/", "/app", "/app?", "/app?foo=bar", "/app?pool=1&id=2", "/app#poolId=x"] {
        assert_eq!(get_pool_id(&session(href)), None, "href: {href}");
    }
}

#[test]
fn test_set_get_round_trip() {
    for prior in ["/app", "/app?foo=bar", "/app?poolId=old&x=1", "/deep/path?a&b=&c=3"] {
        for value in AWKWARD_VALUES {
            let mut history = session(prior);
            set_pool_id(&mut history, value);
            assert_eq!(
                get_pool_id(&history).as_deref(),
                Some(*value),
                "prior: {prior}, value: {value:?}"
            );
        }
    }
}

#[test]
fn test_set_preserves_path_and_other_keys() {
    let mut history = session("/teams/42/pools?sort=name&page=2");
    set_pool_id(&mut history, "p9");

    let location = history.location();
    assert_eq!(location.path(), "/teams/42/pools");
    assert_eq!(location.query(), Some("sort=name&page=2&poolId=p9"));
}

#[test]
fn test_clear_absent_is_noop_in_content() {
    for href in ["/app", "/app?foo=bar", "/app?q=a%20b&flag"] {
        let mut history = session(href);
        let before = history.location().href();
        clear_pool_id(&mut history);
        assert_eq!(history.location().href(), before);
    }
}

#[test]
fn test_clear_after_set() {
    let mut history = session("/app");
    set_pool_id(&mut history, "x");
    clear_pool_id(&mut history);
    assert_eq!(get_pool_id(&history), None);
    assert_eq!(history.location().href(), "/app");
    assert_eq!(history.location().query(), None);
}

#[test]
fn test_clear_last_key_drops_question_mark() {
    let mut history = session("/app?poolId=abc");
    clear_pool_id(&mut history);
    assert_eq!(history.location().href(), "/app");
}

#[test]
fn test_each_write_adds_one_entry() {
    let mut history = session("/app");
    set_pool_id(&mut history, "a");
    set_pool_id(&mut history, "b");
    clear_pool_id(&mut history);
    clear_pool_id(&mut history);
    assert_eq!(history.len(), 5);

    let hrefs: Vec<String> = history.entries().iter().map(Location::href).collect();
    assert_eq!(
        hrefs,
        ["/app", "/app?poolId=a", "/app?poolId=b", "/app", "/app"]
    );
}

#[test]
fn test_back_restores_previous_pool() {
    let mut history = session("/app");
    set_pool_id(&mut history, "first");
    set_pool_id(&mut history, "second");

    assert!(history.back());
    assert_eq!(get_pool_id(&history).as_deref(), Some("first"));
    assert!(history.back());
    assert_eq!(get_pool_id(&history), None);
}

#[test]
fn test_works_through_mut_reference() {
    let mut history = session("/app");
    let mut handle: &mut SessionHistory = &mut history;
    set_pool_id(&mut handle, "via-ref");
    assert_eq!(get_pool_id(&handle).as_deref(), Some("via-ref"));
}

/// A navigator that records every pushed address, standing in for a host
/// other than the in-memory history.
#[derive(Default)]
struct Recorder {
    current: Location,
    pushed: Vec<String>,
}

impl Navigator for Recorder {
    fn current(&self) -> Location {
        self.current.clone()
    }

    fn push(&mut self, next: Location) {
        self.pushed.push(next.href());
        self.current = next;
    }
}

#[test]
fn test_custom_navigator() {
    let mut recorder = Recorder {
        current: Location::parse("/app?foo=bar").unwrap(),
        ..Recorder::default()
    };

    set_pool_id(&mut recorder, "p1");
    clear_pool_id(&mut recorder);
    assert_eq!(recorder.pushed, ["/app?foo=bar&poolId=p1", "/app?foo=bar"]);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = session("/app");
    let second = session("/app");
    set_pool_id(&mut first, "only-first");
    assert_eq!(get_pool_id(&second), None);
}

#[test]
fn test_round_trip_from_constructed_path_with_delimiters() {
    let start = Location::new("/reports/q1?draft#notes").unwrap();
    let mut history = SessionHistory::new(start);
    set_pool_id(&mut history, "x");

    let href = history.location().href();
    assert_eq!(href, "/reports/q1%3Fdraft%23notes?poolId=x");
    let reloaded = SessionHistory::parse(&href).unwrap();
    assert_eq!(get_pool_id(&reloaded).as_deref(), Some("x"));
    assert_eq!(reloaded.location().path(), "/reports/q1%3Fdraft%23notes");
}

#[test]
fn test_relative_path_is_rejected() {
    assert_eq!(Location::new("app"), Err(ParseError::RelativePath));
    assert_eq!(Location::new(""), Err(ParseError::EmptyPath));
}

#[test]
fn test_long_session_stays_bounded() {
    let mut history = session("/app");
    for i in 0..10_000 {
        set_pool_id(&mut history, &i.to_string());
    }
    assert_eq!(history.len(), MAX_ENTRIES);
    assert_eq!(get_pool_id(&history).as_deref(), Some("9999"));
}

#[test]
fn test_query_param_for_other_name() {
    let view = QueryParam::new("view");
    let mut history = session("/app?poolId=p1");
    view.set(&mut history, "grid");
    view.clear(&mut history);
    assert_eq!(history.location().href(), "/app?poolId=p1");
}

#[test]
fn test_crate_result_alias() {
    fn start(href: &str) -> pool_param::Result<SessionHistory> {
        let history = SessionHistory::parse(href)?;
        Ok(history)
    }

    assert!(start("/app").is_ok());
    assert_eq!(start("app"), Err(ParseError::RelativePath));
}
