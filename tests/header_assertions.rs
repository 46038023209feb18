//! Expectations on response header values, dispatched through a stand-in
//! person controller.

use std::time::{SystemTime, UNIX_EPOCH};

use pretty_assertions::assert_eq;
use rustymock::assert::HeaderAssertion;
use rustymock::http::date::format_http_date;
use rustymock::mock::ResultActions;
use rustymock::prelude::*;

const LAST_MODIFIED: &str = "Last-Modified";

struct PersonController {
    timestamp: u64,
}

impl Handler for PersonController {
    fn handle(&self, req: &HttpRequest) -> HttpResponse {
        let Some(id) = req.path_param("id").and_then(|id| id.parse::<u64>().ok()) else {
            return HttpResponse::with_status(HttpStatus::BadRequest);
        };

        HttpResponse::ok()
            .with_last_modified(self.calculate_last_modified(id))
            .with_header("X-Rate-Limiting", "42")
            .with_header_values("Vary", ["foo", "bar"])
            .with_body("application/json", r#"{"name":"Jason"}"#)
    }
}

impl PersonController {
    fn calculate_last_modified(&self, _id: u64) -> u64 {
        self.timestamp
    }
}

struct Fixture {
    now: String,
    minute_ago: String,
    second_later: String,
    current_time: u64,
    mvc: MockMvc,
}

fn setup() -> Fixture {
    let current_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;

    let controller = PersonController {
        timestamp: current_time,
    };

    Fixture {
        now: format_http_date(current_time).unwrap(),
        minute_ago: format_http_date(current_time - 60 * 1000).unwrap(),
        second_later: format_http_date(current_time + 1000).unwrap(),
        current_time,
        mvc: MockMvc::standalone(Router::new().get("/persons/{id}", controller)).build(),
    }
}

impl Fixture {
    fn fresh(&self) -> ResultActions {
        self.mvc
            .perform(get("/persons/1").if_modified_since(&self.minute_ago))
    }

    fn not_modified(&self) -> ResultActions {
        self.mvc.perform(get("/persons/1").if_modified_since(&self.now))
    }

    fn assert_incorrect_response_header(&self, assertion: HeaderAssertion, unexpected: &str) {
        let failure = self.fresh().and_expect(assertion).unwrap_err();
        let message = failure.to_string();

        assert!(
            message.contains(&format!("Response header '{LAST_MODIFIED}'")),
            "{message}"
        );
        assert!(message.contains(unexpected), "{message}");
        assert!(message.contains(&self.now), "{message}");
    }
}

#[test]
fn string_with_correct_response_header_value() -> Result<(), AssertionFailure> {
    let f = setup();
    f.fresh().and_expect(header().string(LAST_MODIFIED, f.now.as_str()))?;
    Ok(())
}

#[test]
fn string_with_matcher_and_correct_response_header_value() -> Result<(), AssertionFailure> {
    let f = setup();
    f.fresh().and_expect(header().string(LAST_MODIFIED, equal_to(&f.now)))?;
    Ok(())
}

#[test]
fn multi_string_header_value() -> Result<(), AssertionFailure> {
    let f = setup();
    f.mvc
        .perform(get("/persons/1"))
        .and_expect(header().string_values("Vary", ["foo", "bar"]))?;
    Ok(())
}

#[test]
fn multi_string_header_value_with_matchers() -> Result<(), AssertionFailure> {
    let f = setup();
    f.mvc.perform(get("/persons/1")).and_expect(
        header().string_values("Vary", has_items(vec![contains_string("foo"), starts_with("bar")])),
    )?;
    Ok(())
}

#[test]
fn multi_string_header_value_with_values_matcher() -> Result<(), AssertionFailure> {
    let f = setup();
    f.mvc
        .perform(get("/persons/1"))
        .and_expect(header().string_values_matching("Vary", contains_exactly(["foo", "bar"])))?;
    Ok(())
}

#[test]
fn date_value_with_correct_response_header_value() -> Result<(), AssertionFailure> {
    let f = setup();
    f.fresh()
        .and_expect(header().date_value(LAST_MODIFIED, f.current_time))?;
    Ok(())
}

#[test]
fn long_value_with_correct_response_header_value() -> Result<(), AssertionFailure> {
    let f = setup();
    f.mvc
        .perform(get("/persons/1"))
        .and_expect(header().long_value("X-Rate-Limiting", 42))?;
    Ok(())
}

#[test]
fn string_with_missing_response_header() -> Result<(), AssertionFailure> {
    let f = setup();
    f.not_modified()
        .and_expect(status().is_not_modified())?
        .and_expect(header().no_values("X-Custom-Header"))?;
    Ok(())
}

#[test]
fn string_with_matcher_and_missing_response_header() -> Result<(), AssertionFailure> {
    let f = setup();
    f.not_modified()
        .and_expect(status().is_not_modified())?
        .and_expect(header().string("X-Custom-Header", null_value()))?;
    Ok(())
}

#[test]
fn long_value_with_missing_response_header() {
    let f = setup();
    let failure = f
        .not_modified()
        .and_expect(status().is_not_modified())
        .and_then(|actions| actions.and_expect(header().long_value("X-Custom-Header", 99)))
        .unwrap_err();

    assert_eq!(
        failure.to_string(),
        "Response does not contain header 'X-Custom-Header'"
    );
}

#[test]
fn does_not_exist() -> Result<(), AssertionFailure> {
    let f = setup();
    f.mvc
        .perform(get("/persons/1"))
        .and_expect(header().does_not_exist("X-Custom-Header"))?;
    Ok(())
}

#[test]
fn does_not_exist_fail() {
    let f = setup();
    let actions = f.mvc.perform(get("/persons/1"));
    let result = actions.and_expect(header().does_not_exist(LAST_MODIFIED));
    assert!(matches!(result, Err(AssertionFailure::HeaderPresent { .. })));
}

#[test]
fn does_exist() -> Result<(), AssertionFailure> {
    let f = setup();
    f.mvc
        .perform(get("/persons/1"))
        .and_expect(header().exists(LAST_MODIFIED))?;
    Ok(())
}

#[test]
fn does_exist_fail() {
    let f = setup();
    let actions = f.mvc.perform(get("/persons/1"));
    let result = actions.and_expect(header().exists("X-Custom-Header"));
    assert!(matches!(result, Err(AssertionFailure::HeaderMissing { .. })));
}

#[test]
fn string_with_incorrect_response_header_value() {
    let f = setup();
    f.assert_incorrect_response_header(
        header().string(LAST_MODIFIED, f.second_later.as_str()),
        &f.second_later,
    );
}

#[test]
fn string_with_matcher_and_incorrect_response_header_value() {
    let f = setup();
    f.assert_incorrect_response_header(
        header().string(LAST_MODIFIED, equal_to(&f.second_later)),
        &f.second_later,
    );
}

#[test]
fn date_value_with_incorrect_response_header_value() {
    let f = setup();
    let unexpected = f.current_time + 1000;
    f.assert_incorrect_response_header(
        header().date_value(LAST_MODIFIED, unexpected),
        &f.second_later,
    );
}

#[test]
fn long_value_with_incorrect_response_header_value() {
    let f = setup();
    let actions = f.mvc.perform(get("/persons/1"));
    let result = actions.and_expect(header().long_value("X-Rate-Limiting", 1));
    assert!(matches!(result, Err(AssertionFailure::HeaderMismatch { .. })));
}

#[test]
fn fixed_date_scenario() {
    let response: CapturedResponse = HttpResponse::ok()
        .with_header(LAST_MODIFIED, "Wed, 01 Jan 2020 00:00:00 GMT")
        .with_header("X-Rate-Limiting", "42")
        .with_header_values("Vary", ["foo", "bar"])
        .into();

    header()
        .string(LAST_MODIFIED, "Wed, 01 Jan 2020 00:00:00 GMT")
        .matches(&response)
        .unwrap();
    header()
        .string_values("Vary", ["foo", "bar"])
        .matches(&response)
        .unwrap();

    let failure = header()
        .long_value("X-Rate-Limiting", 1)
        .matches(&response)
        .unwrap_err();
    assert_eq!(
        failure,
        AssertionFailure::HeaderMismatch {
            name: "X-Rate-Limiting".to_string(),
            expected: "1".to_string(),
            actual: "42".to_string(),
        }
    );

    assert!(header().exists("X-Custom-Header").matches(&response).is_err());
}
