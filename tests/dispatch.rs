use pretty_assertions::assert_eq;
use rustymock::prelude::*;

const LAST_MODIFIED: u64 = 1_577_836_800_000;

fn show_person(req: &HttpRequest) -> HttpResponse {
    let name = match req.path_param("id") {
        Some("1") => "Jason",
        _ => return HttpResponse::with_status(HttpStatus::NotFound),
    };

    HttpResponse::ok()
        .with_last_modified(LAST_MODIFIED)
        .with_etag("\"person-1\"")
        .with_body("text/plain", name)
}

fn create_person(req: &HttpRequest) -> HttpResponse {
    HttpResponse::with_status(HttpStatus::Created)
        .with_header("Location", "/persons/2")
        .with_header("X-Received-Bytes", &req.body.len().to_string())
}

fn mvc(config: MockConfig) -> MockMvc {
    let router = Router::new()
        .get("/persons/{id}", show_person)
        .post("/persons", create_person);
    MockMvc::standalone(router).with_config(config).build()
}

#[test]
fn get_captures_status_headers_and_body() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig::default());
    let actions = mvc.perform(get("/persons/1"));

    actions
        .and_expect(status().is_ok())?
        .and_expect(header().string("Content-Type", "text/plain"))?
        .and_expect(header().long_value("Content-Length", 5))?
        .and_expect(header().date_value("Last-Modified", LAST_MODIFIED))?;

    assert_eq!(actions.response().body_text(), Some("Jason"));
    Ok(())
}

#[test]
fn post_body_reaches_the_handler() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig::default());
    mvc.perform(post("/persons").content_type("text/plain").body("Jason"))
        .and_expect(status().is_created())?
        .and_expect(header().string("Location", ends_with("/2")))?
        .and_expect(header().long_value("X-Received-Bytes", 5))?;
    Ok(())
}

#[test]
fn unknown_routes_and_methods() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig::default());

    mvc.perform(get("/people"))
        .and_expect(status().is_not_found())?;
    mvc.perform(delete("/persons/1"))
        .and_expect(status().is_method_not_allowed())?
        .and_expect(header().string("Allow", "GET"))?;
    mvc.perform(get("/persons/9"))
        .and_expect(status().is_not_found())?;
    Ok(())
}

#[test]
fn invalid_requests_get_error_responses() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig {
        max_body_size: 4,
        ..MockConfig::default()
    });

    mvc.perform(get("/persons/1").body("oops"))
        .and_expect(status().is_bad_request())?;
    mvc.perform(post("/persons").body("Jason"))
        .and_expect(status().is(413))?;
    mvc.perform(post("/persons").header("Content-Length", "x").body("Jo"))
        .and_expect(status().is_bad_request())?;
    Ok(())
}

#[test]
fn default_host_and_server_name() -> Result<(), AssertionFailure> {
    let mvc = MockMvc::standalone(Router::new().get("/host", |req: &HttpRequest| {
        let host = req.headers.get("Host").unwrap_or_default().to_string();
        HttpResponse::ok().with_header("X-Host", &host)
    }))
    .with_config(MockConfig {
        default_host: "example.org".to_string(),
        server_name: Some("rustymock/0.1".to_string()),
        ..MockConfig::default()
    })
    .build();

    mvc.perform(get("/host"))
        .and_expect(header().string("X-Host", "example.org"))?
        .and_expect(header().string("Server", "rustymock/0.1"))?;
    mvc.perform(get("/host").header("Host", "other.org"))
        .and_expect(header().string("X-Host", "other.org"))?;
    Ok(())
}

#[test]
fn head_keeps_headers_without_body() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig::default());
    let actions = mvc.perform(head("/persons/1"));

    actions
        .and_expect(status().is_ok())?
        .and_expect(header().long_value("Content-Length", 5))?;
    assert!(actions.response().body().is_empty());
    Ok(())
}

#[test]
fn conditional_requests() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig::default());

    mvc.perform(get("/persons/1").if_none_match("\"person-1\""))
        .and_expect(status().is_not_modified())?
        .and_expect(header().does_not_exist("Content-Type"))?
        .and_expect(header().exists("ETag"))?;

    mvc.perform(get("/persons/1").if_modified_since("Wed, 01 Jan 2020 00:00:00 GMT"))
        .and_expect(status().is_not_modified())?;

    mvc.perform(get("/persons/1").if_modified_since("Tue, 31 Dec 2019 00:00:00 GMT"))
        .and_expect(status().is_ok())?;

    let disabled = mvc_without_conditionals();
    disabled
        .perform(get("/persons/1").if_none_match("*"))
        .and_expect(status().is_ok())?;
    Ok(())
}

fn mvc_without_conditionals() -> MockMvc {
    mvc(MockConfig {
        conditional_requests: false,
        ..MockConfig::default()
    })
}

#[test]
fn closures_are_matchers() -> Result<(), AssertionFailure> {
    let mvc = mvc(MockConfig::default());
    mvc.perform(get("/persons/1"))
        .and_expect(|res: &CapturedResponse| {
            if res.body().len() < 10 {
                Ok(())
            } else {
                Err(AssertionFailure::Custom("body too long".to_string()))
            }
        })?;
    Ok(())
}

#[test]
fn chain_stops_at_first_failure() {
    let mvc = mvc(MockConfig::default());
    let actions = mvc.perform(get("/persons/1"));

    let result = actions
        .and_expect(header().exists("X-Custom-Header"))
        .and_then(|actions| {
            actions.and_expect(|_: &CapturedResponse| -> Result<(), AssertionFailure> {
                panic!("evaluated after a failed expectation")
            })
        });

    assert_eq!(
        result.unwrap_err(),
        AssertionFailure::HeaderMissing {
            name: "X-Custom-Header".to_string()
        }
    );
}

#[test]
fn captured_response_renders_as_http() {
    let mvc = mvc(MockConfig::default());
    let response = mvc.perform(get("/persons/1")).and_return();

    assert_eq!(
        response.to_string(),
        "HTTP/1.1 200 OK\r\n\
         Last-Modified: Wed, 01 Jan 2020 00:00:00 GMT\r\n\
         ETag: \"person-1\"\r\n\
         Content-Type: text/plain\r\n\
         Content-Length: 5\r\n"
    );
}

#[test]
fn handler_built_not_modified_has_no_body() -> Result<(), AssertionFailure> {
    let mvc = MockMvc::standalone(Router::new().get("/nm", |_: &HttpRequest| {
        HttpResponse::with_status(HttpStatus::NotModified).with_body("text/plain", "stale")
    }))
    .build();
    let actions = mvc.perform(get("/nm"));

    actions
        .and_expect(status().is_not_modified())?
        .and_expect(header().does_not_exist("Content-Type"))?
        .and_expect(header().does_not_exist("Content-Length"))?;
    assert!(actions.response().body().is_empty());
    Ok(())
}

#[test]
fn one_mock_serves_several_threads() {
    let mvc = &mvc(MockConfig::default());

    std::thread::scope(|s| {
        let workers = [s.spawn(move || read_person(mvc)), s.spawn(move || read_person(mvc))];
        for worker in workers {
            assert_eq!(worker.join().unwrap(), Ok("Jason".to_string()));
        }
    });
}

fn read_person(mvc: &MockMvc) -> Result<String, AssertionFailure> {
    let actions = mvc.perform(get("/persons/1"));
    actions
        .and_expect(status().is_ok())?
        .and_expect(header().long_value("Content-Length", 5))?;
    Ok(actions.response().body_text().unwrap_or_default().to_string())
}
