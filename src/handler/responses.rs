use crate::http::HttpMethod;
use crate::http::response::{HttpResponse, ResponseHeader};
use crate::http::status::HttpStatus;

fn error_page(status: HttpStatus) -> HttpResponse {
    let mut res = HttpResponse::with_status(status);
    res.body = status.to_string().into_bytes();
    res.set_header(ResponseHeader::ContentType, "text/plain");
    res
}

pub fn bad_request() -> HttpResponse {
    error_page(HttpStatus::BadRequest)
}

pub fn not_found() -> HttpResponse {
    error_page(HttpStatus::NotFound)
}

pub fn method_not_allowed(allowed: &[HttpMethod]) -> HttpResponse {
    let allow = allowed
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    error_page(HttpStatus::MethodNotAllowed).with_header("Allow", &allow)
}

pub fn internal_server_error() -> HttpResponse {
    error_page(HttpStatus::InternalServerError)
}

pub fn any_error(err: HttpStatus) -> HttpResponse {
    match err {
        HttpStatus::BadRequest => bad_request(),
        HttpStatus::NotFound => not_found(),
        HttpStatus::InternalServerError => internal_server_error(),
        status if status.allows_body() => error_page(status),
        status => HttpResponse::with_status(status),
    }
}
