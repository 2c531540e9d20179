use crate::api::session_cookie::{clear_cookie, read_cookie, session_token, set_cookie};

use tl_auth::SessionToken;
use tl_config::SessionConfig;

use axum::http::{HeaderMap, HeaderValue, header};
use googletest::prelude::*;

fn headers_with_cookie(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn given_several_cookies_when_reading_then_named_one_is_returned() {
    let headers = headers_with_cookie("theme=dark; session_id=abc; lang=ja");

    assert_that!(read_cookie(&headers, "session_id"), some(eq("abc")));
    assert_that!(read_cookie(&headers, "lang"), some(eq("ja")));
    assert_that!(read_cookie(&headers, "missing"), none());
}

#[test]
fn given_no_cookie_header_when_reading_then_none() {
    let headers = HeaderMap::new();

    assert_that!(read_cookie(&headers, "session_id"), none());
}

#[test]
fn given_valid_token_cookie_when_extracting_then_token_is_parsed() {
    let config = SessionConfig::default();
    let token = SessionToken::generate();
    let headers = headers_with_cookie(&format!("session_id={}", token));

    assert_that!(session_token(&headers, &config), some(eq(&token)));
}

#[test]
fn given_malformed_token_cookie_when_extracting_then_none() {
    let config = SessionConfig::default();
    let headers = headers_with_cookie("session_id=not-a-token");

    assert_that!(session_token(&headers, &config), none());
}

#[test]
fn given_token_when_building_set_cookie_then_attributes_are_present() {
    let config = SessionConfig::default();
    let token = SessionToken::generate();

    let cookie = set_cookie(&token, &config);

    assert_that!(cookie, starts_with(format!("session_id={}", token)));
    assert_that!(cookie, contains_substring("HttpOnly"));
    assert_that!(cookie, contains_substring("Path=/"));
    assert_that!(cookie, contains_substring("Max-Age=86400"));
}

#[test]
fn given_config_when_building_clear_cookie_then_max_age_is_zero() {
    let config = SessionConfig::default();

    let cookie = clear_cookie(&config);

    assert_that!(cookie, starts_with("session_id=;"));
    assert_that!(cookie, contains_substring("Max-Age=0"));
}
