use crate::entry::Level;
use crate::logger::Logger;
use crate::test_helpers::{FakeResponse, recorded};
use std::time::Duration;

#[test]
fn http_status_writes_sink_and_record() {
    // Arrange
    let (logger, logs, _) = recorded(Logger::builder());
    let id = logger.new_id();
    let mut response = FakeResponse::default();

    // Act
    logger.http_status(&id, &mut response, 503);
    logger.end(&id, "", "GET", "/", Duration::ZERO);

    // Assert
    assert_eq!(response.codes, vec![503]);
    assert_eq!(logs.take()[0].status, Some(503));
}

#[test]
fn redirect_only_records_the_status() {
    let (logger, logs, _) = recorded(Logger::builder());
    let id = logger.new_id();

    logger.redirect(&id, 302);
    logger.end(&id, "", "GET", "/old", Duration::ZERO);

    assert_eq!(logs.take()[0].status, Some(302));
}

#[test]
fn bad_request_sets_400_and_logs_an_error() {
    let (logger, logs, errors) = recorded(Logger::builder());
    let id = logger.new_id();
    let mut response = FakeResponse::default();

    logger
        .bad_request(&id, &mut response, "missing field")
        .data("field", "email");
    logger.end(&id, "", "POST", "/signup", Duration::ZERO);

    assert_eq!(response.codes, vec![400]);
    let records = logs.take();
    assert_eq!(records[0].status, Some(400));
    assert_eq!(records[0].entries[0].level, Level::Error);
    assert_eq!(records[0].entries[0].message, "Missing field.");
    assert_eq!(errors.take().len(), 1);
}

#[test]
fn unauthorised_and_not_found_codes() {
    let logger = Logger::new();
    let a = logger.new_id();
    let b = logger.new_id();
    let mut response = FakeResponse::default();

    logger.unauthorised(&a, &mut response);
    logger.not_found(&b, &mut response);

    assert_eq!(response.codes, vec![401, 404]);
    assert_eq!(logger.store().status(&a), 401);
    assert_eq!(logger.store().status(&b), 404);
}

#[test]
fn ending_a_request_forgets_its_status() {
    let logger = Logger::new();
    let id = logger.new_id();
    let mut response = FakeResponse::default();
    logger.not_found(&id, &mut response);

    logger.end(&id, "", "GET", "/missing", Duration::ZERO);

    assert_eq!(logger.store().pending_statuses(), 0);
}
