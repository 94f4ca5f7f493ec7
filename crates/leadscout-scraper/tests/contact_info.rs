//! Integration tests for `ContactCrawler::fetch_contact_info`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made. The crawler's contract is "never fail":
//! every scenario here must resolve to values or sentinels, never panic
//! or return an error.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadscout_core::UNAVAILABLE;
use leadscout_scraper::ContactCrawler;

fn test_crawler() -> ContactCrawler {
    ContactCrawler::new(2, "leadscout-test/0.1").expect("failed to build test ContactCrawler")
}

const CONTACT_PAGE: &str = r#"<html><body>
    <h1>Acme Trading Co</h1>
    <p>Write to contact@acme.in for enquiries.</p>
    <p>Error reporting by noreply@sentry.io</p>
    <footer>
        <a href="https://facebook.com/acmetrading">Facebook</a>
        <a href="https://instagram.com/acmetrading">Instagram</a>
    </footer>
</body></html>"#;

#[tokio::test]
async fn extracts_email_and_socials_from_a_served_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CONTACT_PAGE))
        .mount(&server)
        .await;

    let info = test_crawler().fetch_contact_info(&server.uri()).await;
    assert_eq!(info.email, "contact@acme.in");
    assert_eq!(
        info.social_links,
        "Facebook: https://facebook.com/acmetrading | Instagram: https://instagram.com/acmetrading"
    );
}

#[tokio::test]
async fn denylisted_email_alone_resolves_to_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>noreply@sentry.io hello@example.com</body></html>"),
        )
        .mount(&server)
        .await;

    let info = test_crawler().fetch_contact_info(&server.uri()).await;
    assert_eq!(info.email, UNAVAILABLE);
}

#[tokio::test]
async fn five_platform_anchors_yield_exactly_three_entries() {
    let page = r#"<html><body>
        <a href="https://facebook.com/acme">f</a>
        <a href="https://instagram.com/acme">i</a>
        <a href="https://linkedin.com/company/acme">l</a>
        <a href="https://twitter.com/acme">t</a>
        <a href="https://youtube.com/@acme">y</a>
    </body></html>"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let info = test_crawler().fetch_contact_info(&server.uri()).await;
    assert_eq!(info.social_links.split(" | ").count(), 3);
}

#[tokio::test]
async fn non_success_status_resolves_to_sentinels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let info = test_crawler().fetch_contact_info(&server.uri()).await;
    assert_eq!(info.email, UNAVAILABLE);
    assert_eq!(info.social_links, UNAVAILABLE);
}

#[tokio::test]
async fn connection_failure_resolves_to_sentinels() {
    // Nothing listens here; the port is taken from a server that has
    // already been shut down.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let info = test_crawler().fetch_contact_info(&uri).await;
    assert_eq!(info.email, UNAVAILABLE);
    assert_eq!(info.social_links, UNAVAILABLE);
}

#[tokio::test]
async fn slow_server_hits_the_fetch_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(CONTACT_PAGE)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let crawler = ContactCrawler::new(1, "leadscout-test/0.1").unwrap();
    let info = crawler.fetch_contact_info(&server.uri()).await;
    assert_eq!(info.email, UNAVAILABLE);
    assert_eq!(info.social_links, UNAVAILABLE);
}

#[tokio::test]
async fn empty_and_sentinel_urls_are_skipped_without_a_request() {
    let crawler = test_crawler();

    let info = crawler.fetch_contact_info("").await;
    assert_eq!(info.email, UNAVAILABLE);

    let info = crawler.fetch_contact_info(UNAVAILABLE).await;
    assert_eq!(info.email, UNAVAILABLE);
    assert_eq!(info.social_links, UNAVAILABLE);
}
