use cookiekit::cookies::factory::CookieManagerFactory;
use cookiekit::cookies::options::CookieOptions;
use cookiekit::cookies::samesite::SameSite;
use cookiekit::cookies::sink::ResponseCookies;
use http::{HeaderMap, Request};
use std::net::IpAddr;

fn request(cookie: &str) -> Request<()> {
    Request::builder()
        .uri("/checkout")
        .header(http::header::HOST, "shop.example.com:8443")
        .header(http::header::COOKIE, cookie)
        .body(())
        .unwrap()
}

#[test]
fn test_request_flow_writes_set_cookie_headers() {
    let factory = CookieManagerFactory::new(
        CookieOptions::new()
            .secure(true)
            .http_only(true)
            .same_site(SameSite::Strict),
    );
    let peer: IpAddr = "203.0.113.7".parse().unwrap();

    let mut headers = HeaderMap::new();
    let mut cookies = factory.for_request(&request("cart=3; stale=1"), Some(peer), &mut headers);
    assert_eq!(cookies.ip(), Some(peer));
    assert_eq!(cookies.domain(), Some("shop.example.com"));

    cookies.set("cart", &4).unwrap().delete("stale").delete("never-sent");
    drop(cookies);

    let values: Vec<&str> = headers
        .get_all(http::header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(values.len(), 2);

    assert!(values[0].starts_with("cart=4"));
    assert!(values[0].contains("Secure"));
    assert!(values[0].contains("HttpOnly"));
    assert!(values[0].contains("SameSite=Strict"));
    assert!(values[0].contains("Domain=shop.example.com"));
    assert!(!values[0].contains("Expires"));

    assert!(values[1].starts_with("stale=1"));
    assert!(values[1].contains("Expires="));
}

#[test]
fn test_request_defaults_do_not_leak_between_requests() {
    let factory = CookieManagerFactory::new(CookieOptions::new().path("/"));

    let mut first = factory.for_request(&request("a=1"), None, ResponseCookies::new());
    first.set_options(&CookieOptions::new().path("/admin").secure(true));
    first.set("a", "2").unwrap();

    let mut second = factory.for_request(&request("a=1"), None, ResponseCookies::new());
    second.set("a", "3").unwrap();

    assert_eq!(first.sink().instructions()[0].path, "/admin");
    assert_eq!(second.sink().instructions()[0].path, "/");
    assert!(!second.sink().instructions()[0].secure);
}

#[test]
fn test_per_call_options() {
    let factory = CookieManagerFactory::default();
    let mut cookies = factory.for_request(&request("a=1; b=2"), None, ResponseCookies::new());

    cookies
        .set_with("remember", "yes", &CookieOptions::new().expires_in(86_400))
        .unwrap();
    cookies.clear_with(&CookieOptions::new().path("/checkout"));

    let sent = cookies.sink().instructions();
    assert_eq!(sent.len(), 3);
    assert!(sent[0].expires_at > 0);
    assert!(sent[1..].iter().all(|i| i.path == "/checkout"));
    assert_eq!(cookies.expires_at(), 0);
    assert_eq!(cookies.path(), "/");
}

#[test]
fn test_global_factory_keeps_first_options() {
    let first = CookieManagerFactory::global(CookieOptions::new().path("/first"));
    let again = CookieManagerFactory::global(CookieOptions::new().path("/second"));
    assert!(std::ptr::eq(first, again));

    let cookies = again.for_request(&request(""), None, ResponseCookies::new());
    assert_eq!(cookies.path(), "/first");
}

#[test]
fn test_typed_json_read() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Cart {
        items: u32,
    }

    let factory = CookieManagerFactory::default();
    let cookies = factory.for_request(
        &request("cart=%7B%22items%22%3A2%7D"),
        None,
        ResponseCookies::new(),
    );
    assert_eq!(cookies.get_json::<Cart>("cart").unwrap(), Some(Cart { items: 2 }));
}
