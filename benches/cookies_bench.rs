use cookiekit::cookies::jar::CookieJar;
use cookiekit::cookies::manager::CookieManager;
use cookiekit::cookies::request::RequestContext;
use cookiekit::cookies::sink::ResponseCookies;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn benchmark_jar_parse(c: &mut Criterion) {
    // Pre-build a realistic Cookie header
    let header = (0..30)
        .map(|i| format!("cookie{}=value%20{}", i, i))
        .collect::<Vec<_>>()
        .join("; ");

    c.bench_function("cookie_jar_parse", |b| {
        b.iter(|| {
            black_box(CookieJar::from_header(black_box(&header)));
        })
    });
}

fn benchmark_set_and_render(c: &mut Criterion) {
    let ctx = RequestContext::new().with_server_name("example.com");
    let payload = json!({"items": [1, 2, 3], "total": 42});

    c.bench_function("cookie_set_json_and_render", |b| {
        b.iter(|| {
            let mut manager =
                CookieManager::new(ctx.clone(), CookieJar::new(), ResponseCookies::new());
            manager.set("cart", black_box(&payload)).unwrap();
            let mut headers = http::HeaderMap::new();
            manager.sink().write_headers(&mut headers).unwrap();
            black_box(headers);
        })
    });
}

fn benchmark_clear(c: &mut Criterion) {
    let jar: CookieJar = (0..50).map(|i| (format!("c{}", i), "v")).collect();
    let ctx = RequestContext::new().with_server_name("example.com");

    c.bench_function("cookie_clear_50", |b| {
        b.iter(|| {
            let mut manager = CookieManager::new(ctx.clone(), jar.clone(), ResponseCookies::new());
            manager.clear();
            black_box(manager.sink().len());
        })
    });
}

criterion_group!(
    benches,
    benchmark_jar_parse,
    benchmark_set_and_render,
    benchmark_clear
);
criterion_main!(benches);
