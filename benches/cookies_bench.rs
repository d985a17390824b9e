use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ddt::config::{ConfigOverrides, DdtConfig};
use ddt::cookies::jar::CookieJar;
use ddt::cookies::psl::is_public_suffix;
use ddt::cookies::watchcookie::WatchCookie;
use std::sync::Arc;

fn benchmark_watch_cookie_set(c: &mut Criterion) {
    let jar = CookieJar::new();
    let config = DdtConfig::resolve(ConfigOverrides::default(), "www.example.com");
    let cookie = WatchCookie::new(Arc::new(jar.document("www.example.com")));

    c.bench_function("watch_cookie_set", |b| {
        b.iter(|| {
            let _ = cookie.set(
                black_box(&config),
                black_box("www.example.com"),
                black_box("cache,db,net,ui"),
                None,
            );
        })
    });
}

fn benchmark_watch_cookie_get(c: &mut Criterion) {
    let jar = CookieJar::new();
    let config = DdtConfig::resolve(ConfigOverrides::default(), "www.example.com");
    // Pre-populate with unrelated cookies
    for i in 0..40 {
        let _ = jar.parse_and_save_cookie("www.example.com", &format!("cookie{}=val", i));
    }
    let cookie = WatchCookie::new(Arc::new(jar.document("www.example.com")));
    let _ = cookie.set(&config, "www.example.com", "cache,db,net,ui", None);

    c.bench_function("watch_cookie_get", |b| {
        b.iter(|| {
            black_box(cookie.get(black_box(&config)));
        })
    });
}

fn bench_psl_lookup(c: &mut Criterion) {
    let domains = ["com", "co.uk", "github.io", "example.com", "sub.example.com"];

    c.bench_function("psl_lookup_mixed_domains", |b| {
        b.iter(|| {
            for domain in &domains {
                black_box(is_public_suffix(domain));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_watch_cookie_set,
    benchmark_watch_cookie_get,
    bench_psl_lookup
);
criterion_main!(benches);
