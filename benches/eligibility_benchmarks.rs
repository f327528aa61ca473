//! Performance benchmarks for the eligibility engine.
//!
//! Measures the three core rules directly, then the leave check and roster
//! summary through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use eligibility_engine::api::{create_router, AppState};
use eligibility_engine::config::CatalogLoader;
use eligibility_engine::eligibility::{
    apply_restriction_rules, find_leave_conflict, resolve_operational_status, ProposedLeave,
};
use eligibility_engine::models::{Leave, LeaveInterval, PersonRecords, Restriction};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

/// Creates `count` consecutive, non-overlapping ten-day leaves for person 3.
fn create_leaves(count: usize) -> Vec<Leave> {
    (0..count)
        .map(|i| {
            let start = base_date() + Days::new(i as u64 * 10);
            Leave {
                id: i as u64 + 1,
                person_id: 3,
                leave_type: "FERIAS".to_string(),
                start_date: start,
                end_date: Some(start + Days::new(9)),
                indeterminate: false,
                document: String::new(),
                deleted: false,
            }
        })
        .collect()
}

fn create_restriction(id: u64, person_id: u64) -> Restriction {
    Restriction {
        id,
        person_id,
        codes: vec!["EF".to_string(), "UA".to_string()],
        medical_opinion: String::new(),
        start_date: base_date(),
        end_date: base_date() + Days::new(180),
        document: String::new(),
        has_critical: true,
        deleted: false,
    }
}

fn bench_restriction_rules(c: &mut Criterion) {
    let catalog = CatalogLoader::builtin().unwrap().into_catalog();
    let codes = ["se", "ua", "ef", "lp", "dv", "ef"];

    c.bench_function("restriction_rules", |b| {
        b.iter(|| black_box(apply_restriction_rules(black_box(&codes), &catalog)))
    });
}

/// Benchmark: overlap scan, with the free slot after every existing leave.
fn bench_leave_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("leave_overlap");

    for count in [1usize, 10, 100, 1000] {
        let existing = create_leaves(count);
        let start = base_date() + Days::new(count as u64 * 10);
        let proposed = ProposedLeave {
            person_id: 3,
            interval: LeaveInterval::bounded(start, start + Days::new(5)),
            exclude_id: None,
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("leaves", count), &existing, |b, existing| {
            b.iter(|| black_box(find_leave_conflict(&proposed, existing)))
        });
    }

    group.finish();
}

fn bench_operational_status(c: &mut Criterion) {
    let leaves = create_leaves(50);
    let restrictions: Vec<Restriction> = (1..=10).map(|id| create_restriction(id, 3)).collect();
    let reference_date = base_date() + Days::new(1000);

    c.bench_function("operational_status", |b| {
        b.iter(|| {
            black_box(resolve_operational_status(
                black_box(reference_date),
                &restrictions,
                &leaves,
            ))
        })
    });
}

fn bench_leave_check_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(
        CatalogLoader::builtin().unwrap().into_catalog(),
    ));
    let body = serde_json::json!({
        "person_id": 3,
        "leave_type": "LTS",
        "start_date": "2028-01-01",
        "end_date": "2028-01-10",
        "existing_leaves": create_leaves(20)
    })
    .to_string();

    c.bench_function("leave_check_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/leaves/check")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: roster summary over growing rosters.
fn bench_roster_summary(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(CatalogLoader::builtin().unwrap().into_catalog());

    let mut group = c.benchmark_group("roster_summary");

    for people in [10u64, 100, 1000] {
        let router = create_router(state.clone());
        let personnel: Vec<PersonRecords> = (1..=people)
            .map(|person_id| PersonRecords {
                person_id,
                restrictions: vec![create_restriction(person_id, person_id)],
                leaves: Vec::new(),
            })
            .collect();
        let body = serde_json::json!({
            "reference_date": "2026-03-01",
            "personnel": personnel
        })
        .to_string();

        group.throughput(Throughput::Elements(people));
        group.bench_with_input(BenchmarkId::new("people", people), &people, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/roster/summary")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_restriction_rules,
    bench_leave_overlap,
    bench_operational_status,
    bench_leave_check_endpoint,
    bench_roster_summary,
);
criterion_main!(benches);
