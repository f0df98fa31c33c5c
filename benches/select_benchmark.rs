//! View selection benchmarks.
//!
//! Resolution runs on every "open document" request, so it should stay
//! negligible even for documents open in many tabs.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabviews::model::{Activation, DocumentId, Existing, Hints, Placement, Strategy, TabId, View, ViewId};
use tabviews::resolve::{Focus, HintSolver, LastUsedStrategy, ViewResolutionPolicy};
use tabviews::state::ViewManager;

/// Candidates spread over 16 tabs with scrambled activations.
fn candidates(count: u64) -> Vec<View> {
    let document = DocumentId::new("src/main.rs").expect("valid document id");
    (0..count)
        .map(|i| {
            View::new(ViewId::new(i + 1), document.clone(), TabId::new(i % 16 + 1))
                .with_activation(Activation::new((i * 7919) % (count + 1)))
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let focus = Focus {
        active_view: None,
        current_tab: Some(TabId::new(3)),
    };
    let last_used = Hints::new().with_strategy(Strategy::LastUsed);
    let fallback_chain = Hints::new()
        .with_existing(Existing::CurrentTab)
        .with_strategy(Strategy::Current)
        .with_strategy(Strategy::LastUsed);

    for count in [10u64, 1_000, 100_000] {
        let views = candidates(count);

        group.bench_with_input(BenchmarkId::new("hint_solver_last_used", count), &views, |b, views| {
            b.iter(|| HintSolver.select(black_box(views), black_box(&last_used), &focus))
        });
        group.bench_with_input(BenchmarkId::new("hint_solver_fallback", count), &views, |b, views| {
            b.iter(|| HintSolver.select(black_box(views), black_box(&fallback_chain), &focus))
        });
        group.bench_with_input(BenchmarkId::new("last_used_strategy", count), &views, |b, views| {
            b.iter(|| LastUsedStrategy.select(black_box(views), black_box(&last_used), &focus))
        });
    }
    group.finish();
}

fn bench_editor_for(c: &mut Criterion) {
    let mut manager = ViewManager::headless();
    for i in 0..1_000 {
        let document = DocumentId::new(format!("src/file_{}.rs", i % 50)).expect("valid document id");
        manager.create_editor(document, Placement::NewTab);
    }
    let document = DocumentId::new("src/file_7.rs").expect("valid document id");
    let hints = Hints::new()
        .with_strategy(Strategy::LastUsed)
        .with_create_if_needed(false);

    c.bench_function("editor_for_1000_views", |b| {
        b.iter(|| manager.editor_for(black_box(&document), black_box(&hints)))
    });
}

criterion_group!(benches, bench_select, bench_editor_for);
criterion_main!(benches);
