// Unification benchmarks.
//
// These measure the structural walk on deep and wide types, the
// instantiation entry point on a realistic generic function, and the
// no-quantifier fast path of the equivalence check.

use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use rill_typecheck::{apply_arg_to_fn, unify_equivalent};
use rill_types::{TypeId, TypePool};

/// Builds `[[...[Int]...]]` nested `depth` levels.
fn deep_list(pool: &mut TypePool, depth: usize) -> TypeId {
    let mut ty = pool.int();
    for _ in 0..depth {
        ty = pool.list(ty);
    }
    ty
}

/// Benchmark equivalence checks on deeply nested closed types.
///
/// Interning makes these id comparisons, so this measures the fast path
/// staying flat as depth grows.
fn bench_closed_equivalence(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_equivalence");

    for depth in &[8usize, 64, 512] {
        let mut pool = TypePool::new();
        let l = deep_list(&mut pool, *depth);
        let r = deep_list(&mut pool, *depth);

        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            depth,
            |b, _| {
                b.iter(|| {
                    unify_equivalent(&mut pool, black_box(l), black_box(r))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark instantiating a generic function against a deep argument.
///
/// This exercises the full pipeline: bound-set construction, the
/// structural walk, and substitution's rebuild through the pool.
fn bench_generic_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("generic_application");

    for depth in &[4usize, 16, 64] {
        let mut pool = TypePool::new();
        let a = pool.fresh_var();
        let list_a = pool.list(a);
        let body = pool.fn_ty(list_a, a);
        let f = pool.forall(vec![a], body);
        let inner = deep_list(&mut pool, *depth);
        let arg = pool.list(inner);

        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            depth,
            |b, _| {
                b.iter(|| {
                    apply_arg_to_fn(&mut pool, black_box(arg), black_box(f))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark unifying wide tuples of bound variables against closed
/// elements, the worst case for equivalence-class bookkeeping.
fn bench_wide_tuple_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tuple_inference");

    for width in &[8usize, 64, 256] {
        let mut pool = TypePool::new();
        let int = pool.int();

        let vars: Vec<TypeId> = (0..*width).map(|_| pool.fresh_var()).collect();
        let var_tuple = pool.tuple(vars.clone());
        let generic = pool.forall(vars, var_tuple);

        let closed: Vec<TypeId> = (0..*width).map(|_| int).collect();
        let closed_tuple = pool.tuple(closed);

        group.bench_with_input(
            BenchmarkId::from_parameter(width),
            width,
            |b, _| {
                b.iter(|| {
                    unify_equivalent(
                        &mut pool,
                        black_box(generic),
                        black_box(closed_tuple),
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_closed_equivalence,
    bench_generic_application,
    bench_wide_tuple_inference
);
criterion_main!(benches);
