//! Super-chain resolution benchmarks.
//!
//! Measures member lookups and completion collection against linear class
//! chains of increasing depth, where every level declares a few members.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nomina::common::{ProjectId, SearchContext};
use nomina::index::{ClassRecord, FieldDef, InMemoryIndex, MemberIndex, MethodDef};
use nomina::lsp::{MemberCompletionRequest, complete_members};
use nomina::solver::{MemberResolver, ResolveSession, TypeNode};

const MEMBERS_PER_LEVEL: usize = 8;

/// `C0 : C1 : ... : C{depth-1}`, each level with fields and methods.
fn linear_chain(depth: usize) -> InMemoryIndex {
    let mut index = InMemoryIndex::new();
    for level in 0..depth {
        let name = format!("C{level}");
        let parent = (level + 1 < depth).then(|| format!("C{}", level + 1));
        index.add_class(ClassRecord::new(name.as_str(), parent.as_deref()));
        for member in 0..MEMBERS_PER_LEVEL {
            index.add_field(FieldDef::new(name.as_str(), format!("f{level}_{member}")));
            index.add_method(MethodDef::instance(name.as_str(), format!("m{level}_{member}")));
        }
        index.add_method(MethodDef::static_method(name.as_str(), format!("new{level}")));
    }
    index
}

fn root(index: &InMemoryIndex, ctx: &SearchContext) -> TypeNode {
    let record = index.find_class("C0", ctx).unwrap_or_else(|| ClassRecord::new("C0", None));
    TypeNode::from_record(&record)
}

fn bench_find_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_find_field");
    let ctx = SearchContext::for_project(ProjectId(1));

    for depth in [1usize, 4, 16, 64] {
        let index = linear_chain(depth);
        let root = root(&index, &ctx);
        // Declared on the last level: worst case walk.
        let name = format!("f{}_0", depth - 1);

        group.bench_with_input(BenchmarkId::new("deepest", depth), &depth, |b, _| {
            b.iter(|| {
                let mut session = ResolveSession::new(&index, ctx);
                let found =
                    MemberResolver::new(&mut session).find_field(&root, black_box(&name));
                black_box(found)
            });
        });
    }

    group.finish();
}

fn bench_complete(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_complete");

    for depth in [1usize, 4, 16, 64] {
        let index = linear_chain(depth);
        let root = root(&index, &SearchContext::for_project(ProjectId(1)));

        for prefix in ["", "m"] {
            let request = MemberCompletionRequest::new(ProjectId(1), prefix);
            let id = format!("prefix_{}", if prefix.is_empty() { "none" } else { prefix });
            group.bench_with_input(BenchmarkId::new(id, depth), &depth, |b, _| {
                b.iter(|| black_box(complete_members(&index, &root, &request)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_find_field, bench_complete);
criterion_main!(benches);
