use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gitwire::git::parser::{
    parse_branches, parse_log, parse_stashes, parse_status, parse_worktrees, LOG_SENTINEL,
};

// Sample git outputs for realistic benchmarking
const SMALL_STATUS: &str = "?? untracked.txt\n M src/main.rs\nA  src/lib.rs";

fn generate_large_status(num_files: usize) -> String {
    let mut output = String::new();
    for i in 0..num_files {
        output.push_str(&format!(" M file_{}.rs\n", i));
    }
    output
}

fn generate_log(num_commits: usize) -> String {
    let mut output = String::new();
    for i in 0..num_commits {
        output.push_str(&format!(
            "{:040x}\nAuthor {}\nauthor{}@example.com\n{}\nCommit message {}\nBody line\n{}\n",
            i,
            i,
            i,
            1_700_000_000 + i,
            i,
            LOG_SENTINEL
        ));
    }
    output
}

const BRANCH_LIST: &str = "* main\n  feature-x\n  bugfix-123\n  experiment\n  release-v1.0";

const STASH_LIST: &str = "stash@{0}: WIP on main: fix bug\n\
                          stash@{1}: Experimental feature\n\
                          stash@{2}: Save progress";

fn generate_worktree_list(num_worktrees: usize) -> String {
    let mut output = String::new();
    for i in 0..num_worktrees {
        output.push_str(&format!(
            "worktree /repos/wt_{}\nHEAD {:040x}\nbranch refs/heads/branch-{}\n\n",
            i, i, i
        ));
    }
    output
}

fn bench_parse_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_status");

    group.bench_with_input(
        BenchmarkId::new("small", "3 files"),
        &SMALL_STATUS,
        |b, input| b.iter(|| parse_status(black_box(input))),
    );

    let large_status = generate_large_status(100);
    group.bench_with_input(
        BenchmarkId::new("large", "100 files"),
        &large_status,
        |b, input| b.iter(|| parse_status(black_box(input))),
    );

    let xlarge_status = generate_large_status(1000);
    group.bench_with_input(
        BenchmarkId::new("xlarge", "1000 files"),
        &xlarge_status,
        |b, input| b.iter(|| parse_status(black_box(input))),
    );

    group.finish();
}

fn bench_parse_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_log");

    let small_log = generate_log(3);
    group.bench_with_input(
        BenchmarkId::new("small", "3 commits"),
        &small_log,
        |b, input| b.iter(|| parse_log(black_box(input), LOG_SENTINEL)),
    );

    let medium_log = generate_log(50);
    group.bench_with_input(
        BenchmarkId::new("medium", "50 commits"),
        &medium_log,
        |b, input| b.iter(|| parse_log(black_box(input), LOG_SENTINEL)),
    );

    let large_log = generate_log(500);
    group.bench_with_input(
        BenchmarkId::new("large", "500 commits"),
        &large_log,
        |b, input| b.iter(|| parse_log(black_box(input), LOG_SENTINEL)),
    );

    group.finish();
}

fn bench_parse_branches(c: &mut Criterion) {
    c.bench_function("parse_branches", |b| {
        b.iter(|| parse_branches(black_box(BRANCH_LIST)))
    });
}

fn bench_parse_stashes(c: &mut Criterion) {
    c.bench_function("parse_stashes", |b| {
        b.iter(|| parse_stashes(black_box(STASH_LIST)))
    });
}

fn bench_parse_worktrees(c: &mut Criterion) {
    let listing = generate_worktree_list(20);
    c.bench_function("parse_worktrees", |b| {
        b.iter(|| parse_worktrees(black_box(&listing)))
    });
}

criterion_group!(
    benches,
    bench_parse_status,
    bench_parse_log,
    bench_parse_branches,
    bench_parse_stashes,
    bench_parse_worktrees
);
criterion_main!(benches);
