use criterion::{Criterion, black_box, criterion_group, criterion_main};
use paste_indent::{IndentOptions, reindent};

fn nested_block(line_count: usize, indent: &str) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        let depth = 2 + (i % 6);
        for _ in 0..depth {
            out.push_str(indent);
        }
        if i % 17 == 0 {
            out.push('\n');
            continue;
        }
        out.push_str(&format!("let value_{i:05} = compute({i}); // paste-indent bench\n"));
    }
    // Drop the final '\n' so the last line is not an empty trailing one.
    out.pop();
    out
}

fn bench_reindent_spaces(c: &mut Criterion) {
    let text = nested_block(10_000, "    ");
    let options = IndentOptions::spaces(4);
    c.bench_function("reindent/spaces_10k_lines", |b| {
        b.iter(|| black_box(reindent(black_box(&text), 12, &options)))
    });
}

fn bench_reindent_tabs_from_spaces(c: &mut Criterion) {
    let text = nested_block(10_000, "  \t");
    let options = IndentOptions::tabs(4);
    c.bench_function("reindent/tabs_mixed_10k_lines", |b| {
        b.iter(|| black_box(reindent(black_box(&text), 3, &options)))
    });
}

fn bench_reindent_fast_path(c: &mut Criterion) {
    let text = format!("fn main() {{\n{}\n}}", nested_block(10_000, "    "));
    let options = IndentOptions::spaces(4);
    c.bench_function("reindent/no_op_10k_lines", |b| {
        b.iter(|| black_box(reindent(black_box(&text), 0, &options)))
    });
}

criterion_group!(
    benches,
    bench_reindent_spaces,
    bench_reindent_tabs_from_spaces,
    bench_reindent_fast_path
);
criterion_main!(benches);
