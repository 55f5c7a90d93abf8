use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::fmt::Write;
use std::hint::black_box;
use strdb::ProfileIndex;
use strdb::database::parse_str;

const FIRST_SEQUENCE: &str = "AGATAGATAGATTATCTATCGATAGATAAGATCCCCAGATTATC";
const SECOND_SEQUENCE: &str = "TATCTATCGATAGATAGATAAGATTTTTAGATAGAT";
const MOTIFS: [&str; 6] = ["AGAT", "TATC", "GATA", "CCCC", "TTTT", "AGATAGAT"];

const DATABASE_SIZES: &[(&str, usize)] = &[("1k", 1_000), ("10k", 10_000)];

/// Builds a database with `num_people` people in scrambled name order.
fn synthetic_database(num_people: usize) -> String {
    let mut out = format!("{FIRST_SEQUENCE}\n{SECOND_SEQUENCE}\n{num_people}\n");
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    for i in 0..num_people {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let _ = write!(out, "First{i} Last{state:016x} {}", MOTIFS.len());
        for (j, motif) in MOTIFS.iter().enumerate() {
            let _ = write!(out, " {motif} {}", (state >> (4 * j)) % 6);
        }
        out.push('\n');
    }

    out
}

fn load_index(input: &str) -> ProfileIndex {
    parse_str(input).unwrap()
}

fn database_parsing(c: &mut Criterion) {
    for (name, size) in DATABASE_SIZES {
        let input = synthetic_database(*size);
        c.bench_function(&format!("parse {name}"), |b| {
            b.iter(|| load_index(black_box(&input)));
        });
    }
}

fn classify_and_prune(c: &mut Criterion) {
    for (name, size) in DATABASE_SIZES {
        let input = synthetic_database(*size);
        c.bench_function(&format!("classify {name}"), |b| {
            b.iter_batched(
                || load_index(&input),
                |mut index| {
                    index.classify();
                    black_box(index.collect_by_flag(false));
                    index
                },
                BatchSize::LargeInput,
            );
        });
        c.bench_function(&format!("prune {name}"), |b| {
            b.iter_batched(
                || {
                    let mut index = load_index(&input);
                    index.classify();
                    index
                },
                |mut index| {
                    black_box(index.prune_unmarked());
                    index
                },
                BatchSize::LargeInput,
            );
        });
    }
}

criterion_group!(parsing, database_parsing);
criterion_group! {
    name = cleanup;
    config = Criterion::default().sample_size(20);
    targets = classify_and_prune
}
criterion_main!(parsing, cleanup);
