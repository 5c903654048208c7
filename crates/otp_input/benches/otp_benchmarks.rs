#![forbid(unsafe_code)]

//! Benchmarks for the OTP input.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use otp_input::prelude::*;
use otp_input::tree::standard_layout;

fn focused(length: usize, value: &str) -> Otp {
    let mut otp = Otp::builder()
        .children(standard_layout(length, "|"))
        .value(value)
        .build()
        .unwrap();
    otp.update(InputEvent::Focus);
    otp
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp/build");

    for length in [4, 6, 32] {
        group.bench_with_input(BenchmarkId::new("standard", length), &length, |b, &n| {
            b.iter(|| black_box(Otp::with_length(n).unwrap()));
        });
    }

    group.finish();
}

fn bench_editing(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp/editing");

    group.bench_function("type_six_digits", |b| {
        b.iter_batched(
            || focused(6, ""),
            |mut otp| {
                for c in "123456".chars() {
                    otp.update(InputEvent::KeyDown(KeyEvent::from_char(c)));
                }
                black_box(otp.value());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("navigate_and_delete", |b| {
        b.iter_batched(
            || focused(6, "123456"),
            |mut otp| {
                for key in [Key::Left, Key::Left, Key::Backspace, Key::Home, Key::End] {
                    otp.update(InputEvent::KeyDown(KeyEvent::new(key)));
                }
                black_box(otp.selection());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("paste", |b| {
        b.iter_batched(
            || focused(6, ""),
            |mut otp| {
                otp.update(InputEvent::Paste("123456".into()));
                black_box(otp.is_complete());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp/render");
    let otp = focused(6, "123");

    group.bench_function("view", |b| b.iter(|| black_box(otp.view())));
    group.bench_function("markup", |b| b.iter(|| black_box(otp.markup().to_string())));

    group.finish();
}

criterion_group!(benches, bench_build, bench_editing, bench_render);
criterion_main!(benches);
