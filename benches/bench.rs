use criterion::{criterion_group, criterion_main};

mod card_number_checksum_benchmark {
    use criterion::{black_box, Criterion};
    use persian_tools::{CardNumberChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let card_numbers = vec![
            "6037991234567893",
            "6104331234567890",
            "6273531234567890",
            "6037 9912 3456 7893",
            // invalid checksum
            "6037991234567890",
        ];
        c.bench_function("card-number-checksum", |b| {
            b.iter(|| {
                for card_number in card_numbers.iter() {
                    CardNumberChecksum.is_valid_match(black_box(card_number));
                }
            })
        });
    }
}

mod number_to_words_benchmark {
    use criterion::{black_box, BenchmarkId, Criterion};
    use persian_tools::number_to_words;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let mut group = c.benchmark_group("number-to-words");
        for number in [7u64, 1_200, 123_456_789, 999_999_999_999] {
            group.bench_with_input(BenchmarkId::from_parameter(number), &number, |b, number| {
                b.iter(|| number_to_words(black_box(*number)))
            });
        }
        group.finish();
    }
}

mod digit_conversion_benchmark {
    use criterion::{black_box, Criterion};
    use persian_tools::{to_english_digits, to_persian};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let text = "شماره كارت 6037991234567893 و كد ملي 0499370899 ".repeat(20);
        c.bench_function("to-persian", |b| b.iter(|| to_persian(black_box(&text))));

        let persian = to_persian(&text);
        c.bench_function("to-english-digits", |b| {
            b.iter(|| to_english_digits(black_box(&persian)))
        });
    }
}

criterion_group!(
    benches,
    card_number_checksum_benchmark::criterion_benchmark,
    number_to_words_benchmark::criterion_benchmark,
    digit_conversion_benchmark::criterion_benchmark
);
criterion_main!(benches);
