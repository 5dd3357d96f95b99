//! Benchmarks for payform.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use payform::controller::{FormEvent, FormValidator};
use payform::dom::{Document, Element, MemoryDocument};
use payform::{
    detect_card_type, format, luhn, validate_field, validate_form, Field, FixedClock, FormConfig,
    FormValues, YearMonth,
};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111 1111 1111 1111";
const AMEX: &str = "378282246310005";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

fn june_2024() -> YearMonth {
    YearMonth::new(24, 6).unwrap()
}

/// Benchmark the Luhn check
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("digits_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("str_16", |b| b.iter(|| luhn::passes(black_box(VISA_16))));

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.finish();
}

/// Benchmark the keystroke formatters
fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("card_number_raw", |b| {
        b.iter(|| format::format_card_number(black_box(VISA_16)))
    });

    group.bench_function("card_number_formatted", |b| {
        b.iter(|| format::format_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("expiry", |b| b.iter(|| format::format_expiry(black_box("1225"))));

    group.bench_function("cvv", |b| b.iter(|| format::format_cvv(black_box("12345"))));

    group.bench_function("amount", |b| {
        b.iter(|| format::format_amount(black_box("$1,024.50.7")))
    });

    group.finish();
}

/// Benchmark single field validators
fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_field");
    let today = june_2024();

    for (field, value) in [
        (Field::CardNumber, VISA_16_FORMATTED),
        (Field::CardNumber, AMEX),
        (Field::ExpiryDate, "12/30"),
        (Field::Cvv, "123"),
        (Field::CardholderName, "Ada Lovelace"),
        (Field::Amount, "1024.50"),
    ] {
        group.bench_with_input(BenchmarkId::new(field.name(), value), &value, |b, value| {
            b.iter(|| validate_field(field, black_box(value), today))
        });
    }

    group.bench_function("detect_card_type", |b| {
        b.iter(|| detect_card_type(black_box(AMEX)))
    });

    group.finish();
}

/// Benchmark whole-form validation, headless and through the controller
fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");
    group.throughput(Throughput::Elements(Field::ALL.len() as u64));

    let values = FormValues {
        card_number: VISA_16_FORMATTED.to_string(),
        expiry_date: "12/30".to_string(),
        cvv: "123".to_string(),
        cardholder_name: "Ada Lovelace".to_string(),
        amount: "10.50".to_string(),
    };

    group.bench_function("validate_form", |b| {
        b.iter(|| validate_form(black_box(&values), june_2024()))
    });

    let config = FormConfig::default();
    let doc = MemoryDocument::payment_form(&config);
    let form = FormValidator::bind(&doc, config, FixedClock(june_2024())).unwrap();
    form.attach();
    for field in Field::ALL {
        if let Some(element) = doc.element_by_id(field.name()) {
            element.set_value(values.get(field));
        }
    }

    group.bench_function("submit_gate", |b| {
        b.iter(|| {
            let outcome = form.dispatch(black_box(FormEvent::Submit));
            form.reset();
            outcome
        })
    });

    group.bench_function("keystroke", |b| {
        let card = doc.element_by_id("card_number").unwrap();
        b.iter(|| {
            card.set_value(black_box(VISA_16));
            form.dispatch(FormEvent::Input(Field::CardNumber))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_luhn,
    bench_formatters,
    bench_validators,
    bench_form,
);

criterion_main!(benches);
