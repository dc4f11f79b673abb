//! Benchmarks for numeric_mask keystroke filtering and commit normalization.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use numeric_mask::{
    Config, DecimalPlaces, DecimalSign, KeyCode, KeyEvent, Modifiers, NumberMask, TextField,
    Verdict, traits::Clipboard,
};

/// Mock clipboard for benchmarking
struct MockClipboard {
    content: Option<String>,
}

impl Clipboard for MockClipboard {
    fn get(&mut self) -> Option<String> {
        self.content.clone()
    }
}

fn generate_raw_values(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 5 {
            0 => format!("{}", i * 37),
            1 => format!("-{}.{}", i, i % 100),
            2 => format!(".{}", i),
            3 => format!("{},", i * 3),
            _ => format!("x{}y", i),
        })
        .collect()
}

fn type_text(mask: &NumberMask, field: &mut TextField, text: &str) {
    for c in text.chars() {
        let key = KeyEvent::char(c);
        if mask.on_key_down(&*field, black_box(&key)) == Verdict::Allow {
            field.apply_key(&key);
        }
    }
}

fn benchmark_key_filter(c: &mut Criterion) {
    let mask = NumberMask::new(Config::default()).unwrap();

    c.bench_function("key filter (typing -1234.56 with noise)", |b| {
        b.iter(|| {
            let mut field = TextField::new("");
            type_text(&mask, &mut field, "-12a34..5x6");
            black_box(field);
        });
    });
}

fn benchmark_legacy_keys(c: &mut Criterion) {
    let mask = NumberMask::new(Config::default()).unwrap();
    let field = TextField::new("123");
    let codes = [8u32, 37, 39, 46, 109, 188, 190, 52, 65];

    c.bench_function("legacy key codes", |b| {
        b.iter(|| {
            for code in &codes {
                let key = KeyEvent::legacy(*code, Modifiers::empty());
                black_box(mask.on_key_down(&field, black_box(&key)));
            }
        });
    });
}

fn benchmark_editing_keys(c: &mut Criterion) {
    let mask = NumberMask::new(Config::default()).unwrap();
    let keys: Vec<KeyEvent> = [
        KeyCode::Home,
        KeyCode::Right,
        KeyCode::Right,
        KeyCode::Backspace,
        KeyCode::End,
        KeyCode::Left,
        KeyCode::Delete,
    ]
    .into_iter()
    .map(|code| KeyEvent::new(code, Modifiers::empty()))
    .collect();

    c.bench_function("editing keys", |b| {
        b.iter(|| {
            let mut field = TextField::new("9876543.21");
            for key in &keys {
                if mask.on_key_down(&field, black_box(key)) == Verdict::Allow {
                    field.apply_key(key);
                }
            }
            black_box(field);
        });
    });
}

fn benchmark_normalize(c: &mut Criterion) {
    let values = generate_raw_values(1000);
    let point = NumberMask::new(Config::default()).unwrap();
    let comma = NumberMask::new(
        Config::builder()
            .decimal_sign(DecimalSign::Comma)
            .decimal_places(DecimalPlaces::new(4).unwrap())
            .bounds(-1000.0, 1000.0)
            .allow_empty(false)
            .build()
            .unwrap(),
    )
    .unwrap();

    c.bench_function("normalize 1000 values (point)", |b| {
        b.iter(|| {
            for v in &values {
                black_box(point.normalize(black_box(v)));
            }
        });
    });

    c.bench_function("normalize 1000 values (comma, clamped)", |b| {
        b.iter(|| {
            for v in &values {
                black_box(comma.normalize(black_box(v)));
            }
        });
    });
}

fn benchmark_paste(c: &mut Criterion) {
    let mask = NumberMask::new(Config::default()).unwrap();
    let mut clipboard = MockClipboard {
        content: Some("  000123456,789  ".to_string()),
    };
    let mut field = TextField::new("");

    c.bench_function("paste from clipboard", |b| {
        b.iter(|| {
            black_box(mask.on_paste_from_clipboard(&mut field, &mut clipboard));
        });
    });
}

fn benchmark_reconfigure(c: &mut Criterion) {
    let a = Config::default();
    let b_config = Config::builder()
        .decimal_places(DecimalPlaces::new(6).unwrap())
        .allow_negative(false)
        .build()
        .unwrap();
    let mut mask = NumberMask::new(a).unwrap();
    let mut field = TextField::new("");

    c.bench_function("reconfigure (pattern recompile)", |b| {
        b.iter(|| {
            mask.configure(&mut field, black_box(b_config)).unwrap();
            mask.configure(&mut field, black_box(a)).unwrap();
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_key_filter,
              benchmark_legacy_keys,
              benchmark_editing_keys,
              benchmark_normalize,
              benchmark_paste,
              benchmark_reconfigure
}
criterion_main!(benches);
