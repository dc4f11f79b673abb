use proptest::prelude::*;
use numeric_mask::normalize::parse_number;
use numeric_mask::{
    Config, DecimalPlaces, DecimalSign, FieldHost, KeyCode, KeyEvent, Modifiers, NumberMask,
    ResolvedConfig, TextField, Verdict, normalize,
};

// Valid bounds: integral or fractional, straddling zero, positive or negative,
// wide or narrower than one unit
fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    prop_oneof![
        (-1_000_000i64..=0, 1i64..=1_000_000).prop_map(|(min, max)| (min as f64, max as f64)),
        (-100_000i64..=100_000, 1i64..=200_000)
            .prop_map(|(min, width)| (min as f64 / 100.0, (min + width) as f64 / 100.0)),
        (0i64..=10_000, 1i64..=999)
            .prop_map(|(min, width)| (min as f64 / 1000.0, (min + width) as f64 / 1000.0)),
        (1i64..=9, 1i64..=9).prop_map(|(whole, tenth)| {
            let min = whole as f64 + tenth as f64 / 100.0;
            (min, min + 0.5)
        }),
    ]
}

// Valid configurations
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(DecimalSign::Point), Just(DecimalSign::Comma)],
        1u8..=6,
        bounds_strategy(),
    )
        .prop_map(|(empty, negative, decimals, sign, places, (min, max))| {
            Config::builder()
                .allow_empty(empty)
                .allow_negative(negative)
                .allow_decimals(decimals)
                .decimal_sign(sign)
                .decimal_places(DecimalPlaces::new(places).unwrap())
                .bounds(min, max)
                .build()
                .unwrap()
        })
}

// Raw field text: numeric-looking strings, halfway values and junk
fn raw_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "-?[0-9]{0,9}",
        "-?[0-9]{0,7}[.,][0-9]{0,8}",
        "-?[0-9]{1,4}[.,](5|25|125|375|0625|03125)",
        "[.,][0-9]{1,4}",
        "[0-9]{1,4}[.,]",
        "[-0-9.,a ]{0,12}",
        " {0,3}[0-9]{1,5} {0,3}",
    ]
}

fn read(text: &str) -> f64 {
    parse_number(&text.replace(',', ".")).unwrap()
}

fn key_strategy() -> impl Strategy<Value = KeyEvent> {
    let none = Modifiers::empty();
    prop_oneof![
        prop::char::range('0', '9').prop_map(KeyEvent::char),
        prop_oneof![Just('-'), Just('.'), Just(','), Just('a'), Just('v'), Just('e')]
            .prop_map(KeyEvent::char),
        prop_oneof![
            Just(KeyCode::Backspace),
            Just(KeyCode::Delete),
            Just(KeyCode::Left),
            Just(KeyCode::Right),
            Just(KeyCode::Home),
            Just(KeyCode::End),
        ]
        .prop_map(move |code| KeyEvent::new(code, none)),
        Just(KeyEvent::new(KeyCode::Char('v'), Modifiers::CTRL)),
        prop_oneof![Just(8u32), Just(46), Just(109), Just(188), Just(190), Just(52)]
            .prop_map(move |code| KeyEvent::legacy(code, none)),
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent(config in config_strategy(), raw in raw_strategy()) {
        let resolved = ResolvedConfig::resolve(config).unwrap();
        let once = normalize(&raw, &resolved);
        let twice = normalize(&once, &resolved);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_value_is_empty_in_range_or_zero(config in config_strategy(), raw in raw_strategy()) {
        let resolved = ResolvedConfig::resolve(config).unwrap();
        let out = normalize(&raw, &resolved);
        if out.is_empty() {
            prop_assert!(config.allow_empty());
        } else {
            let n = read(&out);
            prop_assert!(
                n == 0.0 || (n >= config.min() && n <= config.max()),
                "{} out of [{}, {}]", out, config.min(), config.max()
            );
            prop_assert!(resolved.matches_active(&out));
        }
    }

    #[test]
    fn in_range_integers_keep_their_value(config in config_strategy(), k in -1_000_000i64..=1_000_000) {
        let k_f = k as f64;
        prop_assume!(k_f >= config.min() && k_f <= config.max());
        prop_assume!(k >= 0 || config.allow_negative());
        let resolved = ResolvedConfig::resolve(config).unwrap();
        let out = normalize(&k.to_string(), &resolved);
        prop_assert_eq!(parse_number(&out.replace(',', ".")), Some(k_f));
    }

    #[test]
    fn values_above_max_settle_on_one_result(config in config_strategy(), extra in 1u32..1_000_000) {
        let resolved = ResolvedConfig::resolve(config).unwrap();
        let above = config.max().ceil() + 1.0;
        let near = normalize(&format!("{above}"), &resolved);
        let far = normalize(&format!("{}", above + extra as f64), &resolved);
        prop_assert_eq!(&near, &far);
        if !near.is_empty() {
            let n = read(&near);
            prop_assert!(n == 0.0 || n <= config.max(), "{} above {}", near, config.max());
        }
    }

    #[test]
    fn halfway_values_round_up_in_magnitude(whole in 0u32..10_000, places in 1u8..=6) {
        let config = Config::builder()
            .decimal_places(DecimalPlaces::new(places).unwrap())
            .build()
            .unwrap();
        let resolved = ResolvedConfig::resolve(config).unwrap();
        // 2^-(places + 1) has places + 1 digits and ends in 5: an exact tie
        let half_unit = 0.5f64.powi(places as i32 + 1);
        let raw = whole as f64 + half_unit;
        let out = normalize(&format!("{raw}"), &resolved);
        let expected = format!("{:.*}", places as usize, raw + half_unit / 2.0);
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn typed_content_keeps_sign_and_separator_unique(
        config in config_strategy(),
        keys in prop::collection::vec(key_strategy(), 0..40),
    ) {
        let mask = NumberMask::new(config).unwrap();
        let mut field = TextField::new("");
        for key in &keys {
            if mask.on_key_down(&field, key) == Verdict::Allow {
                field.apply_key(key);
            }
        }
        let text = field.value();
        let sep = config.decimal_sign().as_char();
        prop_assert!(text.matches('-').count() <= 1);
        prop_assert!(text.matches(sep).count() <= 1);
        prop_assert!(text.chars().all(|c| c.is_ascii_digit() || c == '-' || c == sep));
        if !config.allow_negative() {
            prop_assert!(!text.contains('-'));
        }
        if !config.allow_decimals() {
            prop_assert!(!text.contains(sep));
        }
    }
}
