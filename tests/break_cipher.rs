use vigenere_breaker::{
    break_cipher, decrypt, encrypt, normalize, AnalysisConfig, AnalysisWarning, BreakReport,
    CipherError, VigenereBreaker,
};

const SAMPLE: &str = include_str!("data/english_sample.txt");

const KEYS: [&str; 12] = [
    "LO",
    "SEA",
    "MAST",
    "LIGHT",
    "ZEBRA",
    "CRYPTO",
    "VOYAGE",
    "HARBOUR",
    "KEEPERSX",
    "QUICKFOX",
    "LANTERNED",
    "BRIGHTWAVE",
];

#[test]
fn sample_is_long_english() {
    let text = normalize(SAMPLE);
    assert!(text.len() >= 2000);
    let ic = vigenere_breaker::index_of_coincidence(&text.histogram());
    assert!(ic > 0.06 && ic < 0.075, "unexpected sample IC {}", ic);
}

#[test]
fn estimates_exact_key_length() {
    let breaker = VigenereBreaker::default();
    for key in KEYS {
        let ciphertext = normalize(&encrypt(SAMPLE, key).unwrap());
        let estimate = breaker.estimate_key_length(&ciphertext);
        assert_eq!(estimate.key_length, key.len(), "key {}", key);
        assert!(estimate.warning.is_none());
        assert_eq!(estimate.scores.max_length(), 50);
    }
}

#[test]
fn caesar_estimate_is_equivalent_length() {
    let breaker = VigenereBreaker::default();
    let ciphertext = normalize(&encrypt(SAMPLE, "K").unwrap());
    let estimate = breaker.estimate_key_length(&ciphertext);

    let true_ic = estimate.scores.get(1).unwrap();
    let chosen_ic = estimate.scores.get(estimate.key_length).unwrap();
    assert!((true_ic - chosen_ic).abs() < 0.002);
}

#[test]
fn breaks_every_key() {
    let expected = normalize(SAMPLE).into_string();
    for key in KEYS {
        let ciphertext = encrypt(SAMPLE, key).unwrap();
        let result = break_cipher(&ciphertext).unwrap();
        assert_eq!(result.key, key);
        assert_eq!(result.plaintext, expected, "key {}", key);
    }
}

#[test]
fn caesar_break_recovers_plaintext() {
    let expected = normalize(SAMPLE).into_string();
    let result = break_cipher(&encrypt(SAMPLE, "K").unwrap()).unwrap();
    assert!(result.key.chars().all(|c| c == 'K'));
    assert_eq!(result.plaintext, expected);
}

#[test]
fn short_ciphertext_degrades_to_caesar() {
    let ciphertext = encrypt("The keeper lit the lamp at dusk", "LAMP").unwrap();
    assert!(ciphertext.len() < AnalysisConfig::default().min_column_length);

    let result = break_cipher(&ciphertext).unwrap();
    assert_eq!(result.key_length(), 1);
    assert!(matches!(
        result.warning(),
        Some(AnalysisWarning::ShortCiphertext { .. })
    ));
}

#[test]
fn empty_ciphertext_is_an_error() {
    assert!(matches!(break_cipher(" \n\t42"), Err(CipherError::EmptyInput)));
}

#[test]
fn roundtrip_on_sample() {
    let expected = normalize(SAMPLE).into_string();
    for key in KEYS {
        let ciphertext = encrypt(SAMPLE, key).unwrap();
        assert_eq!(decrypt(&ciphertext, key).unwrap(), expected);
    }
}

#[test]
fn report_for_long_sample() {
    let ciphertext = encrypt(SAMPLE, "HARBOUR").unwrap();
    let result = break_cipher(&ciphertext).unwrap();
    let report = BreakReport::new(&result, &ciphertext, None, 2);

    assert_eq!(report.key_length_scores.len(), 50);
    assert_eq!(report.columns.len(), 7);
    let selected = &report.key_length_scores[6];
    assert_eq!(selected.key_length, 7);
    assert!(selected.average_ic > 0.055);
}
