use cryptal_argon2::error::{ConfigError, Error, FormatError};
use cryptal_argon2::format::{
    CURRENT_VERSION, Settings, compare_hash, format_hash, hash_password, hash_password_custom,
    hash_password_with_salt, parse_hash, verify_password,
};

const HELLO: &str = "2$AAAAAAAAAAAAAAAAAAAAAAAA$1l/zyZ7GcoKtnZKRQBPA1svqCnu++RUV8wK1seIUbMvG";

#[test]
fn current_settings() {
    let settings = Settings::current();
    assert_eq!(settings.version, CURRENT_VERSION);
    assert_eq!(settings.to_string(), "v=2;p=4;m=64;i=3;bc=33");

    let params = settings.to_params();
    assert_eq!(params.mem_kib, 65536);
    assert_eq!(params.lanes, 4);
    assert_eq!(params.time, 3);
    assert_eq!(params.tag_len, 33);
    assert!(params.secret.is_none());
    assert!(params.associated_data.is_none());
}

#[test]
fn hello_known_answer_string() {
    let encoded = hash_password_with_salt(b"Hello", &Settings::current(), &[0u8; 18]).unwrap();
    assert_eq!(encoded, HELLO);
}

#[test]
fn hello_known_answer_verifies() {
    assert!(verify_password(b"Hello", HELLO).unwrap());
    assert!(!verify_password(b"hello", HELLO).unwrap());
}

#[test]
fn registered_versions_round_trip() {
    for settings in Settings::registered() {
        let salt = [7u8; 18];
        let hash = [9u8; 33];
        let settings = if settings.version == 1 {
            Settings::custom(2, 1, 1, 33)
        } else {
            *settings
        };

        let encoded = format_hash(&settings, &salt, &hash).unwrap();
        let group = parse_hash(&encoded).unwrap();
        assert_eq!(group.settings, settings);
        assert_eq!(group.salt, salt);
        assert_eq!(group.hash, hash);
        assert_eq!(group.encode().unwrap(), encoded);
    }
}

#[test]
fn custom_hash_carries_its_settings() {
    let encoded = hash_password_custom(b"pw", 1, 1, 1, 16).unwrap();
    assert!(encoded.starts_with("1$p=1;m=1;i=1;bc=16$"), "{encoded}");

    let group = parse_hash(&encoded).unwrap();
    assert_eq!(group.salt.len(), 18);
    assert_eq!(group.hash.len(), 16);

    assert!(verify_password(b"pw", &encoded).unwrap());
    assert!(!verify_password(b"pW", &encoded).unwrap());
}

#[test]
fn custom_settings_skip_malformed_items() {
    let group = parse_hash("1$p=1;m=1;junk;x=9;i=1;a=b=c;bc=16$AAAA$AAAA").unwrap();
    assert_eq!(group.settings, Settings::custom(1, 1, 1, 16));
}

#[test]
fn fresh_hashes_use_fresh_salts() {
    let settings = Settings::custom(1, 1, 1, 16);
    let a = hash_password_with_salt(b"pw", &settings, b"0123456789abcdef01").unwrap();
    let b = hash_password_with_salt(b"pw", &settings, b"0123456789abcdef02").unwrap();
    assert_ne!(a, b);

    let first = parse_hash(&hash_password_custom(b"pw", 1, 1, 1, 16).unwrap()).unwrap();
    let second = parse_hash(&hash_password_custom(b"pw", 1, 1, 1, 16).unwrap()).unwrap();
    assert_ne!(first.salt, second.salt);
}

#[test]
fn default_hash_verifies() {
    let encoded = hash_password(b"correct horse").unwrap();
    assert!(encoded.starts_with("2$"));
    assert!(verify_password(b"correct horse", &encoded).unwrap());
}

#[test]
fn parse_errors() {
    let err = |encoded: &str| parse_hash(encoded).unwrap_err();

    assert!(matches!(err("x$AAAA$AAAA"), Error::Format(FormatError::InvalidVersion)));
    assert!(matches!(err(""), Error::Format(FormatError::InvalidVersion)));
    assert!(matches!(err("0$AAAA$AAAA"), Error::Format(FormatError::UnknownVersion(0))));
    assert!(matches!(err("3$AAAA$AAAA"), Error::Format(FormatError::UnknownVersion(3))));
    assert!(matches!(
        err("2$AAAA"),
        Error::Format(FormatError::FieldCount { expected: 3, found: 2 })
    ));
    assert!(matches!(
        err("2$AAAA$AAAA$AAAA"),
        Error::Format(FormatError::FieldCount { expected: 3, found: 4 })
    ));
    assert!(matches!(
        err("1$AAAA$AAAA"),
        Error::Format(FormatError::FieldCount { expected: 4, found: 3 })
    ));
    assert!(matches!(
        err("1$p=1;m=1;i=1$AAAA$AAAA"),
        Error::Format(FormatError::MissingSetting)
    ));
    assert!(matches!(
        err("1$p=0;m=1;i=1;bc=16$AAAA$AAAA"),
        Error::Format(FormatError::MissingSetting)
    ));
    assert!(matches!(
        err("1$p=x;m=1;i=1;bc=16$AAAA$AAAA"),
        Error::Format(FormatError::InvalidSetting(ref key)) if key == "p"
    ));
    assert!(matches!(
        err("1$p=1;m=70000;i=1;bc=16$AAAA$AAAA"),
        Error::Format(FormatError::InvalidSetting(ref key)) if key == "m"
    ));
    assert!(matches!(err("2$!!!!$AAAA"), Error::Format(FormatError::Base64(_))));
    assert!(matches!(err("2$AAAA$AAA"), Error::Format(FormatError::Base64(_))));
}

#[test]
fn format_rejects_unknown_versions() {
    let mut settings = Settings::current();
    settings.version = 0;
    assert!(matches!(
        format_hash(&settings, b"salt", b"hash"),
        Err(Error::Format(FormatError::UnknownVersion(0)))
    ));

    settings.version = 9;
    assert!(matches!(
        format_hash(&settings, b"salt", b"hash"),
        Err(Error::Format(FormatError::UnknownVersion(9)))
    ));
}

#[test]
fn truncated_hash_is_inconsistent() {
    // 8 stored bytes against settings that derive 16
    let encoded = "1$p=1;m=1;i=1;bc=16$AAAAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAA=";
    assert!(matches!(
        verify_password(b"pw", encoded),
        Err(Error::Consistency { stored: 8, derived: 16 })
    ));
}

#[test]
fn short_hash_lengths_are_rejected() {
    assert!(matches!(
        hash_password_custom(b"pw", 1, 1, 1, 3),
        Err(Error::Config(ConfigError::OutputLength { requested: 3 }))
    ));
    assert!(matches!(
        hash_password_custom(b"pw", 0, 1, 1, 16),
        Err(Error::Config(ConfigError::TooFewLanes))
    ));
}

#[test]
fn compare_is_length_checked() {
    assert!(compare_hash(b"abcd", b"abcd").unwrap());
    assert!(!compare_hash(b"abcd", b"abce").unwrap());
    assert!(matches!(
        compare_hash(b"abcd", b"abc"),
        Err(Error::Consistency { stored: 3, derived: 4 })
    ));
}
