use hostinfo::attrs::unquote;
use hostinfo::{
    from_value, record, value, AttributeLineParser, BlockParser, Error, LineParser, Record, Value,
};
use serde::Deserialize;

#[test]
fn test_primitives() {
    let parser = LineParser::new("cpuinfo");

    let cases = [
        ("model\t\t: 154", "model", Value::Integer(154)),
        ("microcode\t: 0xd6", "microcode", Value::Integer(0xd6)),
        ("fpu\t\t: yes", "fpu", Value::Bool(true)),
        ("wp\t\t: no", "wp", Value::Bool(false)),
        ("cpu MHz\t\t: 2400.000", "cpu_mhz", Value::Integer(2400)),
        ("cpu MHz\t\t: 2400.500", "cpu_mhz", Value::from("2400.500")),
        ("cache size\t: 512 KB", "cache_size_kb", Value::Integer(512)),
        ("model name\t: AMD Ryzen 7", "model_name", Value::from("AMD Ryzen 7")),
    ];

    for (line, key, value) in cases {
        assert_eq!(parser.parse_line(line).unwrap(), (key.to_string(), value), "{:?}", line);
    }
}

#[test]
fn test_special_strings() {
    let parser = LineParser::new("test");

    // Only the first colon splits
    let (key, value) = parser.parse_line("time: 12:30:00").unwrap();
    assert_eq!(key, "time");
    assert_eq!(value, Value::from("12:30:00"));

    // Sizes in other units stay strings, and the key is untouched
    let (key, value) = parser.parse_line("Size: 4 MB").unwrap();
    assert_eq!(key, "size");
    assert_eq!(value, Value::from("4 MB"));

    // Hex-looking words are not integers
    let (_, value) = parser.parse_line("Revision: a02082").unwrap();
    assert_eq!(value, Value::from("a02082"));
}

#[test]
fn test_numbers() {
    let parser = LineParser::new("test");
    let int = |line: &str| parser.parse_line(line).unwrap().1.as_i64();

    assert_eq!(int("a: 0"), Some(0));
    assert_eq!(int("a: -17"), Some(-17));
    assert_eq!(int("a: 0o17"), Some(15));
    assert_eq!(int("a: 017"), Some(15));
    assert_eq!(int("a: 0b11"), Some(3));
    assert_eq!(int("a: 9223372036854775807"), Some(i64::MAX));
    assert_eq!(int("a: 9223372036854775808"), None);
    assert_eq!(int("a: 1_000"), None);
}

#[test]
fn test_invalid_lines_name_their_parser() {
    let err = LineParser::new("meminfo").parse_line("MemTotal").unwrap_err();
    assert_eq!(err.to_string(), r#"meminfo: "MemTotal": invalid line"#);

    let err = AttributeLineParser::new("blkid")
        .parse_line("/dev/sda1 TYPE=\"ext4\"")
        .unwrap_err();
    assert_eq!(err, Error::invalid_line("blkid", "/dev/sda1 TYPE=\"ext4\""));

    let err = BlockParser::new("luksDump", "Version: 2\n  stray\n")
        .parse()
        .unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_attribute_lines() {
    let parser = AttributeLineParser::new("blkid");
    let line = parser
        .parse_line(r#"/dev/sdb1: LABEL="My \"Backup\" Disk" UUID="0f1e" BLOCK_SIZE="4096" TYPE="ext4""#)
        .unwrap()
        .unwrap();

    assert_eq!(line.device, "/dev/sdb1");
    assert_eq!(
        line.attributes,
        record!({
            "label": "My \"Backup\" Disk",
            "uuid": "0f1e",
            "block_size": 4096,
            "type": "ext4"
        })
    );

    assert_eq!(parser.parse_line("").unwrap(), None);
}

#[test]
fn test_unquote_error_is_not_wrapped() {
    let parser = AttributeLineParser::new("blkid");
    let err = parser.parse_line(r#"/dev/sdb1: LABEL="\z""#).unwrap_err();
    assert_eq!(err, unquote(r#""\z""#).unwrap_err());
    assert!(matches!(err, Error::Unquote { .. }));
}

#[test]
fn test_array_of_objects() {
    let dump = "Digests:\n  0: pbkdf2\n\tHash: sha256\n  1: pbkdf2\n\tHash: sha512\n";
    let record = BlockParser::new("luksDump", dump).parse().unwrap();
    assert_eq!(
        record,
        record!({
            "digests": [
                { "type": "pbkdf2", "hash": "sha256" },
                { "type": "pbkdf2", "hash": "sha512" }
            ]
        })
    );
}

#[test]
fn test_nested_sequences_only_at_top_level() {
    // An empty value inside an item body is just an empty string; the
    // following line, indented further, continues it.
    let dump = "Keyslots:\n  0: luks2\n\tNote:\n\t    extra words\n";
    let record = BlockParser::new("luksDump", dump).parse().unwrap();
    assert_eq!(
        record.get("keyslots"),
        Some(&value!([{ "type": "luks2", "note": " extra words" }]))
    );
}

#[test]
fn test_empty_collections() {
    let record = BlockParser::new("luksDump", "Tokens:\n").parse().unwrap();
    assert_eq!(record, record!({ "tokens": [] }));
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"tokens":[]}"#);

    let empty = BlockParser::new("luksDump", "").parse().unwrap();
    assert_eq!(empty, Record::new());
    assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
}

#[test]
fn test_json_rejects_what_values_cannot_hold() {
    assert!(serde_json::from_str::<Value>("null").is_err());
    assert!(serde_json::from_str::<Value>("1.5").is_err());
    assert_eq!(serde_json::from_str::<Value>("2.0").unwrap(), Value::Integer(2));
    assert!(serde_json::from_str::<Value>("18446744073709551615").is_err());
}

#[derive(Deserialize, Debug, PartialEq)]
struct Cpu {
    vendor_id: String,
    model: u32,
    fpu: bool,
    flags: Vec<String>,
}

#[test]
fn test_to_typed() {
    let parser = LineParser::new("cpuinfo");
    let record: Record = [
        "vendor_id\t: GenuineIntel",
        "model\t\t: 154",
        "fpu\t\t: yes",
        "flags\t\t: sse2 fpu sse",
    ]
    .iter()
    .map(|line| parser.parse_flags_line(line).unwrap())
    .collect();

    let cpu: Cpu = from_value(Value::Object(record)).unwrap();
    assert_eq!(
        cpu,
        Cpu {
            vendor_id: "GenuineIntel".to_string(),
            model: 154,
            fpu: true,
            flags: vec!["fpu".to_string(), "sse".to_string(), "sse2".to_string()],
        }
    );
}
