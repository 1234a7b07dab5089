use toml_property_source::{flatten, toml_value, Scalar, TomlTable, TomlValue};

#[test]
fn test_toml_value_macro_null() {
    let value = toml_value!(null);
    assert_eq!(value, TomlValue::Scalar(Scalar::Null));
}

#[test]
fn test_toml_value_macro_numbers() {
    assert_eq!(toml_value!(42), TomlValue::Scalar(Scalar::Integer(42)));
    assert_eq!(toml_value!(3.5), TomlValue::Scalar(Scalar::Float(3.5)));
    assert_eq!(toml_value!(-123), TomlValue::Scalar(Scalar::Integer(-123)));
}

#[test]
fn test_toml_value_macro_strings() {
    assert_eq!(
        toml_value!("hello world"),
        TomlValue::Scalar(Scalar::String("hello world".to_string()))
    );
    assert_eq!(toml_value!(""), TomlValue::Scalar(Scalar::String(String::new())));
}

#[test]
fn test_toml_value_macro_nested() {
    let value = toml_value!({
        "server": {
            "host": "localhost",
            "ports": [80, 443]
        },
        "debug": false
    });

    let mut server = TomlTable::new();
    server.insert("host".to_string(), TomlValue::from("localhost"));
    server.insert(
        "ports".to_string(),
        TomlValue::Array(vec![TomlValue::from(80), TomlValue::from(443)]),
    );
    let mut expected = TomlTable::new();
    expected.insert("server".to_string(), TomlValue::Table(server));
    expected.insert("debug".to_string(), TomlValue::from(false));

    assert_eq!(value, TomlValue::Table(expected));
}

#[test]
fn test_toml_value_macro_expressions() {
    let port: u16 = 9000;
    let name = String::from("svc");
    let value = toml_value!({ "port": port, "name": name });
    let properties = flatten(&value);
    assert_eq!(properties.get("port"), Some(&Scalar::Integer(9000)));
    assert_eq!(properties.get("name"), Some(&Scalar::from("svc")));
}
