//! Tests for tindhl-model types.

use tindhl_model::{NumberPosition, SHIPPING_HEADER, SenderProfile, ShippingRecord};

#[test]
fn shipping_header_has_blank_lead_column() {
    assert_eq!(SHIPPING_HEADER.len(), 18);
    assert_eq!(SHIPPING_HEADER[0], "");
    assert_eq!(SHIPPING_HEADER[1], "SEND_NAME1");
    assert_eq!(SHIPPING_HEADER[17], "SEND_EMAIL");
}

#[test]
fn shipping_fields_follow_header_order() {
    let record = ShippingRecord {
        send_name1: "Sender".to_string(),
        recv_street: "Hauptstrasse".to_string(),
        recv_housenumber: "5".to_string(),
        recv_country: "DEU".to_string(),
        send_email: "a@b.com".to_string(),
        ..Default::default()
    };
    let fields = record.fields();
    let at = |name: &str| {
        let idx = SHIPPING_HEADER.iter().position(|h| *h == name).unwrap();
        fields[idx]
    };

    assert_eq!(fields[0], "");
    assert_eq!(at("SEND_NAME1"), "Sender");
    assert_eq!(at("RECV_STREET"), "Hauptstrasse");
    assert_eq!(at("RECV_HOUSENUMBER"), "5");
    assert_eq!(at("RECV_COUNTRY"), "DEU");
    assert_eq!(at("PRODUCT"), "");
    assert_eq!(at("SEND_EMAIL"), "a@b.com");
}

#[test]
fn shipping_serializes_with_column_names() {
    let record = ShippingRecord {
        recv_housenumber: "42".to_string(),
        ..Default::default()
    };
    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(value["RECV_HOUSENUMBER"], "42");
    // Every named column is present, the blank lead column is not.
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 17);
    for name in &SHIPPING_HEADER[1..] {
        assert!(object.contains_key(*name), "missing {name}");
    }
}

#[test]
fn sender_reads_legacy_keys() {
    let source = r#"
name = "Danny Default"
name2 = "Dannies Co."
street = "Rad Rd"
"house number" = "666"
zipcode = "12345"
city = "Tubular Town"
country = "USA"
email = "DannyDefault@Radmail.com"
"#;
    let sender: SenderProfile = toml::from_str(source).expect("parse sender");
    assert_eq!(sender.house_number, "666");
    assert_eq!(sender.postal_code, "12345");
    assert_eq!(sender.email, "DannyDefault@Radmail.com");
}

#[test]
fn number_position_defaults_to_end() {
    assert_eq!(NumberPosition::default(), NumberPosition::End);
}
