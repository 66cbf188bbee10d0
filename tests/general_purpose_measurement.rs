use pretty_assertions::assert_eq;
use supla_params::{
    bits::FieldKind,
    translators::{CHART_TYPE, INITIAL_VALUE, PARAM2, PRECISION, UNIT_PREFIX},
    ChannelConfig, ChannelFunction, ChannelStorage, ConfigValue, TranslatorRegistry,
};

fn measurement() -> ChannelStorage {
    ChannelStorage::from(ChannelFunction::GeneralPurposeMeasurement)
}

#[test]
fn scaled_values_round_trip() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    let values = [
        0.0,
        1.0,
        -1.0,
        0.0001,
        -0.0001,
        12.3457,
        999_999.9999,
        -999_999.9999,
        1_000_000.0,
        -1_000_000.0,
        42.5,
    ];
    for initial in values {
        for impulses in [0.5, 1_000.0, -3.1416] {
            let mut storage = measurement();
            let config = ChannelConfig::new()
                .with("initialValue", initial)
                .with("impulsesPerUnit", impulses);
            let problems = registry.set_config_reporting(&mut storage, &config)?;
            assert!(problems.is_empty(), "{problems:?}");
            assert_eq!(
                registry.get_config(&storage)?.only(&["initialValue", "impulsesPerUnit"]),
                config
            );
        }
    }
    Ok(())
}

#[test]
fn initial_value_scenarios() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    let mut storage = measurement();

    registry.set_config(&mut storage, &ChannelConfig::new().with(INITIAL_VALUE, 12.34567))?;
    assert_eq!(storage.param1(), 123_457);
    assert_eq!(
        registry.get_config(&storage)?.get(INITIAL_VALUE),
        Some(&ConfigValue::from(12.3457))
    );

    registry.set_config(&mut storage, &ChannelConfig::new().with(INITIAL_VALUE, 2_000_000))?;
    assert_eq!(
        registry.get_config(&storage)?.get(INITIAL_VALUE),
        Some(&ConfigValue::from(1_000_000))
    );
    Ok(())
}

#[test]
fn packed_fields_scenario() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    let mut storage = measurement();
    registry.set_config(
        &mut storage,
        &ChannelConfig::new()
            .with("precision", 3)
            .with("storeMeasurementHistory", true)
            .with("chartType", 1),
    )?;

    let config = registry.get_config(&storage)?;
    assert_eq!(
        config.only(&[
            "precision",
            "storeMeasurementHistory",
            "chartType",
            "chartDataSourceType",
            "interpolateMeasurements"
        ]),
        ChannelConfig::new()
            .with("precision", 3)
            .with("storeMeasurementHistory", true)
            .with("chartType", 1)
            .with("chartDataSourceType", 0)
            .with("interpolateMeasurements", false)
    );
    Ok(())
}

/// A value for `kind` other than the one currently decoded.
fn other_value(kind: FieldKind, current: &ConfigValue) -> ConfigValue {
    match kind {
        FieldKind::Integer { max } => {
            let current = current.to_number().unwrap_or_default() as u64;
            ConfigValue::from(if current == max { 0 } else { max })
        }
        FieldKind::Flag => ConfigValue::from(!current.to_bool()),
        FieldKind::Choice => ConfigValue::from(u8::from(!current.to_bool())),
    }
}

#[test]
fn param2_fields_are_isolated() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;

    for start in [0, 0b1_0101_1111, 0b1_0000_0101, 0b0_0100_1010] {
        for written in PARAM2.fields {
            let mut storage = measurement();
            storage.set_param2(start);
            let before = registry.get_config(&storage)?;
            let current = before.get(written.key).cloned().unwrap_or(false.into());
            let value = other_value(written.kind, &current);

            registry.set_config(&mut storage, &ChannelConfig::new().with(written.key, value.clone()))?;
            let after = registry.get_config(&storage)?;

            assert_eq!(after.get(written.key), Some(&value));
            for other in PARAM2.fields.iter().filter(|f| f.key != written.key) {
                assert_eq!(
                    after.get(other.key),
                    before.get(other.key),
                    "writing {} changed {}",
                    written.key,
                    other.key
                );
            }
        }
    }
    Ok(())
}

#[test]
fn rubbish_bits_are_normalized() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    for config in [
        ChannelConfig::new(),
        ChannelConfig::new().with(UNIT_PREFIX, "k"),
        ChannelConfig::new().with(CHART_TYPE, 0),
        ChannelConfig::new().with(PRECISION, 4).with(INITIAL_VALUE, 1),
    ] {
        let mut storage = measurement();
        storage.set_param2(0b0_1010_0011);
        registry.set_config(&mut storage, &config)?;
        assert_eq!(storage.param2() & 0b0_1010_0000, 0, "{config:?}");
    }
    Ok(())
}

#[test]
fn overlong_unit_keeps_previous_text() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    let mut storage = measurement();
    storage.set_text_param1("kg".into());

    let problems = registry
        .set_config_reporting(&mut storage, &ChannelConfig::new().with("unitPrefix", "meter"))?;
    assert_eq!(problems.len(), 1);
    assert_eq!(
        problems[0].to_string(),
        "'unitPrefix' has 5 characters, but at most 4 are allowed; keeping previous text"
    );
    assert_eq!(
        registry.get_config(&storage)?.get("unitPrefix"),
        Some(&ConfigValue::from("kg"))
    );
    Ok(())
}

#[test]
fn config_serializes_in_decode_order() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    let mut storage = measurement();
    storage
        .set_param1(123_457)
        .set_param2(0b1_0000_1010)
        .set_param3(10_000)
        .set_text_param2("m³".into());

    let json = serde_json::to_value(registry.get_config(&storage)?)?;
    assert_eq!(
        json,
        serde_json::json!({
            "initialValue": 12.3457,
            "impulsesPerUnit": 1.0,
            "unitPrefix": "",
            "unitSuffix": "m³",
            "precision": 2,
            "storeMeasurementHistory": true,
            "chartType": 0,
            "chartDataSourceType": 0,
            "interpolateMeasurements": true
        })
    );
    let keys: Vec<_> = registry.get_config(&storage)?.keys().map(str::to_owned).collect();
    assert_eq!(keys[0], "initialValue");
    assert_eq!(keys[8], "interpolateMeasurements");
    Ok(())
}

#[test]
fn deserialized_duplicate_keys_write_the_last_value() -> anyhow::Result<()> {
    let registry = TranslatorRegistry::builtin()?;
    let config: ChannelConfig = serde_json::from_str(r#"{"precision":1,"precision":3}"#)?;
    assert_eq!(config.len(), 1);

    let mut storage = measurement();
    registry.set_config(&mut storage, &config)?;
    assert_eq!(storage.param2(), 3);
    assert_eq!(
        registry.get_config(&storage)?.get(PRECISION),
        Some(&ConfigValue::from(3))
    );
    Ok(())
}
