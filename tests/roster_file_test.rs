use anyhow::Result;
use swimmers::utils::validation::Validate;
use swimmers::{RosterConfig, SwimError};
use tempfile::TempDir;

const POND: &str = r#"
[roster]
name = "village-pond"
repeat = 1

[[swimmers]]
kind = "fish"
species = "Goldfish"

[[swimmers]]
kind = "duck"
breed = "Mallard"

[[swimmers]]
kind = "duck"
breed = ""
"#;

/// 測試從檔案載入名單並依序游泳
#[test]
fn test_roster_file_swims_in_file_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pond.toml");
    std::fs::write(&path, POND)?;

    let config = RosterConfig::from_file(&path)?;
    config.validate()?;

    let roster = config.build_roster();
    assert_eq!(roster.name(), "village-pond");

    let mut buf = Vec::new();
    let lines = roster.swim_all(&mut buf)?;
    assert_eq!(lines, 3);
    assert_eq!(
        String::from_utf8(buf)?,
        "I'm a Goldfish and I swim using fins!\n\
         I'm a Mallard and I swim with my webbed feet!\n\
         I'm a  and I swim with my webbed feet!\n"
    );
    Ok(())
}

/// 嚴格模式下空白名稱應驗證失敗
#[test]
fn test_strict_roster_file_rejects_empty_breed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("strict.toml");
    std::fs::write(&path, POND.replace("repeat = 1", "repeat = 1\nstrict = true"))?;

    let config = RosterConfig::from_file(&path)?;
    assert!(config.strict());

    let err = config.validate().unwrap_err();
    assert!(matches!(
        &err,
        SwimError::ValidationError { field, value, .. } if field == "swimmers[2].breed" && value.is_empty()
    ));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[test]
fn test_malformed_roster_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "[[swimmers]]\nkind = \"duck\"\n")?;

    let result = RosterConfig::from_file(&path);
    assert!(matches!(result, Err(SwimError::TomlError(_))));
    Ok(())
}
