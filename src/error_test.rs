use super::*;

#[test]
fn messages_name_the_failure() {
    assert_eq!(EffectsError::NoWindow.to_string(), "no window available");
    assert_eq!(EffectsError::NoDocument.to_string(), "no document available");
    assert_eq!(
        EffectsError::Selector { selector: "a[".to_owned() }.to_string(),
        "invalid selector \"a[\""
    );
    assert_eq!(EffectsError::Listener { event: "scroll" }.to_string(), "failed to attach scroll listener");
}

#[test]
fn json_errors_convert() {
    let Err(json_err) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("truncated JSON should not parse");
    };
    let err = EffectsError::from(json_err);
    assert!(err.to_string().starts_with("config parse failed:"));
}
