use person_record::domain::{new_person, Person, PersonUpdate};

/// Everything here runs outside `domain::person`, so only the exported fields can be named.
#[test]
fn test_exported_fields_are_readable_from_outside() {
    let person = new_person("Homer", "Simpson", "s3cr37");

    assert_eq!(person.first_name, "Homer");
    assert_eq!(person.last_name, "Simpson");
}

#[test]
fn test_exported_fields_are_writable_from_outside() {
    let mut person = new_person("Homer", "Simpson", "s3cr37");
    person.first_name = "Marge".to_string();
    person.last_name.push_str("-Bouvier");

    assert_eq!(person.first_name, "Marge");
    assert_eq!(person.last_name, "Simpson-Bouvier");
    assert_eq!(
        person.to_string(),
        "{first_name:Marge last_name:Simpson-Bouvier secret:s3cr37}"
    );
}

#[test]
fn test_display_reveals_secret_to_formatting() {
    let person = new_person("Homer", "Simpson", "s3cr37");

    assert_eq!(
        person.to_string(),
        "{first_name:Homer last_name:Simpson secret:s3cr37}"
    );
}

#[test]
fn test_constructor_forms_agree() {
    assert_eq!(
        new_person("Ned", "Flanders", "okily"),
        Person::new("Ned".to_string(), "Flanders".to_string(), "okily".to_string())
    );
    assert_ne!(
        new_person("Ned", "Flanders", "okily"),
        new_person("Ned", "Flanders", "dokily")
    );
}

#[test]
fn test_update_from_json_touches_only_named_fields() {
    let mut person = new_person("Homer", "Simpson", "s3cr37");
    let update: PersonUpdate =
        serde_json::from_str(r#"{"last_name":"Thompson"}"#).expect("Failed to parse update");

    assert_eq!(update.first_name, None);
    person.apply_update(update);

    assert_eq!(person.first_name, "Homer");
    assert_eq!(person.last_name, "Thompson");
    assert_eq!(
        person.to_string(),
        "{first_name:Homer last_name:Thompson secret:s3cr37}"
    );
}

#[test]
fn test_empty_update_is_a_no_op() {
    let mut person = new_person("Homer", "Simpson", "s3cr37");
    let before = person.clone();
    person.apply_update(PersonUpdate::default());

    assert_eq!(person, before);
}

#[test]
fn test_serialized_person_omits_secret() {
    let person = new_person("Homer", "Simpson", "s3cr37");
    let json = serde_json::to_value(&person).expect("Failed to serialize person");

    assert_eq!(
        json,
        serde_json::json!({ "first_name": "Homer", "last_name": "Simpson" })
    );
    assert!(!json.to_string().contains("s3cr37"));
}
