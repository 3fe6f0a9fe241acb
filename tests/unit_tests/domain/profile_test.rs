use flashdeck::domain::{Profile, Theme, UserId};

#[test]
fn given_no_theme_when_defaulting_then_theme_is_pink() {
    assert_eq!(Theme::default(), Theme::Pink);
}

#[test]
fn given_mixed_case_theme_name_when_parsing_then_theme_is_recognised() {
    assert_eq!(" Purple ".parse::<Theme>(), Ok(Theme::Purple));
    assert_eq!("green".parse::<Theme>(), Ok(Theme::Green));
}

#[test]
fn given_unknown_theme_name_when_parsing_then_returns_error() {
    let result = "orange".parse::<Theme>();

    assert_eq!(result, Err("Invalid theme: orange".to_string()));
}

#[test]
fn given_email_when_building_default_profile_then_display_name_is_local_part() {
    let user_id = UserId::new();

    let profile = Profile::with_defaults(user_id, Some("ada@example.com"));

    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.display_name.as_deref(), Some("ada"));
    assert_eq!(profile.theme, Theme::Pink);
}

#[test]
fn given_no_email_when_building_default_profile_then_display_name_is_none() {
    let profile = Profile::with_defaults(UserId::new(), None);

    assert_eq!(profile.display_name, None);
}
