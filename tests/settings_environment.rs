// Kept in its own test binary: the variables set here are process wide.
use filesets::config::Settings;

#[test]
fn environment_variables_are_read() {
    // SAFETY: this binary runs no other test that reads the environment.
    unsafe {
        std::env::set_var("FILESETS_MAX_ID", "42");
        std::env::set_var("FILESETS_SHUFFLE", "true");
    }
    let settings = Settings::load(None).unwrap();
    assert_eq!(settings.max_id, Some(42));
    assert!(settings.shuffle);
    assert!(!settings.verbose);
    assert_eq!(settings.domain().unwrap().max_id(), 42);
}
