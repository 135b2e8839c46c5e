use std::env;

use learning_portal::config::{get_config, LogFormat};
use learning_portal::Portal;
use uuid::Uuid;

// Own test binary: `from_env` fills process-wide config and tracing once.
#[test]
fn from_env_installs_configured_log_format() {
    let dir = env::temp_dir().join(format!("portal-boot-{}", Uuid::new_v4()));
    env::set_var("PORTAL_DATA_DIR", &dir);
    env::set_var("PORTAL_LOG_FORMAT", "json");
    env::remove_var("PORTAL_CATALOG_PATH");

    let portal = Portal::from_env().expect("portal");

    assert_eq!(get_config().expect("config").log_format, LogFormat::Json);
    assert_eq!(learning_portal::tracing_format(), Some(LogFormat::Json));
    assert!(dir.is_dir());
    assert_eq!(portal.catalog.len(), 5);

    assert!(Portal::from_env().is_err());
}
