use migrator_core::errors::{ExError, ExErrorKind, MigratorError};
use migrator_core::Direction;

#[test]
fn test_target_not_found_verifiable_by_kind() {
    let err = MigratorError::TargetNotFound {
        target: "Z".to_string(),
        direction: Direction::Up,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::TargetNotFound);
    assert_eq!(ex_err.code(), "ERR_TARGET_NOT_FOUND");
    assert_eq!(ex_err.migration(), Some("Z"));
    assert_eq!(ex_err.message(), "Migration \"Z\" does not exist.");
}

#[test]
fn test_folder_not_found_distinct_from_target_not_found() {
    let ex_err: ExError = MigratorError::FolderNotFound {
        path: "/nope".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_ne!(ex_err.kind(), ExErrorKind::TargetNotFound);
    assert!(ex_err.message().contains("/nope"));
}

#[test]
fn test_already_applied_is_conflict() {
    let ex_err: ExError = MigratorError::AlreadyApplied {
        name: "A".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Conflict);
    assert_eq!(ex_err.op(), Some("record_applied"));
}

#[test]
fn test_script_failure_is_database_error_with_direction_op() {
    let ex_err: ExError = MigratorError::ScriptFailed {
        name: "B".to_string(),
        direction: Direction::Down,
        reason: "no such table: b".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Database);
    assert_eq!(ex_err.op(), Some("migrate_down"));
    assert_eq!(ex_err.migration(), Some("B"));
    assert!(ex_err.to_string().contains("no such table: b"));
}

#[test]
fn test_validation_errors_reported_together() {
    let ex_err: ExError = MigratorError::InvalidInput {
        errors: vec![
            "--connection-string is required.".to_string(),
            "--folder is required.".to_string(),
        ],
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Validation);
    assert!(ex_err.message().contains("--connection-string is required."));
    assert!(ex_err.message().contains("--folder is required."));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::Validation, "ERR_VALIDATION"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::TargetNotFound, "ERR_TARGET_NOT_FOUND"),
        (ExErrorKind::Database, "ERR_DATABASE"),
        (ExErrorKind::Conflict, "ERR_CONFLICT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
