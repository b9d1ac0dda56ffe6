use nexup_util::errors::NexupError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = NexupError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = NexupError::Config {
        message: "unsupported Nexus version 'nexus1'".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Configuration error: unsupported Nexus version 'nexus1'"
    );
}

#[test]
fn test_transport_error_display() {
    let err = NexupError::Transport {
        message: "connection refused".to_string(),
    };
    assert_eq!(err.to_string(), "Transport error: connection refused");
}

#[test]
fn test_remote_error_display() {
    let err = NexupError::Remote {
        url: "http://nexus.example.com/repository/releases/a".to_string(),
        status: 403,
    };
    assert_eq!(
        err.to_string(),
        "Upload rejected: HTTP 403 for http://nexus.example.com/repository/releases/a"
    );
}

#[test]
fn test_generic_error_display() {
    let err = NexupError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let nexup_err: NexupError = io_err.into();
    matches!(nexup_err, NexupError::Io(_));
}
