use penumbra::{
    log::{self, Level},
    Error,
};

#[test]
fn unopenable_log_file_is_an_io_error() {
    // a directory can't be opened for appending
    let result = log::init_with_path(Level::Info, std::env::temp_dir());

    match result {
        Err(Error::Io(err)) => assert!(!err.to_string().is_empty()),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(!log::enabled(Level::Error));
}
