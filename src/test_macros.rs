#[macro_export]
macro_rules! relative_file {
    ($f : expr) => {{
        let base = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        base.join($f)
    }};
}

#[macro_export]
macro_rules! bytes_from_relative_file {
    ($f : expr) => {{
        let path = $crate::relative_file!($f);
        std::fs::read(path).unwrap()
    }};
}
