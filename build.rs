fn main() {
    // ESP-IDF build-environment passthrough — only meaningful when the
    // espidf feature (and toolchain) is active; host builds skip it.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
