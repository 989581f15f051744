fn main() {
    // Only the firmware image needs the ESP-IDF environment; host test
    // builds run with `--no-default-features`.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
