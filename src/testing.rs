pub fn init_test() {
    drop(env_logger::try_init());
}
