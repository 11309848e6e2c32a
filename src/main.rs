fn main() {
    provision::app::cli::run();
}
