fn main() {
    masthead::app::cli::run();
}
