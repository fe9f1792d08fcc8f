fn main() {
    hardway_ign::app::cli::run();
}
